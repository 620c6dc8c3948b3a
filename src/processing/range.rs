//! Lazy enumeration of consecutive addresses.

use crate::error::AddressError;
use crate::models::{Address, AddressBigint, AddressFamily, Ipv4Address, Ipv4Bigint, Ipv6Address, Ipv6Bigint};
use num_bigint::BigUint;
use std::iter::FusedIterator;

/// Ascending sequence of addresses between two endpoints, inclusive.
///
/// Nothing is materialized up front: each address is encoded only when it is
/// pulled, so taking a prefix of an IPv6 `/0` is as cheap as taking a prefix of
/// an IPv4 `/30`. Cloning yields an independent cursor at the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRange {
    family: AddressFamily,
    front: u128,
    back: u128,
    exhausted: bool,
}

impl AddressRange {
    /// Range from `first` to `last`; empty when `first > last`.
    pub fn new(first: AddressBigint, last: AddressBigint) -> Result<AddressRange, AddressError> {
        if first.family() != last.family() {
            return Err(AddressError::FamilyMismatch {
                expected: first.family(),
                found: last.family(),
                input: last.to_address().to_string(),
            });
        }
        Ok(AddressRange::between(first.family(), first.value(), last.value()))
    }

    pub(crate) fn between(family: AddressFamily, first: u128, last: u128) -> AddressRange {
        AddressRange {
            family,
            front: first,
            back: last,
            exhausted: first > last,
        }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Number of addresses not yet yielded, exact even past `usize::MAX`.
    pub fn remaining(&self) -> BigUint {
        if self.exhausted {
            BigUint::from(0u32)
        } else {
            BigUint::from(self.back - self.front) + 1u32
        }
    }

    fn encode(&self, value: u128) -> Address {
        match self.family {
            AddressFamily::Ipv4 => Address::Ipv4(Ipv4Address::from_bigint(Ipv4Bigint::new(value as u32))),
            AddressFamily::Ipv6 => Address::Ipv6(Ipv6Address::from_bigint(Ipv6Bigint::new(value))),
        }
    }
}

impl Iterator for AddressRange {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        if self.exhausted {
            return None;
        }
        let current = self.front;
        // never step past `back`, which may be u128::MAX
        if current == self.back {
            self.exhausted = true;
        } else {
            self.front += 1;
        }
        Some(self.encode(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match usize::try_from(self.back - self.front)
            .ok()
            .and_then(|n| n.checked_add(1))
        {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Address> {
        if self.exhausted {
            return None;
        }
        let step = n as u128;
        if self.back - self.front < step {
            self.exhausted = true;
            return None;
        }
        self.front += step;
        self.next()
    }
}

impl DoubleEndedIterator for AddressRange {
    fn next_back(&mut self) -> Option<Address> {
        if self.exhausted {
            return None;
        }
        let current = self.back;
        if current == self.front {
            self.exhausted = true;
        } else {
            self.back -= 1;
        }
        Some(self.encode(current))
    }
}

impl FusedIterator for AddressRange {}
