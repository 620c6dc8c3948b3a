//! CIDR block types and the operations derived from them.
//!
//! A block pairs an address with a mask of the same family. The base address is
//! decoded to its numeric form once at construction, so network/broadcast
//! computation, cardinality and range enumeration are infallible afterwards.

use super::address::Address;
use super::bigint::{AddressBigint, Ipv4Bigint, Ipv6Bigint};
use super::family::{AddressFamily, IPV4_BITS, IPV6_BITS};
use super::ipv4::Ipv4Address;
use super::ipv6::Ipv6Address;
use super::mask::{CidrMask, Ipv4CidrMask, Ipv6CidrMask};
use crate::error::AddressError;
use crate::processing::AddressRange;
use num_bigint::BigUint;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// All-ones in the trailing `bits - mask` positions.
fn host_bits(bits: u8, mask: u8) -> u128 {
    let host_len = u32::from(bits.saturating_sub(mask));
    if host_len == 0 {
        0
    } else {
        u128::MAX >> (128 - host_len)
    }
}

/// Keep the leading `mask` bits of `value`, clear the rest.
pub(crate) fn network_value(value: u128, bits: u8, mask: u8) -> u128 {
    value & !host_bits(bits, mask)
}

/// Keep the leading `mask` bits of `value`, set the rest.
pub(crate) fn broadcast_value(value: u128, bits: u8, mask: u8) -> u128 {
    value | host_bits(bits, mask)
}

/// `last - first + 1` without overflowing at `2^128`.
fn span(first: u128, last: u128) -> BigUint {
    BigUint::from(last - first) + 1u32
}

/// An IPv4 address with an IPv4 mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4CidrBlock {
    address: Ipv4Address,
    mask: Ipv4CidrMask,
    base: Ipv4Bigint,
}

impl Ipv4CidrBlock {
    pub fn new(address: Ipv4Address, mask: Ipv4CidrMask) -> Result<Ipv4CidrBlock, AddressError> {
        let base = address.to_bigint()?;
        Ok(Ipv4CidrBlock {
            address,
            mask,
            base,
        })
    }

    pub fn address(&self) -> &Ipv4Address {
        &self.address
    }

    pub fn mask(&self) -> Ipv4CidrMask {
        self.mask
    }

    pub fn network_address_bigint(&self) -> Ipv4Bigint {
        let value = network_value(u128::from(self.base.get()), IPV4_BITS, self.mask.get());
        Ipv4Bigint::new(value as u32)
    }

    /// Lowest address in the block, e.g. `192.168.1.0` for `192.168.1.10/24`.
    pub fn network_address(&self) -> Ipv4Address {
        Ipv4Address::from_bigint(self.network_address_bigint())
    }

    pub fn broadcast_address_bigint(&self) -> Ipv4Bigint {
        let value = broadcast_value(u128::from(self.base.get()), IPV4_BITS, self.mask.get());
        Ipv4Bigint::new(value as u32)
    }

    /// Highest address in the block, e.g. `192.168.1.255` for `192.168.1.10/24`.
    pub fn broadcast_address(&self) -> Ipv4Address {
        Ipv4Address::from_bigint(self.broadcast_address_bigint())
    }

    /// Number of addresses in the block.
    pub fn total(&self) -> BigUint {
        span(
            u128::from(self.network_address_bigint().get()),
            u128::from(self.broadcast_address_bigint().get()),
        )
    }

    /// Every address from network to broadcast, ascending, computed lazily.
    pub fn range(&self) -> AddressRange {
        AddressRange::between(
            AddressFamily::Ipv4,
            u128::from(self.network_address_bigint().get()),
            u128::from(self.broadcast_address_bigint().get()),
        )
    }

    pub fn contains(&self, address: &Ipv4Address) -> bool {
        match address.to_bigint() {
            Ok(value) => {
                self.network_address_bigint() <= value && value <= self.broadcast_address_bigint()
            }
            Err(_) => false,
        }
    }
}

/// An IPv6 address with an IPv6 mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv6CidrBlock {
    address: Ipv6Address,
    mask: Ipv6CidrMask,
    base: Ipv6Bigint,
}

impl Ipv6CidrBlock {
    pub fn new(address: Ipv6Address, mask: Ipv6CidrMask) -> Result<Ipv6CidrBlock, AddressError> {
        let base = address.to_bigint()?;
        Ok(Ipv6CidrBlock {
            address,
            mask,
            base,
        })
    }

    pub fn address(&self) -> &Ipv6Address {
        &self.address
    }

    pub fn mask(&self) -> Ipv6CidrMask {
        self.mask
    }

    pub fn network_address_bigint(&self) -> Ipv6Bigint {
        Ipv6Bigint::new(network_value(self.base.get(), IPV6_BITS, self.mask.get()))
    }

    /// Lowest address in the block, always in expanded form.
    pub fn network_address(&self) -> Ipv6Address {
        Ipv6Address::from_bigint(self.network_address_bigint())
    }

    pub fn broadcast_address_bigint(&self) -> Ipv6Bigint {
        Ipv6Bigint::new(broadcast_value(self.base.get(), IPV6_BITS, self.mask.get()))
    }

    /// Highest address in the block, always in expanded form.
    pub fn broadcast_address(&self) -> Ipv6Address {
        Ipv6Address::from_bigint(self.broadcast_address_bigint())
    }

    /// Number of addresses in the block; `2^128` for `/0`.
    pub fn total(&self) -> BigUint {
        span(
            self.network_address_bigint().get(),
            self.broadcast_address_bigint().get(),
        )
    }

    pub fn range(&self) -> AddressRange {
        AddressRange::between(
            AddressFamily::Ipv6,
            self.network_address_bigint().get(),
            self.broadcast_address_bigint().get(),
        )
    }

    pub fn contains(&self, address: &Ipv6Address) -> bool {
        match address.to_bigint() {
            Ok(value) => {
                self.network_address_bigint() <= value && value <= self.broadcast_address_bigint()
            }
            Err(_) => false,
        }
    }
}

/// A CIDR block of either family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CidrBlock {
    Ipv4(Ipv4CidrBlock),
    Ipv6(Ipv6CidrBlock),
}

impl CidrBlock {
    /// Pair `address` with `mask`; both must be of the same family.
    pub fn new(address: Address, mask: CidrMask) -> Result<CidrBlock, AddressError> {
        match (address, mask) {
            (Address::Ipv4(address), CidrMask::Ipv4(mask)) => {
                Ipv4CidrBlock::new(address, mask).map(CidrBlock::Ipv4)
            }
            (Address::Ipv6(address), CidrMask::Ipv6(mask)) => {
                Ipv6CidrBlock::new(address, mask).map(CidrBlock::Ipv6)
            }
            (address, mask) => Err(AddressError::FamilyMismatch {
                expected: address.family(),
                found: mask.family(),
                input: format!("{address}/{mask}"),
            }),
        }
    }

    /// Parse a `<address>/<mask>` literal such as `10.0.0.0/24` or `2001:db8::/32`.
    ///
    /// # Examples
    /// ```
    /// use subnet_cidr::models::CidrBlock;
    /// let block = CidrBlock::parse("192.168.1.10/24").unwrap();
    /// assert_eq!(block.network_address().to_string(), "192.168.1.0");
    /// assert_eq!(block.broadcast_address().to_string(), "192.168.1.255");
    /// assert_eq!(block.total().to_string(), "256");
    /// ```
    pub fn parse(addr_cidr: &str) -> Result<CidrBlock, AddressError> {
        let (address, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| AddressError::format(None, addr_cidr))?;
        let address = Address::parse(address)?;
        let mask = CidrMask::parse(address.family(), mask)?;
        CidrBlock::new(address, mask)
    }

    /// Run `on_ipv4` or `on_ipv6` depending on the block's family.
    pub fn on_family<'a, R>(
        &'a self,
        on_ipv4: impl FnOnce(&'a Ipv4CidrBlock) -> R,
        on_ipv6: impl FnOnce(&'a Ipv6CidrBlock) -> R,
    ) -> R {
        match self {
            CidrBlock::Ipv4(block) => on_ipv4(block),
            CidrBlock::Ipv6(block) => on_ipv6(block),
        }
    }

    pub fn family(&self) -> AddressFamily {
        self.on_family(|_| AddressFamily::Ipv4, |_| AddressFamily::Ipv6)
    }

    pub fn address(&self) -> Address {
        self.on_family(
            |b| Address::Ipv4(b.address().clone()),
            |b| Address::Ipv6(b.address().clone()),
        )
    }

    pub fn mask(&self) -> CidrMask {
        self.on_family(|b| CidrMask::Ipv4(b.mask()), |b| CidrMask::Ipv6(b.mask()))
    }

    pub fn network_address_bigint(&self) -> AddressBigint {
        self.on_family(
            |b| AddressBigint::Ipv4(b.network_address_bigint()),
            |b| AddressBigint::Ipv6(b.network_address_bigint()),
        )
    }

    pub fn network_address(&self) -> Address {
        self.network_address_bigint().to_address()
    }

    pub fn broadcast_address_bigint(&self) -> AddressBigint {
        self.on_family(
            |b| AddressBigint::Ipv4(b.broadcast_address_bigint()),
            |b| AddressBigint::Ipv6(b.broadcast_address_bigint()),
        )
    }

    pub fn broadcast_address(&self) -> Address {
        self.broadcast_address_bigint().to_address()
    }

    pub fn total(&self) -> BigUint {
        self.on_family(Ipv4CidrBlock::total, Ipv6CidrBlock::total)
    }

    /// Lazily enumerate the block. Each call starts a fresh, independent iterator.
    pub fn range(&self) -> AddressRange {
        self.on_family(Ipv4CidrBlock::range, Ipv6CidrBlock::range)
    }

    /// Whether `address` falls inside the block. Addresses of the other family never do.
    pub fn contains(&self, address: &Address) -> bool {
        match (self, address) {
            (CidrBlock::Ipv4(block), Address::Ipv4(ip)) => block.contains(ip),
            (CidrBlock::Ipv6(block), Address::Ipv6(ip)) => block.contains(ip),
            _ => false,
        }
    }
}

impl FromStr for CidrBlock {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CidrBlock::parse(s)
    }
}

impl From<Ipv4CidrBlock> for CidrBlock {
    fn from(block: Ipv4CidrBlock) -> Self {
        CidrBlock::Ipv4(block)
    }
}

impl From<Ipv6CidrBlock> for CidrBlock {
    fn from(block: Ipv6CidrBlock) -> Self {
        CidrBlock::Ipv6(block)
    }
}

impl fmt::Display for Ipv4CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.mask)
    }
}

impl fmt::Display for Ipv6CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.mask)
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CidrBlock::Ipv4(block) => fmt::Display::fmt(block, f),
            CidrBlock::Ipv6(block) => fmt::Display::fmt(block, f),
        }
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::parse(&s).map_err(de::Error::custom)
    }
}
