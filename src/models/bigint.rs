//! Numeric form of addresses.
//!
//! [`Ipv4Bigint`] and [`Ipv6Bigint`] are bounded by their underlying integer
//! width, so a value can never exceed its family's bit width. [`AddressBigint`]
//! is the family-tagged union of the two.

use super::address::Address;
use super::family::AddressFamily;
use super::ipv4::Ipv4Address;
use super::ipv6::Ipv6Address;
use crate::error::AddressError;
use num_bigint::BigUint;
use std::fmt;

/// An IPv4 address as a 32-bit unsigned integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Bigint(u32);

impl Ipv4Bigint {
    pub const fn new(value: u32) -> Self {
        Ipv4Bigint(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// An IPv6 address as a 128-bit unsigned integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv6Bigint(u128);

impl Ipv6Bigint {
    pub const fn new(value: u128) -> Self {
        Ipv6Bigint(value)
    }

    pub const fn get(self) -> u128 {
        self.0
    }
}

/// An address in numeric form, tagged with its family.
///
/// Ordering is numeric within a family; every IPv4 value sorts before every IPv6 value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressBigint {
    Ipv4(Ipv4Bigint),
    Ipv6(Ipv6Bigint),
}

impl AddressBigint {
    /// Build a value of `family`, rejecting values wider than the family.
    ///
    /// # Examples
    /// ```
    /// use subnet_cidr::models::{AddressBigint, AddressFamily};
    /// assert!(AddressBigint::new(AddressFamily::Ipv4, 1 << 32).is_err());
    /// assert_eq!(AddressBigint::new(AddressFamily::Ipv6, 1 << 32).unwrap().value(), 1 << 32);
    /// ```
    pub fn new(family: AddressFamily, value: u128) -> Result<AddressBigint, AddressError> {
        match family {
            AddressFamily::Ipv4 => u32::try_from(value)
                .map(|v| AddressBigint::Ipv4(Ipv4Bigint(v)))
                .map_err(|_| AddressError::BigintOverflow {
                    family,
                    value: value.to_string(),
                }),
            AddressFamily::Ipv6 => Ok(AddressBigint::Ipv6(Ipv6Bigint(value))),
        }
    }

    /// Build a value of `family` from an arbitrary-precision integer.
    pub fn from_biguint(family: AddressFamily, value: &BigUint) -> Result<AddressBigint, AddressError> {
        let narrow = u128::try_from(value).map_err(|_| AddressError::BigintOverflow {
            family,
            value: value.to_string(),
        })?;
        AddressBigint::new(family, narrow)
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            AddressBigint::Ipv4(_) => AddressFamily::Ipv4,
            AddressBigint::Ipv6(_) => AddressFamily::Ipv6,
        }
    }

    /// The numeric value widened to 128 bits.
    pub fn value(&self) -> u128 {
        match self {
            AddressBigint::Ipv4(v) => u128::from(v.get()),
            AddressBigint::Ipv6(v) => v.get(),
        }
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from(self.value())
    }

    /// Number of binary digits needed to write the value, with `0` written as a single digit.
    pub fn bit_length(&self) -> u8 {
        let value = self.value();
        if value == 0 {
            1
        } else {
            (128 - value.leading_zeros()) as u8
        }
    }

    /// Encode back into textual form. IPv6 values are always rendered fully expanded.
    pub fn to_address(&self) -> Address {
        match self {
            AddressBigint::Ipv4(v) => Address::Ipv4(Ipv4Address::from_bigint(*v)),
            AddressBigint::Ipv6(v) => Address::Ipv6(Ipv6Address::from_bigint(*v)),
        }
    }
}

impl From<Ipv4Bigint> for AddressBigint {
    fn from(value: Ipv4Bigint) -> Self {
        AddressBigint::Ipv4(value)
    }
}

impl From<Ipv6Bigint> for AddressBigint {
    fn from(value: Ipv6Bigint) -> Self {
        AddressBigint::Ipv6(value)
    }
}

impl fmt::Display for AddressBigint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_width() {
        assert_eq!(
            AddressBigint::new(AddressFamily::Ipv4, u32::MAX as u128).unwrap(),
            AddressBigint::Ipv4(Ipv4Bigint::new(u32::MAX))
        );
        assert_eq!(
            AddressBigint::new(AddressFamily::Ipv4, 1 << 32).unwrap_err(),
            AddressError::BigintOverflow {
                family: AddressFamily::Ipv4,
                value: "4294967296".to_string()
            }
        );
        assert_eq!(
            AddressBigint::new(AddressFamily::Ipv6, u128::MAX).unwrap().value(),
            u128::MAX
        );
    }

    #[test]
    fn test_from_biguint() {
        let big = BigUint::from(u128::MAX) + 1u32;
        assert!(AddressBigint::from_biguint(AddressFamily::Ipv6, &big).is_err());
        let small = BigUint::from(16843009u32);
        let value = AddressBigint::from_biguint(AddressFamily::Ipv4, &small).unwrap();
        assert_eq!(value.to_address().to_string(), "1.1.1.1");
        assert_eq!(value.to_biguint(), small);
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(AddressBigint::Ipv4(Ipv4Bigint::new(0)).bit_length(), 1);
        assert_eq!(AddressBigint::Ipv4(Ipv4Bigint::new(1)).bit_length(), 1);
        assert_eq!(AddressBigint::Ipv4(Ipv4Bigint::new(5)).bit_length(), 3);
        assert_eq!(AddressBigint::Ipv4(Ipv4Bigint::new(u32::MAX)).bit_length(), 32);
        assert_eq!(AddressBigint::Ipv6(Ipv6Bigint::new(u128::MAX)).bit_length(), 128);
    }

    #[test]
    fn test_ordering() {
        let a = AddressBigint::Ipv4(Ipv4Bigint::new(10));
        let b = AddressBigint::Ipv4(Ipv4Bigint::new(11));
        let c = AddressBigint::Ipv6(Ipv6Bigint::new(0));
        assert!(a < b);
        assert!(b < c);
    }
}
