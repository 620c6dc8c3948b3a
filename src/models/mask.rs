//! CIDR mask (prefix length) types.
//!
//! [`Ipv4CidrMask`] holds `0..=32` and [`Ipv6CidrMask`] holds `0..=128`.
//! Out-of-range or non-integer input is rejected with [`AddressError::Range`],
//! never clamped.

use super::family::{AddressFamily, IPV4_BITS, IPV6_BITS};
use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn check_mask(family: AddressFamily, value: i64) -> Result<u8, AddressError> {
    let max = family.bits();
    if (0..=i64::from(max)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(AddressError::Range {
            family,
            value: value.to_string(),
            max,
        })
    }
}

/// Parse a decimal mask. Signs, blanks and fractions are not integers here.
fn parse_mask(family: AddressFamily, text: &str) -> Result<u8, AddressError> {
    let not_integer = || AddressError::Range {
        family,
        value: text.to_string(),
        max: family.bits(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_integer());
    }
    let value: i64 = text.parse().map_err(|_| not_integer())?;
    check_mask(family, value)
}

/// An IPv4 prefix length, `0..=32`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "u8")]
pub struct Ipv4CidrMask(u8);

impl Ipv4CidrMask {
    pub const MAX: Ipv4CidrMask = Ipv4CidrMask(IPV4_BITS);

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Ipv4CidrMask {
    type Error = AddressError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_mask(AddressFamily::Ipv4, value).map(Ipv4CidrMask)
    }
}

impl TryFrom<u8> for Ipv4CidrMask {
    type Error = AddressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ipv4CidrMask::try_from(i64::from(value))
    }
}

impl FromStr for Ipv4CidrMask {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mask(AddressFamily::Ipv4, s).map(Ipv4CidrMask)
    }
}

impl From<Ipv4CidrMask> for u8 {
    fn from(mask: Ipv4CidrMask) -> u8 {
        mask.0
    }
}

/// An IPv6 prefix length, `0..=128`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "u8")]
pub struct Ipv6CidrMask(u8);

impl Ipv6CidrMask {
    pub const MAX: Ipv6CidrMask = Ipv6CidrMask(IPV6_BITS);

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Ipv6CidrMask {
    type Error = AddressError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_mask(AddressFamily::Ipv6, value).map(Ipv6CidrMask)
    }
}

impl TryFrom<u8> for Ipv6CidrMask {
    type Error = AddressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ipv6CidrMask::try_from(i64::from(value))
    }
}

impl FromStr for Ipv6CidrMask {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mask(AddressFamily::Ipv6, s).map(Ipv6CidrMask)
    }
}

impl From<Ipv6CidrMask> for u8 {
    fn from(mask: Ipv6CidrMask) -> u8 {
        mask.0
    }
}

/// A mask of either family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CidrMask {
    Ipv4(Ipv4CidrMask),
    Ipv6(Ipv6CidrMask),
}

impl CidrMask {
    /// Validate `value` against the range of `family`.
    pub fn new(family: AddressFamily, value: i64) -> Result<CidrMask, AddressError> {
        match family {
            AddressFamily::Ipv4 => Ipv4CidrMask::try_from(value).map(CidrMask::Ipv4),
            AddressFamily::Ipv6 => Ipv6CidrMask::try_from(value).map(CidrMask::Ipv6),
        }
    }

    /// Parse a decimal mask for `family`.
    pub fn parse(family: AddressFamily, text: &str) -> Result<CidrMask, AddressError> {
        match family {
            AddressFamily::Ipv4 => text.parse().map(CidrMask::Ipv4),
            AddressFamily::Ipv6 => text.parse().map(CidrMask::Ipv6),
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            CidrMask::Ipv4(_) => AddressFamily::Ipv4,
            CidrMask::Ipv6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn get(&self) -> u8 {
        match self {
            CidrMask::Ipv4(mask) => mask.get(),
            CidrMask::Ipv6(mask) => mask.get(),
        }
    }
}

impl fmt::Display for Ipv4CidrMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Ipv6CidrMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CidrMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_mask_bounds() {
        assert_eq!(Ipv4CidrMask::try_from(0i64).unwrap().get(), 0);
        assert_eq!(Ipv4CidrMask::try_from(32i64).unwrap().get(), 32);
        assert_eq!(Ipv4CidrMask::try_from(24u8).unwrap().get(), 24);
        assert_eq!(
            Ipv4CidrMask::try_from(33i64).unwrap_err(),
            AddressError::Range {
                family: AddressFamily::Ipv4,
                value: "33".to_string(),
                max: 32
            }
        );
        assert_eq!(
            Ipv4CidrMask::try_from(-1i64).unwrap_err(),
            AddressError::Range {
                family: AddressFamily::Ipv4,
                value: "-1".to_string(),
                max: 32
            }
        );
    }

    #[test]
    fn test_ipv6_mask_bounds() {
        assert_eq!(Ipv6CidrMask::try_from(0i64).unwrap().get(), 0);
        assert_eq!(Ipv6CidrMask::try_from(64i64).unwrap().get(), 64);
        assert_eq!(Ipv6CidrMask::try_from(128i64).unwrap(), Ipv6CidrMask::MAX);
        assert!(Ipv6CidrMask::try_from(129i64).is_err());
        assert!(Ipv6CidrMask::try_from(-1i64).is_err());
    }

    #[test]
    fn test_parse_mask_text() {
        assert_eq!("24".parse::<Ipv4CidrMask>().unwrap().get(), 24);
        assert_eq!("128".parse::<Ipv6CidrMask>().unwrap().get(), 128);
        for text in ["", "+24", "-1", "2.5", " 24", "abc", "99999999999999999999999"] {
            assert!(
                matches!(
                    text.parse::<Ipv4CidrMask>(),
                    Err(AddressError::Range { .. })
                ),
                "{text:?} should be rejected"
            );
        }
        assert_eq!(
            "33".parse::<Ipv4CidrMask>().unwrap_err().to_string(),
            "cidr mask '33' is not an integer in 0..=32 for ipv4"
        );
    }

    #[test]
    fn test_cidr_mask_family() {
        let mask = CidrMask::new(AddressFamily::Ipv6, 100).unwrap();
        assert_eq!(mask.family(), AddressFamily::Ipv6);
        assert_eq!(mask.get(), 100);
        assert!(CidrMask::new(AddressFamily::Ipv4, 100).is_err());
        assert_eq!(CidrMask::parse(AddressFamily::Ipv4, "8").unwrap().to_string(), "8");
    }

    #[test]
    fn test_mask_serde() {
        let mask: Ipv4CidrMask = serde_json::from_str("24").unwrap();
        assert_eq!(mask.get(), 24);
        assert_eq!(serde_json::to_string(&mask).unwrap(), "24");
        assert!(serde_json::from_str::<Ipv4CidrMask>("33").is_err());
        assert!(serde_json::from_str::<Ipv4CidrMask>("24.5").is_err());
    }
}
