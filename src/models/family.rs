//! Address family discriminator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of bits in an IPv4 address.
pub const IPV4_BITS: u8 = 32;
/// Number of bits in an IPv6 address.
pub const IPV6_BITS: u8 = 128;

/// Tags a value as IPv4 or IPv6.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    /// Width of an address of this family in bits.
    pub const fn bits(self) -> u8 {
        match self {
            AddressFamily::Ipv4 => IPV4_BITS,
            AddressFamily::Ipv6 => IPV6_BITS,
        }
    }

    /// Largest numeric value an address of this family can hold.
    pub const fn max_value(self) -> u128 {
        match self {
            AddressFamily::Ipv4 => u32::MAX as u128,
            AddressFamily::Ipv6 => u128::MAX,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => f.write_str("ipv4"),
            AddressFamily::Ipv6 => f.write_str("ipv6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits() {
        assert_eq!(AddressFamily::Ipv4.bits(), 32);
        assert_eq!(AddressFamily::Ipv6.bits(), 128);
        assert_eq!(AddressFamily::Ipv4.max_value(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_family_serde() {
        assert_eq!(
            serde_json::to_string(&AddressFamily::Ipv6).unwrap(),
            r#""ipv6""#
        );
        let family: AddressFamily = serde_json::from_str(r#""ipv4""#).unwrap();
        assert_eq!(family, AddressFamily::Ipv4);
        assert_eq!(family.to_string(), "ipv4");
    }
}
