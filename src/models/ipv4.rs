//! IPv4 address string codec.
//!
//! Provides [`Ipv4Address`], a dotted-decimal address that can only be built
//! through the validating parser, along with its conversion to and from
//! [`Ipv4Bigint`].

use super::bigint::Ipv4Bigint;
use super::family::AddressFamily;
use crate::error::AddressError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// One octet `0..=255` without superfluous leading zeros.
pub(crate) const IPV4_SEGMENT: &str = "(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])";

/// Unanchored dotted-decimal pattern, shared with the IPv6 grammar for embedded quads.
pub(crate) fn ipv4_pattern() -> String {
    format!("(?:{seg}\\.){{3}}{seg}", seg = IPV4_SEGMENT)
}

lazy_static! {
    static ref IPV4_RE: Regex = Regex::new(&format!("^{}$", ipv4_pattern())).expect("Invalid Regex?");
}

/// An IPv4 address in dot-decimal notation with no leading zeros.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv4Address(String);

impl Ipv4Address {
    /// Validate `ip` against the dotted-decimal grammar.
    ///
    /// # Examples
    /// ```
    /// use subnet_cidr::models::Ipv4Address;
    /// assert_eq!(Ipv4Address::parse("1.1.1.1").unwrap().as_str(), "1.1.1.1");
    /// assert!(Ipv4Address::parse("1.1.a.1").is_err());
    /// ```
    pub fn parse(ip: &str) -> Result<Ipv4Address, AddressError> {
        if IPV4_RE.is_match(ip) {
            Ok(Ipv4Address(ip.to_string()))
        } else {
            log::trace!("rejecting ipv4 literal {ip:?}");
            Err(AddressError::format(Some(AddressFamily::Ipv4), ip))
        }
    }

    /// The stored literal.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode into the 32-bit numeric form.
    pub fn to_bigint(&self) -> Result<Ipv4Bigint, AddressError> {
        let mut value: u32 = 0;
        let mut octets = 0;
        for octet in self.0.split('.') {
            let octet: u8 = octet
                .parse()
                .map_err(|_| AddressError::format(Some(AddressFamily::Ipv4), &self.0))?;
            value = (value << 8) | u32::from(octet);
            octets += 1;
        }
        if octets != 4 {
            return Err(AddressError::format(Some(AddressFamily::Ipv4), &self.0));
        }
        Ok(Ipv4Bigint::new(value))
    }

    /// Encode a numeric value back into dotted-decimal form.
    pub fn from_bigint(value: Ipv4Bigint) -> Ipv4Address {
        Ipv4Address(value.get().to_be_bytes().iter().join("."))
    }
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Address::parse(s)
    }
}

impl TryFrom<String> for Ipv4Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if IPV4_RE.is_match(&value) {
            Ok(Ipv4Address(value))
        } else {
            Err(AddressError::format(Some(AddressFamily::Ipv4), &value))
        }
    }
}

impl From<Ipv4Address> for String {
    fn from(address: Ipv4Address) -> String {
        address.0
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address::from_bigint(Ipv4Bigint::new(u32::from(addr)))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        for ip in ["0.0.0.0", "1.1.1.1", "10.0.0.1", "192.168.1.10", "255.255.255.255"] {
            let parsed = Ipv4Address::parse(ip).unwrap();
            assert_eq!(parsed.as_str(), ip);
            assert_eq!(parsed.to_string(), ip);
        }
    }

    #[test]
    fn test_parse_rejects() {
        for ip in [
            "",
            "256.1.1.1",
            "1.1.1",
            "1.1.1.1.1",
            "01.1.1.1",
            "1.1.1.00",
            "1.1.a.1",
            " 1.1.1.1",
            "1.1.1.1/24",
            "-1.1.1.1",
        ] {
            let err = Ipv4Address::parse(ip).unwrap_err();
            assert_eq!(
                err,
                AddressError::Format {
                    family: Some(AddressFamily::Ipv4),
                    input: ip.to_string()
                },
                "{ip} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_bigint() {
        let ip = Ipv4Address::parse("1.1.1.1").unwrap();
        assert_eq!(ip.to_bigint().unwrap().get(), 16843009);
        let ip = Ipv4Address::parse("254.254.254.254").unwrap();
        assert_eq!(ip.to_bigint().unwrap().get(), 4278124286);
        let ip = Ipv4Address::parse("0.0.0.0").unwrap();
        assert_eq!(ip.to_bigint().unwrap().get(), 0);
    }

    #[test]
    fn test_from_bigint() {
        assert_eq!(
            Ipv4Address::from_bigint(Ipv4Bigint::new(16843009)).as_str(),
            "1.1.1.1"
        );
        assert_eq!(
            Ipv4Address::from_bigint(Ipv4Bigint::new(0x0A00_0001)).as_str(),
            "10.0.0.1"
        );
        assert_eq!(
            Ipv4Address::from_bigint(Ipv4Bigint::new(u32::MAX)).as_str(),
            "255.255.255.255"
        );
    }

    #[test]
    fn test_round_trip() {
        for ip in ["0.0.0.0", "10.20.30.40", "172.16.254.1", "255.255.255.255"] {
            let parsed = Ipv4Address::parse(ip).unwrap();
            let back = Ipv4Address::from_bigint(parsed.to_bigint().unwrap());
            assert_eq!(back, parsed);
        }
    }

    #[test]
    fn test_from_std() {
        let ip: Ipv4Address = Ipv4Addr::new(192, 168, 1, 42).into();
        assert_eq!(ip.as_str(), "192.168.1.42");
    }

    #[test]
    fn test_serde() {
        let ip: Ipv4Address = serde_json::from_str(r#""10.0.0.1""#).unwrap();
        assert_eq!(ip.as_str(), "10.0.0.1");
        assert_eq!(serde_json::to_string(&ip).unwrap(), r#""10.0.0.1""#);
        assert!(serde_json::from_str::<Ipv4Address>(r#""10.0.0.256""#).is_err());
    }
}
