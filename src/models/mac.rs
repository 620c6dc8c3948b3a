//! Hardware (MAC) address.

use crate::error::AddressError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref MAC_RE: Regex =
        Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$").expect("Invalid Regex?");
}

/// A network interface's MAC address, six hex pairs separated by `:` or `-`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
    pub fn parse(mac: &str) -> Result<MacAddress, AddressError> {
        if MAC_RE.is_match(mac) {
            Ok(MacAddress(mac.to_string()))
        } else {
            Err(AddressError::InvalidMac {
                input: mac.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six octets.
    pub fn octets(&self) -> [u8; 6] {
        let mut octets = [0u8; 6];
        for (octet, pair) in octets.iter_mut().zip(self.0.split([':', '-'])) {
            // grammar guarantees two hex digits per pair
            *octet = u8::from_str_radix(pair, 16).unwrap_or_default();
        }
        octets
    }
}

impl FromStr for MacAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MacAddress::parse(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MacAddress::parse(&value)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> String {
        mac.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mac() {
        let mac = MacAddress::parse("02:42:ac:11:00:02").unwrap();
        assert_eq!(mac.octets(), [0x02, 0x42, 0xac, 0x11, 0x00, 0x02]);
        assert_eq!(mac.to_string(), "02:42:ac:11:00:02");

        let mac: MacAddress = "AA-BB-CC-DD-EE-FF".parse().unwrap();
        assert_eq!(mac.octets(), [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
    }

    #[test]
    fn test_reject_mac() {
        for mac in ["", "02:42:ac:11:00", "02:42:ac:11:00:02:03", "02:42:ac:11:00:0g", "0242ac110002"] {
            assert_eq!(
                MacAddress::parse(mac).unwrap_err(),
                AddressError::InvalidMac {
                    input: mac.to_string()
                }
            );
        }
    }
}
