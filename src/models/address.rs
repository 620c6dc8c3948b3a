//! IPv4 or IPv6 address.

use super::bigint::AddressBigint;
use super::family::AddressFamily;
use super::ipv4::Ipv4Address;
use super::ipv6::Ipv6Address;
use crate::error::AddressError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// An address of either family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    Ipv4(Ipv4Address),
    Ipv6(Ipv6Address),
}

impl Address {
    /// Parse either an IPv4 or an IPv6 literal.
    pub fn parse(ip: &str) -> Result<Address, AddressError> {
        if let Ok(v4) = Ipv4Address::parse(ip) {
            return Ok(Address::Ipv4(v4));
        }
        match Ipv6Address::parse(ip) {
            Ok(v6) => Ok(Address::Ipv6(v6)),
            Err(_) => Err(AddressError::format(None, ip)),
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            Address::Ipv4(_) => AddressFamily::Ipv4,
            Address::Ipv6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Address::Ipv4(ip) => ip.as_str(),
            Address::Ipv6(ip) => ip.as_str(),
        }
    }

    pub fn to_bigint(&self) -> Result<AddressBigint, AddressError> {
        match self {
            Address::Ipv4(ip) => ip.to_bigint().map(AddressBigint::Ipv4),
            Address::Ipv6(ip) => ip.to_bigint().map(AddressBigint::Ipv6),
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl From<Ipv4Address> for Address {
    fn from(ip: Ipv4Address) -> Self {
        Address::Ipv4(ip)
    }
}

impl From<Ipv6Address> for Address {
    fn from(ip: Ipv6Address) -> Self {
        Address::Ipv6(ip)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::Ipv4(v4.into()),
            IpAddr::V6(v6) => Address::Ipv6(v6.into()),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(de::Error::custom)
    }
}
