//! Port numbers, optionally qualified by transport protocol.

use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An operating system port number, `0..=65535`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "u16")]
pub struct Port(u16);

impl Port {
    pub const fn new(port: u16) -> Port {
        Port(port)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Port {
    type Error = AddressError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map(Port)
            .map_err(|_| AddressError::InvalidPort {
                input: value.to_string(),
            })
    }
}

impl FromStr for Port {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AddressError::InvalidPort {
            input: s.to_string(),
        };
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse::<u16>().map(Port).map_err(|_| invalid())
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> u16 {
        port.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport protocol suffix of a port literal.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Protocol::Tcp => f.write_str("tcp"),
            Protocol::Udp => f.write_str("udp"),
        }
    }
}

/// A port literal such as `80`, `80/tcp` or `53/udp`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PortWithProtocol {
    pub port: Port,
    pub protocol: Option<Protocol>,
}

impl FromStr for PortWithProtocol {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (port, protocol) = match s.split_once('/') {
            None => (s, None),
            Some((port, "tcp")) => (port, Some(Protocol::Tcp)),
            Some((port, "udp")) => (port, Some(Protocol::Udp)),
            Some(_) => {
                return Err(AddressError::InvalidPort {
                    input: s.to_string(),
                })
            }
        };
        let port = port.parse::<Port>().map_err(|_| AddressError::InvalidPort {
            input: s.to_string(),
        })?;
        Ok(PortWithProtocol { port, protocol })
    }
}

impl TryFrom<String> for PortWithProtocol {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PortWithProtocol> for String {
    fn from(port: PortWithProtocol) -> String {
        port.to_string()
    }
}

impl fmt::Display for PortWithProtocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.protocol {
            Some(protocol) => write!(f, "{}/{}", self.port, protocol),
            None => write!(f, "{}", self.port),
        }
    }
}
