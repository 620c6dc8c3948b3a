//! IPv6 address string codec.
//!
//! Accepts the full eight-group form, a single `::` zero-compression run, an
//! embedded trailing dotted-decimal quad and an optional `%zone` suffix. The
//! numeric encoder always renders the fully expanded eight-group form and
//! never re-compresses zero runs.

use super::bigint::Ipv6Bigint;
use super::family::AddressFamily;
use super::ipv4::{ipv4_pattern, Ipv4Address};
use crate::error::AddressError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::iter;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// One hextet, 1 to 4 hex digits.
const IPV6_SEGMENT: &str = "(?:[0-9a-fA-F]{1,4})";

/// Number of hextets in an expanded address.
const IPV6_GROUPS: usize = 8;

fn ipv6_pattern() -> String {
    format!(
        concat!(
            "^(?:",
            "(?:{seg}:){{7}}(?:{seg}|:)|",
            "(?:{seg}:){{6}}(?:{v4}|:{seg}|:)|",
            "(?:{seg}:){{5}}(?::{v4}|(?::{seg}){{1,2}}|:)|",
            "(?:{seg}:){{4}}(?:(?::{seg}){{0,1}}:{v4}|(?::{seg}){{1,3}}|:)|",
            "(?:{seg}:){{3}}(?:(?::{seg}){{0,2}}:{v4}|(?::{seg}){{1,4}}|:)|",
            "(?:{seg}:){{2}}(?:(?::{seg}){{0,3}}:{v4}|(?::{seg}){{1,5}}|:)|",
            "(?:{seg}:){{1}}(?:(?::{seg}){{0,4}}:{v4}|(?::{seg}){{1,6}}|:)|",
            "(?::(?:(?::{seg}){{0,5}}:{v4}|(?::{seg}){{1,7}}|:))",
            ")(?:%[0-9a-zA-Z.:\\-]+)?$"
        ),
        seg = IPV6_SEGMENT,
        v4 = ipv4_pattern()
    )
}

lazy_static! {
    static ref IPV6_RE: Regex = Regex::new(&ipv6_pattern()).expect("Invalid Regex?");
}

/// An IPv6 address in colon-separated hextet notation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv6Address(String);

impl Ipv6Address {
    /// Validate `ip` against the hextet grammar.
    ///
    /// # Examples
    /// ```
    /// use subnet_cidr::models::Ipv6Address;
    /// assert!(Ipv6Address::parse("2001:0db8:85a3:0000:0000:8a2e:0370:7334").is_ok());
    /// assert!(Ipv6Address::parse("2001::85a3::0000::0370:7334").is_err());
    /// ```
    pub fn parse(ip: &str) -> Result<Ipv6Address, AddressError> {
        if IPV6_RE.is_match(ip) {
            Ok(Ipv6Address(ip.to_string()))
        } else {
            log::trace!("rejecting ipv6 literal {ip:?}");
            Err(AddressError::format(Some(AddressFamily::Ipv6), ip))
        }
    }

    /// The stored literal, including any zone suffix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `%zone` suffix without the `%`, if present.
    pub fn zone(&self) -> Option<&str> {
        self.0.split_once('%').map(|(_, zone)| zone)
    }

    fn without_zone(&self) -> &str {
        self.0.split_once('%').map_or(self.0.as_str(), |(addr, _)| addr)
    }

    /// Decode into the 128-bit numeric form. The zone suffix does not take part.
    ///
    /// Expands a single `::` run into the missing zero groups and an embedded
    /// dotted quad into the last two groups.
    pub fn to_bigint(&self) -> Result<Ipv6Bigint, AddressError> {
        let ip = expand_embedded_ipv4(self.without_zone())?;

        let halves: Vec<&str> = ip.split("::").collect();
        let groups: Vec<&str> = match halves.as_slice() {
            [left, right] => {
                let left = split_groups(left);
                let right = split_groups(right);
                let used = left.len() + right.len();
                if used >= IPV6_GROUPS {
                    return Err(AddressError::arity(
                        &self.0,
                        "no zero groups left for '::' to elide",
                    ));
                }
                left.into_iter()
                    .chain(iter::repeat("0").take(IPV6_GROUPS - used))
                    .chain(right)
                    .collect()
            }
            [whole] => whole.split(':').collect(),
            _ => return Err(AddressError::arity(&self.0, "too many :: groups found")),
        };

        if groups.len() != IPV6_GROUPS {
            return Err(AddressError::arity(&self.0, "invalid number of groups"));
        }

        let mut value: u128 = 0;
        for group in groups {
            let hextet = u16::from_str_radix(group, 16)
                .map_err(|_| AddressError::format(Some(AddressFamily::Ipv6), &self.0))?;
            value = (value << 16) | u128::from(hextet);
        }
        Ok(Ipv6Bigint::new(value))
    }

    /// Encode a numeric value as eight zero-padded groups, e.g.
    /// `2001:0db8:0000:0000:0000:0000:0000:0001`.
    pub fn from_bigint(value: Ipv6Bigint) -> Ipv6Address {
        let value = value.get();
        let ip = (0..IPV6_GROUPS)
            .map(|i| format!("{:04x}", (value >> (112 - 16 * i)) as u16))
            .join(":");
        Ipv6Address(ip)
    }
}

/// Groups of one side of a `::`; an empty side has none.
fn split_groups(half: &str) -> Vec<&str> {
    if half.is_empty() {
        vec![]
    } else {
        half.split(':').collect()
    }
}

/// Rewrite a trailing dotted quad as two hextets, `::ffff:1.2.3.4` -> `::ffff:102:304`.
fn expand_embedded_ipv4(ip: &str) -> Result<Cow<'_, str>, AddressError> {
    match ip.rfind(':') {
        Some(idx) if ip[idx + 1..].contains('.') => {
            let quad = Ipv4Address::parse(&ip[idx + 1..])?.to_bigint()?.get();
            Ok(Cow::Owned(format!(
                "{}{:x}:{:x}",
                &ip[..=idx],
                quad >> 16,
                quad & 0xFFFF
            )))
        }
        _ => Ok(Cow::Borrowed(ip)),
    }
}

impl FromStr for Ipv6Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6Address::parse(s)
    }
}

impl TryFrom<String> for Ipv6Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if IPV6_RE.is_match(&value) {
            Ok(Ipv6Address(value))
        } else {
            Err(AddressError::format(Some(AddressFamily::Ipv6), &value))
        }
    }
}

impl From<Ipv6Address> for String {
    fn from(address: Ipv6Address) -> String {
        address.0
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Ipv6Address::from_bigint(Ipv6Bigint::new(u128::from(addr)))
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
