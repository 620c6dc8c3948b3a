//! Error type shared by every parser and constructor in the crate.

use crate::models::AddressFamily;
use thiserror::Error;

/// Validation failure raised while parsing or converting addresses and CIDR values.
///
/// Every variant carries the offending literal so it can be shown to a user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input does not match the address grammar.
    #[error("'{input}' is not a valid {} address", family_label(.family))]
    Format {
        /// Family that was expected, `None` when either family would have been accepted.
        family: Option<AddressFamily>,
        /// The rejected literal.
        input: String,
    },

    /// A CIDR mask is not an integer or lies outside `0..=max`.
    #[error("cidr mask '{value}' is not an integer in 0..={max} for {family}")]
    Range {
        family: AddressFamily,
        value: String,
        max: u8,
    },

    /// IPv6 `::` expansion cannot produce exactly eight groups.
    #[error("cannot expand ipv6 address '{input}': {reason}")]
    Arity { input: String, reason: String },

    /// Smallest enclosing block requested over an empty set.
    #[error("cannot compute an enclosing cidr block for an empty set of addresses")]
    EmptyInput,

    /// Addresses of both families were mixed where one family is required.
    #[error("expected {expected} address but got {found} address '{input}'")]
    FamilyMismatch {
        expected: AddressFamily,
        found: AddressFamily,
        input: String,
    },

    /// Numeric value wider than the family's bit width.
    #[error("value {value} does not fit in a {family} address")]
    BigintOverflow { family: AddressFamily, value: String },

    /// Input is not a `xx:xx:xx:xx:xx:xx` hardware address.
    #[error("'{input}' is not a valid mac address")]
    InvalidMac { input: String },

    /// Input is not a port number in `0..=65535`, optionally suffixed by `/tcp` or `/udp`.
    #[error("'{input}' is not a valid port")]
    InvalidPort { input: String },
}

fn family_label(family: &Option<AddressFamily>) -> &'static str {
    match family {
        Some(AddressFamily::Ipv4) => "ipv4",
        Some(AddressFamily::Ipv6) => "ipv6",
        None => "ip",
    }
}

impl AddressError {
    pub(crate) fn format(family: Option<AddressFamily>, input: &str) -> Self {
        AddressError::Format {
            family,
            input: input.to_string(),
        }
    }

    pub(crate) fn arity(input: &str, reason: &str) -> Self {
        AddressError::Arity {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let err = AddressError::format(Some(AddressFamily::Ipv4), "256.1.1.1");
        assert_eq!(err.to_string(), "'256.1.1.1' is not a valid ipv4 address");

        let err = AddressError::format(None, "nope");
        assert_eq!(err.to_string(), "'nope' is not a valid ip address");
    }

    #[test]
    fn test_range_error_message() {
        let err = AddressError::Range {
            family: AddressFamily::Ipv4,
            value: "33".to_string(),
            max: 32,
        };
        assert_eq!(
            err.to_string(),
            "cidr mask '33' is not an integer in 0..=32 for ipv4"
        );
    }

    #[test]
    fn test_arity_error_message() {
        let err = AddressError::arity("1::2::3", "too many :: groups");
        assert_eq!(
            err.to_string(),
            "cannot expand ipv6 address '1::2::3': too many :: groups"
        );
    }
}
