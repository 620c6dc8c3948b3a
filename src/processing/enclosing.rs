//! Enclosing CIDR block for a set of addresses.

use crate::error::AddressError;
use crate::models::{Address, AddressBigint, AddressFamily, CidrBlock, CidrMask};
use itertools::{Itertools, MinMaxResult};

/// Leading zero bits implied by the value's own binary length (`0` counts as one digit).
fn leading_zeros(value: &AddressBigint) -> u8 {
    value.family().bits() - value.bit_length()
}

/// Compute the enclosing block for `addresses`, all of one family.
///
/// The block starts at the numerically smallest address. Its mask is the smaller
/// of the leading-zero counts of the minimum and the maximum, where each count
/// comes from that value's own bit length. This is not the longest common
/// prefix of the two endpoints, so the block is not always the tightest one.
///
/// # Examples
/// ```
/// use subnet_cidr::models::Address;
/// use subnet_cidr::processing::smallest_enclosing_block;
/// let addresses: Vec<Address> = ["10.0.0.5", "10.0.0.1"].iter().map(|a| a.parse().unwrap()).collect();
/// let block = smallest_enclosing_block(&addresses).unwrap();
/// assert_eq!(block.to_string(), "10.0.0.1/4");
/// ```
pub fn smallest_enclosing_block<'a, I>(addresses: I) -> Result<CidrBlock, AddressError>
where
    I: IntoIterator<Item = &'a Address>,
{
    let mut family: Option<AddressFamily> = None;
    let values = addresses
        .into_iter()
        .map(|address| {
            match family {
                None => family = Some(address.family()),
                Some(expected) if expected != address.family() => {
                    return Err(AddressError::FamilyMismatch {
                        expected,
                        found: address.family(),
                        input: address.to_string(),
                    });
                }
                Some(_) => {}
            }
            address.to_bigint()
        })
        .collect::<Result<Vec<AddressBigint>, AddressError>>()?;

    let (min, max) = match values.iter().minmax() {
        MinMaxResult::NoElements => return Err(AddressError::EmptyInput),
        MinMaxResult::OneElement(only) => (only, only),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    let leading_zeros_in_min = leading_zeros(min);
    let leading_zeros_in_max = leading_zeros(max);
    let mask = leading_zeros_in_min.min(leading_zeros_in_max);
    log::debug!(
        "enclosing block over {} addresses: min={} max={} mask=/{}",
        values.len(),
        min.to_address(),
        max.to_address(),
        mask
    );

    CidrBlock::new(min.to_address(), CidrMask::new(min.family(), i64::from(mask))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses(ips: &[&str]) -> Vec<Address> {
        ips.iter().map(|ip| Address::parse(ip).unwrap()).collect()
    }

    #[test]
    fn test_enclosing_ipv4() {
        let input = addresses(&["10.0.0.5", "10.0.0.1"]);
        let block = smallest_enclosing_block(&input).unwrap();
        assert_eq!(block.address().to_string(), "10.0.0.1");
        // 10.0.0.1 and 10.0.0.5 both need 28 binary digits
        assert_eq!(block.mask().get(), 32 - 28);
        assert_eq!(block.mask().get(), 4);
    }

    #[test]
    fn test_enclosing_uses_bit_length_not_common_prefix() {
        // Common prefix of 192.168.1.1 and 192.168.1.2 is /30, the bit-length rule gives /0.
        let input = addresses(&["192.168.1.2", "192.168.1.1"]);
        let block = smallest_enclosing_block(&input).unwrap();
        assert_eq!(block.to_string(), "192.168.1.1/0");

        let input = addresses(&["0.0.0.1", "0.0.0.5"]);
        let block = smallest_enclosing_block(&input).unwrap();
        assert_eq!(block.to_string(), "0.0.0.1/29");
    }

    #[test]
    fn test_enclosing_single_and_zero() {
        let block = smallest_enclosing_block(&addresses(&["0.0.0.0"])).unwrap();
        assert_eq!(block.to_string(), "0.0.0.0/31");

        let block = smallest_enclosing_block(&addresses(&["0.0.1.0"])).unwrap();
        assert_eq!(block.to_string(), "0.0.1.0/23");
    }

    #[test]
    fn test_enclosing_ipv6() {
        let input = addresses(&["::5", "::1", "::3"]);
        let block = smallest_enclosing_block(&input).unwrap();
        assert_eq!(block.family(), AddressFamily::Ipv6);
        assert_eq!(
            block.address().to_string(),
            "0000:0000:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(block.mask().get(), 125);
    }

    #[test]
    fn test_enclosing_empty() {
        let input: Vec<Address> = vec![];
        assert_eq!(
            smallest_enclosing_block(&input).unwrap_err(),
            AddressError::EmptyInput
        );
    }

    #[test]
    fn test_enclosing_mixed_families() {
        let input = addresses(&["10.0.0.1", "::1"]);
        assert_eq!(
            smallest_enclosing_block(&input).unwrap_err(),
            AddressError::FamilyMismatch {
                expected: AddressFamily::Ipv4,
                found: AddressFamily::Ipv6,
                input: "::1".to_string()
            }
        );
    }
}
