//! Address and CIDR value types.
//!
//! This module contains the validated data structures used throughout the crate:
//! - [`AddressFamily`] - IPv4 / IPv6 discriminator
//! - [`Ipv4Address`], [`Ipv6Address`], [`Address`] - textual addresses
//! - [`AddressBigint`] - numeric form of an address
//! - [`Ipv4CidrMask`], [`Ipv6CidrMask`], [`CidrMask`] - prefix lengths
//! - [`CidrBlock`] - address plus mask, with network/broadcast/total/range
//! - [`MacAddress`], [`Port`], [`PortWithProtocol`] - other network literals

mod address;
mod bigint;
mod cidr_block;
mod family;
mod ipv4;
mod ipv6;
mod mac;
mod mask;
mod port;

// Re-export public types
pub use address::Address;
pub use bigint::{AddressBigint, Ipv4Bigint, Ipv6Bigint};
pub use cidr_block::{CidrBlock, Ipv4CidrBlock, Ipv6CidrBlock};
pub use family::{AddressFamily, IPV4_BITS, IPV6_BITS};
pub use ipv4::Ipv4Address;
pub use ipv6::Ipv6Address;
pub use mac::MacAddress;
pub use mask::{CidrMask, Ipv4CidrMask, Ipv6CidrMask};
pub use port::{Port, PortWithProtocol, Protocol};
