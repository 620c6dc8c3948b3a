//! Per-block summary rows for reporting.

use crate::models::{Address, CidrBlock};
use itertools::Itertools;
use num_bigint::BigUint;

/// Represents one reported CIDR block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSummaryRow {
    /// Row index, starting at 1.
    pub j: usize,
    /// Block as given, e.g. `10.0.0.10/24`.
    pub cidr: String,
    /// `ipv4` or `ipv6`.
    pub family: String,
    /// Lowest address.
    pub network: String,
    /// Highest address.
    pub broadcast: String,
    /// Number of addresses, in decimal.
    pub total: String,
    /// First members of the block, joined by `;`.
    pub members: String,
}

/// Build the summary row for `block`, listing at most `range_limit` members.
pub fn summarize_block(block: &CidrBlock, i: usize, range_limit: usize) -> BlockSummaryRow {
    let total = block.total();
    let mut members = block.range().take(range_limit).join(";");
    if range_limit > 0 && total > BigUint::from(range_limit) {
        members.push_str(";...");
    }
    log::trace!("summarized {block} with {total} addresses");

    BlockSummaryRow {
        j: i + 1,
        cidr: block.to_string(),
        family: block.family().to_string(),
        network: block.network_address().to_string(),
        broadcast: block.broadcast_address().to_string(),
        total: total.to_string(),
        members,
    }
}

/// Build rows for every block, ordered by family then network address.
pub fn summarize_blocks(blocks: &[CidrBlock], range_limit: usize) -> Vec<BlockSummaryRow> {
    blocks
        .iter()
        .sorted_by_key(|b| (b.network_address_bigint(), b.mask().get()))
        .enumerate()
        .map(|(i, b)| summarize_block(b, i, range_limit))
        .collect()
}

/// Blocks from `blocks` that contain `address`.
pub fn blocks_containing<'a>(blocks: &'a [CidrBlock], address: &Address) -> Vec<&'a CidrBlock> {
    blocks.iter().filter(|b| b.contains(address)).collect()
}
