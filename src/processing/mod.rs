//! Operations over sets of addresses and blocks.
//!
//! - [`range`] - Lazy enumeration of the addresses in a block
//! - [`enclosing`] - Enclosing block for a set of addresses
//! - [`summary`] - Per-block summary rows for reporting

mod enclosing;
mod range;
mod summary;

pub use enclosing::smallest_enclosing_block;
pub use range::AddressRange;
pub use summary::{blocks_containing, summarize_block, summarize_blocks, BlockSummaryRow};
