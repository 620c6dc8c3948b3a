//! CSV output for block summaries.

use crate::models::CidrBlock;
use crate::processing::BlockSummaryRow;
use colored::Colorize;

use super::terminal::format_field;

/// Column header printed before the block rows.
pub const SUMMARY_HEADER: &str = r#" "cnt",   "family",          "cidr_block",         "network",       "broadcast",        "total", "members""#;

/// Print block summaries as CSV to stdout.
pub fn summary_print(rows: &[BlockSummaryRow]) {
    log::info!("#Start summary_print() rows={}", rows.len());

    println!("{}", SUMMARY_HEADER.bold());
    for row in rows {
        println!("{}", csv_row(row));
    }
}

/// Print the smallest block enclosing `address_count` addresses.
pub fn enclosing_print(block: &CidrBlock, address_count: usize) {
    println!(
        "#{}# {address_count} addresses fit in {} ({} .. {})",
        "ENCLOSING".on_green(),
        block.to_string().bold(),
        block.network_address(),
        block.broadcast_address(),
    );
}

/// Format a single CSV row.
pub fn csv_row(row: &BlockSummaryRow) -> String {
    format!(
        r#"{j},{family},{cidr},{network},{broadcast},{total},{members}"#,
        j = format_field(row.j, 6),
        family = format_field(&row.family, 9),
        cidr = format_field(&row.cidr, 21),
        network = format_field(&row.network, 16),
        broadcast = format_field(format!("{}_br", row.broadcast), 19),
        total = format_field(&row.total, 13),
        members = format_field(&row.members, 0),
    )
}
