//! Output formatting for block summaries.
//!
//! - [`csv`] - CSV rows for each block and the enclosing block line
//! - [`terminal`] - Field formatting helpers

mod csv;
mod terminal;

pub use csv::{csv_row, enclosing_print, summary_print, SUMMARY_HEADER};
pub use terminal::format_field;
