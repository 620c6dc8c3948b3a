//! IPv4/IPv6 address and CIDR block arithmetic.
//!
//! - [`models`] - validated address, mask and block types with their codecs
//! - [`processing`] - ranges, enclosing blocks and report rows
//! - [`output`] - CSV printing for the `cidr-summary` binary
//! - [`input`], [`config`] - where the binary gets its work and settings

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use error::AddressError;

use config::Config;
use input::{read_input, Input};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use models::CidrBlock;
use processing::{blocks_containing, smallest_enclosing_block, summarize_blocks};
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;

/// Start log4rs from `log_config`, or log warnings to the console when that file is missing.
pub fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::warn!("No {log_config} found, logging warnings to console");
    Ok(())
}

/// Gather the blocks and addresses to report on from the configured file and `args`.
pub fn load_input(config: &Config, args: &[String]) -> Result<Input, Box<dyn Error>> {
    let mut input = match &config.input_file {
        Some(path) => read_input(path)?,
        None => Input::default(),
    };
    input.extend_from_args(args)?;
    input.blocks = de_duplicate_blocks(input.blocks);
    Ok(input)
}

/// Drop repeated block literals, keeping the first occurrence.
pub fn de_duplicate_blocks(blocks: Vec<CidrBlock>) -> Vec<CidrBlock> {
    let mut seen = HashSet::new();
    let count_before = blocks.len();
    let blocks: Vec<CidrBlock> = blocks
        .into_iter()
        .filter(|block| {
            let first = seen.insert(block.to_string());
            if !first {
                log::warn!("Duplicate block skipped: {block}");
            }
            first
        })
        .collect();
    log::debug!("de_duplicate_blocks() {count_before} -> {}", blocks.len());
    blocks
}

/// Print the block rows, then the enclosing block of any addresses.
pub fn print_summary(input: &Input, range_limit: usize) -> Result<(), Box<dyn Error>> {
    let rows = summarize_blocks(&input.blocks, range_limit);
    output::summary_print(&rows);

    for address in &input.addresses {
        let hits = blocks_containing(&input.blocks, address);
        log::info!("{address} is in {} of the given blocks", hits.len());
    }

    if !input.addresses.is_empty() {
        let block = smallest_enclosing_block(&input.addresses)?;
        output::enclosing_print(&block, input.addresses.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_de_duplicate_blocks() {
        let blocks: Vec<CidrBlock> = ["10.0.0.0/24", "10.0.0.0/24", "10.0.0.1/24", "::/0"]
            .iter()
            .map(|b| b.parse().unwrap())
            .collect();
        let blocks = de_duplicate_blocks(blocks);
        let literals: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
        assert_eq!(literals, vec!["10.0.0.0/24", "10.0.0.1/24", "::/0"]);
    }

    #[test]
    fn test_load_input_file_and_args() {
        let config = Config {
            input_file: Some("src/tests/test_data/input_01.json".to_string()),
            ..Config::default()
        };
        let args = vec!["10.0.0.0/24".to_string(), "10.0.0.9".to_string()];
        let input = load_input(&config, &args).unwrap();
        // 10.0.0.0/24 is also in the file
        assert_eq!(input.blocks.len(), 4);
        assert_eq!(input.addresses.len(), 4);
    }

    #[test]
    fn test_print_summary_mixed_addresses_fail() {
        let mut input = Input::default();
        input.extend_from_args(["10.0.0.1", "::1"]).unwrap();
        assert!(print_summary(&input, 0).is_err());
    }
}
