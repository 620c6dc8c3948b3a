//! Report input: blocks and addresses from a JSON file or the command line.

use crate::models::{Address, CidrBlock};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Blocks to summarize and addresses to enclose.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Input {
    /// CIDR literals such as `10.0.0.0/24`.
    #[serde(default)]
    pub blocks: Vec<CidrBlock>,
    /// Bare addresses for the enclosing-block computation.
    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl Input {
    /// Add every command line argument: literals with a `/` are blocks, the rest addresses.
    pub fn extend_from_args<I, S>(&mut self, args: I) -> Result<(), Box<dyn Error>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            let arg = arg.as_ref().trim();
            if arg.contains('/') {
                let block = CidrBlock::parse(arg).map_err(|e| format!("Argument {arg:?}: {e}"))?;
                self.blocks.push(block);
            } else {
                let address = Address::parse(arg).map_err(|e| format!("Argument {arg:?}: {e}"))?;
                self.addresses.push(address);
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.addresses.is_empty()
    }
}

/// Decode an [`Input`] from JSON, naming the failing path on error.
pub fn parse_input(json: &str) -> Result<Input, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let input: Input = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing input JSON: path={} error={}", e.path(), e.inner()))?;
    Ok(input)
}

/// Read an [`Input`] from the JSON file at `path`.
pub fn read_input(path: &str) -> Result<Input, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Input file does not exist: {path}").into());
    }
    log::info!("Reading input file: {path}");
    let json = std::fs::read_to_string(path).map_err(|e| format!("Error reading {path}: {e}"))?;
    let input = parse_input(&json)?;
    log::info!(
        "# Got {} blocks and {} addresses from {path}",
        input.blocks.len(),
        input.addresses.len()
    );
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let input = parse_input(
            r#"{"blocks": ["10.0.0.0/24", "2001:db8::/32"], "addresses": ["10.0.0.1", "10.0.0.5"]}"#,
        )
        .unwrap();
        assert_eq!(input.blocks.len(), 2);
        assert_eq!(input.addresses.len(), 2);
    }

    #[test]
    fn test_parse_input_defaults() {
        let input = parse_input(r#"{"addresses": ["::1"]}"#).unwrap();
        assert!(input.blocks.is_empty());
        assert!(!input.is_empty());
        assert!(parse_input("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_input_reports_path() {
        let err = parse_input(r#"{"blocks": ["10.0.0.0/24", "10.0.0.0/33"]}"#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("path=blocks[1]"), "{message}");
        assert!(message.contains("cidr mask '33'"), "{message}");
    }

    #[test]
    fn test_read_input_fixture() {
        let input = read_input("src/tests/test_data/input_01.json").unwrap();
        assert_eq!(input.blocks.len(), 4);
        assert_eq!(input.addresses.len(), 3);
        assert!(read_input("src/tests/test_data/missing.json").is_err());
    }

    #[test]
    fn test_extend_from_args() {
        let mut input = Input::default();
        input
            .extend_from_args(["192.168.1.10/24", "10.0.0.1", " fe80::1 "])
            .unwrap();
        assert_eq!(input.blocks.len(), 1);
        assert_eq!(input.addresses.len(), 2);

        let err = input.extend_from_args(["10.0.0.0/40"]).unwrap_err();
        assert!(err.to_string().starts_with("Argument \"10.0.0.0/40\""));
    }
}
