use std::path::Path;

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Feature extraction options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Args)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// number of preceding tokens used as context
    #[arg(long, default_value_t = 2)]
    pub preceding: usize,
    /// number of following tokens used as context
    #[arg(long, default_value_t = 2)]
    pub following: usize,
    /// suffix lengths, in characters
    #[arg(long = "suffix", value_delimiter = ',', default_values_t = vec![2, 3])]
    pub suffix_lengths: Vec<usize>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self { preceding: 2, following: 2, suffix_lengths: vec![2, 3] }
    }
}

impl AnnotatorConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AnnotatorConfig::from_json("{}").unwrap();
        assert_eq!(config, AnnotatorConfig::default());
    }

    #[test]
    fn partial() {
        let config = AnnotatorConfig::from_json(r#"{"following": 1, "suffix_lengths": [1, 2, 3]}"#).unwrap();
        assert_eq!(config.preceding, 2);
        assert_eq!(config.following, 1);
        assert_eq!(config.suffix_lengths, vec![1, 2, 3]);
    }

    #[test]
    fn invalid() {
        assert!(AnnotatorConfig::from_json(r#"{"preceding": -1}"#).is_err());
        assert!(AnnotatorConfig::from_path("does-not-exist.json").is_err());
    }
}
