pub mod cli;
pub mod filter;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "query-gen")]
#[command(about = "Generates Google Maps search queries for elevator and painting services")]
pub struct CliConfig {
    /// Directory the query files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_dir", &self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_dir_is_cwd() {
        let config = CliConfig::parse_from(["query-gen"]);
        assert_eq!(config.output_dir, ".");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_output_dir_fails_validation() {
        let config = CliConfig::parse_from(["query-gen", "--output-dir", ""]);
        assert!(config.validate().is_err());
    }
}
