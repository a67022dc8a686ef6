use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "filter-queries")]
#[command(about = "Removes already-completed queries from a generated query file")]
pub struct FilterConfig {
    /// Query file produced by query-gen (.txt or .json)
    #[arg(long, default_value = "queries.txt")]
    pub queries_file: String,

    /// File listing the queries already completed (.txt or .json)
    #[arg(long)]
    pub completed_file: String,

    /// Where the remaining queries are written
    #[arg(long, default_value = "queries_remaining.txt")]
    pub output_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for FilterConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("queries_file", &self.queries_file)?;
        validation::validate_path("completed_file", &self.completed_file)?;
        validation::validate_path("output_file", &self.output_file)?;

        let inputs = [self.queries_file.clone(), self.completed_file.clone()];
        validation::validate_file_extensions("queries_file", &inputs, &["txt", "json"])?;

        Ok(())
    }
}
