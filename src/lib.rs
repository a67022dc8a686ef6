pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, filter::FilterConfig, CliConfig};
pub use core::engine::GeneratorEngine;
pub use domain::model::{Category, CategoryReport, FilterReport, GenerationSummary};
pub use utils::error::{QueryGenError, Result};
