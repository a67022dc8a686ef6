pub mod catalog;
pub mod engine;
pub mod expander;
pub mod filter;

pub use crate::domain::model::{Category, CategoryReport, FilterReport, GenerationSummary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
