use serde::{Deserialize, Serialize};

/// The two query domains the scraper pipeline is fed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Elevator,
    Painting,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Elevator, Category::Painting];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Elevator => "Elevator",
            Category::Painting => "Painting",
        }
    }

    pub fn output_filename(&self) -> &'static str {
        match self {
            Category::Elevator => "queries_elevator.txt",
            Category::Painting => "queries_painting.txt",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub template_count: usize,
    pub region_count: usize,
    pub queries_written: usize,
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub reports: Vec<CategoryReport>,
}

impl GenerationSummary {
    pub fn total_queries(&self) -> usize {
        self.reports.iter().map(|r| r.queries_written).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}
