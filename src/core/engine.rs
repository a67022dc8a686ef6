use crate::core::{catalog, expander, ConfigProvider, Storage};
use crate::domain::model::{Category, CategoryReport, GenerationSummary};
use crate::utils::error::Result;
use std::path::Path;

pub struct GeneratorEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GeneratorEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Generate the query file for every category, in catalog order.
    pub fn run(&self) -> Result<GenerationSummary> {
        let mut reports = Vec::new();

        for category in Category::ALL {
            let report = self.generate_category(category)?;
            reports.push(report);
        }

        Ok(GenerationSummary { reports })
    }

    fn generate_category(&self, category: Category) -> Result<CategoryReport> {
        let templates = catalog::templates(category);
        let regions = catalog::IRANIAN_PROVINCES;

        tracing::info!("📋 Generating {} queries...", category.label());
        tracing::info!(
            "  {} query types × {} provinces = {} total queries",
            templates.len(),
            regions.len(),
            templates.len() * regions.len()
        );

        let mut buffer = Vec::new();
        let queries_written = expander::generate(templates, regions, &mut buffer)?;

        let filename = category.output_filename();
        self.storage.write_file(filename, &buffer)?;

        let output_path = Path::new(self.config.output_dir())
            .join(filename)
            .display()
            .to_string();

        tracing::info!("✓ Saved to: {}", output_path);

        Ok(CategoryReport {
            category,
            template_count: templates.len(),
            region_count: regions.len(),
            queries_written,
            output_path,
        })
    }
}
