use crate::core::{Pipeline, SortReport};
use crate::utils::error::Result;

pub struct SortEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SortEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Fetch, plan and apply. Fetch errors abort before anything is touched;
    /// per-file failures end up in the report.
    pub async fn run(&self) -> Result<SortReport> {
        tracing::info!("📡 Fetching title list...");
        let entries = self.pipeline.extract().await?;
        let catalog_size = entries.len();

        tracing::info!("🔎 Matching {} titles...", catalog_size);
        let plan = self.pipeline.transform(entries).await?;

        tracing::info!("📦 Moving {} files...", plan.operations.len());
        let mut report = self.pipeline.load(plan).await?;
        report.catalog_size = catalog_size;

        tracing::info!(
            "Sorted: {} moved, {} failed, {} planned, {} titles skipped",
            report.moved(),
            report.failed(),
            report.planned(),
            report.skipped.len()
        );
        Ok(report)
    }
}
