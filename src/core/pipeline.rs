use crate::core::matcher::TitlePattern;
use crate::core::{CatalogEntry, CatalogSource, Pipeline, Storage};
use crate::domain::model::{
    DirectoryFailure, MoveOperation, MoveOutcome, MoveStatus, SkippedEntry, SortPlan, SortReport,
};
use crate::utils::error::Result;
use std::collections::HashSet;
use std::path::PathBuf;

/// Fetches the catalog, matches it against one snapshot of the root
/// directory and moves matched entries into `"{id} {title}"` directories.
pub struct SortPipeline<C: CatalogSource, S: Storage> {
    catalog: C,
    storage: S,
    dry_run: bool,
}

impl<C: CatalogSource, S: Storage> SortPipeline<C, S> {
    pub fn new(catalog: C, storage: S) -> Self {
        Self {
            catalog,
            storage,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[async_trait::async_trait]
impl<C: CatalogSource, S: Storage> Pipeline for SortPipeline<C, S> {
    async fn extract(&self) -> Result<Vec<CatalogEntry>> {
        self.catalog.fetch_catalog().await
    }

    async fn transform(&self, entries: Vec<CatalogEntry>) -> Result<SortPlan> {
        let root = self.storage.root().to_path_buf();

        // 目錄只讀取一次，之後的新檔案不會被處理
        let listing = match self.storage.list_entries().await {
            Ok(listing) => listing,
            Err(e) => {
                tracing::warn!("⚠️ Sorting aborted: {}", e);
                return Ok(SortPlan {
                    listing_error: Some(e.to_string()),
                    ..SortPlan::default()
                });
            }
        };
        if listing.is_empty() {
            tracing::info!("📭 {} is empty, nothing to sort", root.display());
        } else {
            tracing::debug!("Listed {} entries in {}", listing.len(), root.display());
        }

        let mut plan = SortPlan {
            listed: listing.len(),
            ..SortPlan::default()
        };
        let mut claimed: HashSet<&str> = HashSet::new();

        for entry in entries {
            let pattern = match TitlePattern::new(&entry.title) {
                Ok(pattern) => pattern,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", entry.directory_name(), e);
                    plan.skipped.push(SkippedEntry {
                        entry,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let destination_dir = root.join(entry.directory_name());
            for name in &listing.names {
                // 已被前一個節目配對的檔案不再處理
                if claimed.contains(name.as_str()) || !pattern.is_match(name) {
                    continue;
                }
                claimed.insert(name.as_str());

                plan.operations.push(MoveOperation {
                    entry: entry.clone(),
                    file_name: name.clone(),
                    source_path: root.join(name),
                    destination_dir: destination_dir.clone(),
                    destination_path: destination_dir.join(name),
                });
            }
        }

        tracing::debug!(
            "Planned {} moves, skipped {} titles",
            plan.operations.len(),
            plan.skipped.len()
        );
        Ok(plan)
    }

    async fn load(&self, plan: SortPlan) -> Result<SortReport> {
        let mut report = SortReport {
            listed: plan.listed,
            skipped: plan.skipped,
            listing_error: plan.listing_error,
            dry_run: self.dry_run,
            ..SortReport::default()
        };
        let mut prepared: HashSet<PathBuf> = HashSet::new();

        for operation in plan.operations {
            if self.dry_run {
                println!(
                    " would move {} -> {}",
                    operation.source_path.display(),
                    operation.destination_path.display()
                );
                report.outcomes.push(MoveOutcome {
                    operation,
                    status: MoveStatus::Planned,
                });
                continue;
            }

            // 移動先目錄不存在就建立；失敗仍嘗試移動
            if prepared.insert(operation.destination_dir.clone())
                && !self.storage.dir_exists(&operation.destination_dir).await
            {
                if let Err(e) = self.storage.create_dir(&operation.destination_dir).await {
                    tracing::warn!("{}", e);
                    report.directory_failures.push(DirectoryFailure {
                        path: operation.destination_dir.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            println!(
                " move {} -> {}",
                operation.source_path.display(),
                operation.destination_path.display()
            );
            let status = match self
                .storage
                .rename(&operation.source_path, &operation.destination_path)
                .await
            {
                Ok(()) => MoveStatus::Moved,
                Err(e) => {
                    tracing::warn!("{}", e);
                    MoveStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            report.outcomes.push(MoveOutcome { operation, status });
        }

        Ok(report)
    }
}
