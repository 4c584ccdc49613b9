use crate::domain::model::{CatalogEntry, DirectoryListing, SortPlan, SortReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Filesystem access scoped to the configured root directory.
pub trait Storage: Send + Sync {
    fn root(&self) -> &Path;
    fn list_entries(&self) -> impl std::future::Future<Output = Result<DirectoryListing>> + Send;
    fn dir_exists(&self, dir: &Path) -> impl std::future::Future<Output = bool> + Send;
    fn create_dir(&self, dir: &Path) -> impl std::future::Future<Output = Result<()>> + Send;
    fn rename(
        &self,
        from: &Path,
        to: &Path,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn root_dir(&self) -> &str;
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CatalogEntry>>;
    async fn transform(&self, entries: Vec<CatalogEntry>) -> Result<SortPlan>;
    async fn load(&self, plan: SortPlan) -> Result<SortReport>;
}
