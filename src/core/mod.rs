pub mod engine;
pub mod matcher;
pub mod pipeline;

pub use crate::domain::model::{CatalogEntry, SortPlan, SortReport};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
