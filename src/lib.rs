pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    http::{user_agent, SyoboiClient, TITLE_MEDIUM_ENDPOINT},
    storage::LocalStorage,
};
pub use config::JsonConfig;
pub use crate::core::{engine::SortEngine, pipeline::SortPipeline};
pub use domain::model::{CatalogEntry, SortReport};
pub use utils::error::{Result, SortError};
