use crate::adapters::http::TITLE_MEDIUM_ENDPOINT;
use crate::config::json_config::DEFAULT_CONFIG_PATH;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "syoboi-sorting", version)]
#[command(about = "Sort recorded TV files into per-program directories using Syoboi Calendar titles")]
pub struct CliConfig {
    /// Path to the JSON config file ({"rootDir": "..."})
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// TitleMedium endpoint to fetch the title list from
    #[arg(long, default_value = TITLE_MEDIUM_ENDPOINT)]
    pub endpoint: String,

    /// Show what would be moved without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        validate_url("endpoint", &self.endpoint)
    }
}
