use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SortError};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonConfig {
    #[serde(rename = "rootDir")]
    pub root_dir: String,
}

impl JsonConfig {
    /// 從 JSON 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|e| SortError::ConfigRead {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        Self::from_json_str(&content).map_err(|e| match e {
            SortError::ConfigRead { message, .. } => SortError::ConfigRead {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// 從 JSON 字串解析配置
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SortError::ConfigRead {
            path: "<inline>".to_string(),
            message: format!("JSON parsing error: {}", e),
        })
    }
}

impl ConfigProvider for JsonConfig {
    fn root_dir(&self) -> &str {
        &self.root_dir
    }
}

impl Validate for JsonConfig {
    fn validate(&self) -> Result<()> {
        validate_path("rootDir", &self.root_dir)
    }
}
