use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TitleMedium request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("TitleMedium returned unexpected status code {code}")]
    UnexpectedStatus { code: u16 },

    #[error("TitleMedium JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Cannot read directory '{path}': {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot build match pattern for '{title}': {source}")]
    PatternCompile {
        title: String,
        #[source]
        source: regex::Error,
    },

    #[error("Cannot create directory '{path}': {source}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot move '{from}' to '{to}': {source}")]
    FileMove {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    FileSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SortError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SortError::ConfigRead { .. } | SortError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            SortError::Network(_) | SortError::UnexpectedStatus { .. } => ErrorCategory::Network,
            SortError::Decode(_) | SortError::PatternCompile { .. } => ErrorCategory::Data,
            SortError::DirectoryRead { .. }
            | SortError::DirectoryCreate { .. }
            | SortError::FileMove { .. } => ErrorCategory::FileSystem,
        }
    }

    /// Per-file failures are Low: they never stop the batch.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SortError::DirectoryCreate { .. }
            | SortError::FileMove { .. }
            | SortError::PatternCompile { .. }
            | SortError::DirectoryRead { .. } => ErrorSeverity::Low,
            SortError::Network(_) | SortError::UnexpectedStatus { .. } => ErrorSeverity::Medium,
            SortError::ConfigRead { .. } | SortError::InvalidConfigValue { .. } => {
                ErrorSeverity::High
            }
            SortError::Decode(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a fatal error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Data | ErrorCategory::FileSystem => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SortError::ConfigRead { path, .. } => {
                format!("Could not load the configuration from '{}'", path)
            }
            SortError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            SortError::Network(_) => "Could not reach the Syoboi Calendar API".to_string(),
            SortError::UnexpectedStatus { code } => {
                format!("The Syoboi Calendar API answered with HTTP {}", code)
            }
            SortError::Decode(_) => "The title list returned by the API was not understood".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SortError::ConfigRead { .. } => {
                "Create config.json in the working directory with {\"rootDir\": \"<directory>\"}"
            }
            SortError::InvalidConfigValue { .. } => "Fix the value in the config file and retry",
            SortError::Network(_) => "Check the network connection and retry later",
            SortError::UnexpectedStatus { .. } => "The API may be down or rate limiting; retry later",
            SortError::Decode(_) => "Check that --endpoint points at a TitleMedium JSON endpoint",
            SortError::DirectoryRead { .. } => "Check that rootDir exists and is readable",
            SortError::PatternCompile { .. } => "The title cannot be matched; sort it manually",
            SortError::DirectoryCreate { .. } | SortError::FileMove { .. } => {
                "Check permissions on rootDir"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
