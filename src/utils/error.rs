use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryGenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, QueryGenError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QueryGenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QueryGenError::IoError(_) => ErrorCategory::Io,
            QueryGenError::SerializationError(_) => ErrorCategory::Data,
            QueryGenError::ConfigError { .. } | QueryGenError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QueryGenError::IoError(e) => {
                format!("Could not read or write a query file: {}", e)
            }
            QueryGenError::SerializationError(e) => {
                format!("Query file is not valid JSON: {}", e)
            }
            QueryGenError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            QueryGenError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the output directory exists, is writable, and has free disk space"
            }
            ErrorCategory::Data => {
                "Check the query file: .txt files need one query per line, .json files a string array"
            }
            ErrorCategory::Configuration => "Run with --help to see the expected arguments",
        }
    }
}
