use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Input file does not exist: {}", path.display())]
    NotFoundError { path: PathBuf },

    #[error("Invalid JSON, unable to parse {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to sort entries, ukphone on entry `{name}` is missing or malformed: {reason}")]
    FieldError { name: String, reason: String },

    #[error("Failed to scan for missing ukphone ranges: {message}")]
    GapScanError { message: String },

    #[error("Failed to save result to {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected error during processing: {message}")]
    UnexpectedError { message: String },

    #[error("Invalid configuration value '{value}' for '{field}': {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NormalizeError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedError {
            message: message.into(),
        }
    }

    pub fn gap_scan(message: impl Into<String>) -> Self {
        Self::GapScanError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFoundError { .. } | Self::ParseError { .. } => ErrorCategory::Input,
            Self::FieldError { .. } | Self::GapScanError { .. } => ErrorCategory::Data,
            Self::WriteError { .. } => ErrorCategory::Output,
            Self::InvalidConfig { .. } => ErrorCategory::Configuration,
            Self::UnexpectedError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 寫入失敗通常是暫時性的（權限、磁碟空間），可重試
            Self::WriteError { .. } => ErrorSeverity::Medium,
            Self::UnexpectedError { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFoundError { path } => format!("File not found: {}", path.display()),
            Self::ParseError { .. } => "The dictionary is not valid JSON".to_string(),
            Self::FieldError { name, .. } => {
                format!("Entry `{}` has a missing or non-numeric ukphone", name)
            }
            Self::GapScanError { message } => format!("Gap analysis failed: {}", message),
            Self::WriteError { path, .. } => {
                format!("Could not write output file {}", path.display())
            }
            Self::InvalidConfig { field, reason, .. } => {
                format!("Configuration '{}' is invalid: {}", field, reason)
            }
            Self::UnexpectedError { .. } => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the input path and make sure the file is a JSON array",
            ErrorCategory::Data => "Fix the offending entries so every ukphone is an integer",
            ErrorCategory::Output => "Check write permissions and free space in the input directory",
            ErrorCategory::Configuration => "Review the command line flags and the TOML config file",
            ErrorCategory::Internal => "Re-run with --verbose and report the log output",
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
