use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Pattern compilation error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("File is not valid UTF-8: {path}")]
    EncodingError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 對應的程序結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::CsvError(_) | EtlError::EncodingError { .. } => ErrorCategory::Data,
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::PatternError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::IoError(e) => match e.kind() {
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock => {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::High,
            },
            EtlError::CsvError(_)
            | EtlError::EncodingError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            EtlError::PatternError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", e),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", e),
                _ => format!("File operation failed: {}", e),
            },
            EtlError::CsvError(e) => format!("Could not write CSV output: {}", e),
            EtlError::EncodingError { path, .. } => {
                format!("Input file '{}' could not be decoded as UTF-8", path)
            }
            EtlError::ConfigValidationError { field, message } => {
                format!("Invalid configuration for '{}': {}", field, message)
            }
            EtlError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            EtlError::PatternError(e) => format!("Internal pattern error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => "Check that the path exists and is spelled correctly",
                std::io::ErrorKind::PermissionDenied => {
                    "Check file permissions for the input and output paths"
                }
                _ => "Check disk space and that the paths are accessible, then retry",
            },
            EtlError::CsvError(_) => "Check that the output location is writable",
            EtlError::EncodingError { .. } => "Re-save the SQL file with UTF-8 encoding",
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
            EtlError::PatternError(_) => "This is a bug; please report it",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
