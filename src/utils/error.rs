use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Processing,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) | EtlError::Utf8Error(_) => ErrorCategory::Io,
            EtlError::TomlError(_)
            | EtlError::RegexError(_)
            | EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::SerializationError(_) | EtlError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
            EtlError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Configuration | ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("Could not access the filesystem: {}", e),
            EtlError::Utf8Error(_) => {
                "A report file could not be decoded as UTF-8 text".to_string()
            }
            EtlError::SerializationError(e) => {
                format!("Could not serialize the template records: {}", e)
            }
            EtlError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            EtlError::RegexError(e) => {
                format!("The extraction patterns could not be compiled: {}", e)
            }
            EtlError::ConfigError { message } => format!("Configuration problem: {}", message),
            EtlError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            EtlError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            EtlError::ProcessingError { message } => format!("Processing failed: {}", message),
            EtlError::ValidationError { message } => format!("Validation failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the reports directory exists and the output path is writable"
                    .to_string()
            }
            ErrorCategory::Configuration => {
                "Review the command-line flags or the TOML configuration file".to_string()
            }
            ErrorCategory::Processing => {
                "Inspect the report sources for unexpected formatting".to_string()
            }
            ErrorCategory::Validation => {
                "Correct the configuration values and run again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
