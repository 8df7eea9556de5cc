use thiserror::Error;

/// Errors produced while loading, expanding, or resolving a configuration.
///
/// All variants are fatal: resolution is all-or-nothing, and the first
/// violation encountered aborts it with the offending key path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] json5::Error),

    #[error("Type mismatch at '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid value '{value}' at '{path}': expected one of {allowed}")]
    InvalidEnum {
        path: String,
        value: String,
        allowed: &'static str,
    },

    #[error("Failed to expand '${{{placeholder}}}': {reason}")]
    Expansion { placeholder: String, reason: String },
}

impl ConfigError {
    /// The dotted key path the error refers to, when it refers to one.
    pub fn key_path(&self) -> Option<&str> {
        match self {
            ConfigError::TypeMismatch { path, .. } | ConfigError::InvalidEnum { path, .. } => {
                Some(path.as_str())
            }
            _ => None,
        }
    }
}

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
