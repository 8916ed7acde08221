use thiserror::Error;

#[derive(Error, Debug)]
pub enum DependsError {
    #[error("invalid layer name: {message}")]
    InvalidName { message: String },

    #[error("invalid package path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("invalid layer order: {value}")]
    InvalidOrder { value: String },

    #[error("invalid module name '{value}': {reason}")]
    InvalidModuleName { value: String, reason: String },

    #[error("module declaration not found in {source_name}")]
    ModuleNotFound { source_name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DependsError {
    /// True for errors raised while reading the dependency specification itself.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            DependsError::InvalidName { .. }
                | DependsError::InvalidPath { .. }
                | DependsError::InvalidOrder { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            _ if self.is_parse_error() => format!("Error parsing dependency file: {}", self),
            DependsError::InvalidModuleName { .. } | DependsError::ModuleNotFound { .. } => {
                format!("Error resolving module name: {}", self)
            }
            DependsError::IoError(_) | DependsError::SerializationError(_) => {
                format!("Error generating dependency files: {}", self)
            }
            _ => format!("Error loading configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DependsError::InvalidName { .. } => {
                "Every numbered line needs a layer name, e.g. '1. Domain layer'"
            }
            DependsError::InvalidPath { .. } => {
                "Package paths must be non-empty and must not contain '..'"
            }
            DependsError::InvalidOrder { .. } => "Use a small non-negative integer as layer number",
            DependsError::InvalidModuleName { .. } => {
                "The module line must look like 'module example.com/project'"
            }
            DependsError::ModuleNotFound { .. } => {
                "Place the dependency file next to the module manifest or set generator.module"
            }
            DependsError::IoError(_) => "Check that the file exists and is readable/writable",
            DependsError::SerializationError(_) => "This is a bug; please report it",
            DependsError::ConfigError { .. } | DependsError::InvalidConfigValueError { .. } => {
                "Check the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DependsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_are_classified() {
        let err = DependsError::InvalidName {
            message: "layer name cannot be empty".to_string(),
        };
        assert!(err.is_parse_error());
        assert_eq!(err.to_string(), "invalid layer name: layer name cannot be empty");

        let err = DependsError::ModuleNotFound {
            source_name: "go.mod".to_string(),
        };
        assert!(!err.is_parse_error());
        assert_eq!(err.to_string(), "module declaration not found in go.mod");
    }

    #[test]
    fn test_user_friendly_message_mentions_cause() {
        let err = DependsError::InvalidPath {
            path: "../x".to_string(),
            reason: "layer path cannot contain '..'".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.starts_with("Error parsing dependency file"));
        assert!(message.contains("../x"));
    }
}
