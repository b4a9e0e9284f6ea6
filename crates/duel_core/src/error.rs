use thiserror::Error;

/// Errors raised at the configuration edge of the core.
///
/// The per-frame step itself is infallible; only loading and validating an
/// [`EngineConfig`](crate::EngineConfig) can fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_names_field() {
        let err = ConfigError::invalid("field.half_width", "must be positive");
        assert_eq!(err.to_string(), "Invalid config: field.half_width must be positive");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
