//! Error types for modlink-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad, missing or excess command-line input
    #[error("{message}")]
    Usage { message: String },

    /// Error from modlink-core
    #[error(transparent)]
    Core(#[from] modlink_core::Error),
}

impl CliError {
    /// Create a new usage error with the given message
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => 1,
            Self::Core(err) => err.exit_code(),
        }
    }

    /// Whether the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            Self::Usage { .. } | Self::Core(modlink_core::Error::MissingEnv { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_display_and_code() {
        let error = CliError::usage("Missing extension name");
        assert_eq!(error.to_string(), "Missing extension name");
        assert_eq!(error.exit_code(), 1);
        assert!(error.shows_usage());
    }

    #[test]
    fn core_errors_keep_their_code() {
        let error = CliError::from(modlink_core::Error::PlatformCommand {
            command: "bin/magento cache:flush".into(),
            failure: modlink_core::StepFailure::Exit(1),
        });
        assert_eq!(error.exit_code(), 5);
        assert!(!error.shows_usage());
    }

    #[test]
    fn missing_environment_shows_usage() {
        let error = CliError::from(modlink_core::Error::MissingEnv {
            var: "MAGENTO_ROOT",
        });
        assert_eq!(error.exit_code(), 1);
        assert!(error.shows_usage());
    }
}
