//! Error types for modlink-core

/// Result type for modlink-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why an external command did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum StepFailure {
    #[error("exited with status {0}")]
    Exit(i32),

    #[error("was terminated by a signal")]
    Signal,

    #[error("could not be started: {0}")]
    Launch(#[source] std::io::Error),
}

/// Errors that can occur while resolving configuration or installing
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is unset or empty
    #[error("Environment variable {var} must be set to the Magento installation root")]
    MissingEnv { var: &'static str },

    #[error("Cannot determine the current working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("Platform installer `{command}` {failure}")]
    PlatformBootstrap {
        command: String,
        failure: StepFailure,
    },

    #[error("Composer command `{command}` {failure}")]
    DependencyInstall {
        command: String,
        failure: StepFailure,
    },

    #[error("Magento command `{command}` {failure}")]
    PlatformCommand {
        command: String,
        failure: StepFailure,
    },

    /// Filesystem error from modlink-fs
    #[error(transparent)]
    Fs(#[from] modlink_fs::Error),
}

impl Error {
    /// Process exit code for this failure.
    ///
    /// Configuration, manifest and other pre-install failures share code 1
    /// with argument errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingEnv { .. } | Self::WorkingDir(_) => 1,
            Self::PlatformBootstrap { .. } => 2,
            Self::DependencyInstall { .. } => 3,
            Self::Fs(
                modlink_fs::Error::NotASymlink { .. } | modlink_fs::Error::SymlinkCreate { .. },
            ) => 4,
            Self::Fs(_) => 1,
            Self::PlatformCommand { .. } => 5,
        }
    }
}
