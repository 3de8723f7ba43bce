//! Error types for modlink-fs

use std::path::PathBuf;

/// Result type for modlink-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in modlink-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The extension source directory is missing, not a directory, or unreadable
    #[error("Extension directory {path} {reason}")]
    SourceDir { path: PathBuf, reason: String },

    #[error("Manifest {path} {reason}")]
    ManifestNotFound { path: PathBuf, reason: String },

    #[error("Failed to parse manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Manifest {path} declares type {found}, expected \"{expected}\"")]
    InvalidPackageType {
        path: PathBuf,
        expected: &'static str,
        found: String,
    },

    #[error("Manifest {path} does not declare a package name")]
    MissingPackageName { path: PathBuf },

    #[error("{path} exists but is not a symbolic link")]
    NotASymlink { path: PathBuf },

    #[error("Failed to create symlink {link} -> {target}: {source}")]
    SymlinkCreate {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
