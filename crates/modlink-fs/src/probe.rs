//! Platform installation detection

use std::fs;
use std::path::Path;

use crate::InstallPath;

/// What the installer found at the installation root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationStatus {
    /// The root is missing, unreadable, or has no entries
    Empty,
    /// The root has content but setup never wrote `app/etc/env.php`
    Uninitialized,
    /// Content and marker file are both present
    Ready,
}

impl InstallationStatus {
    /// Whether the platform installer has to run before anything else.
    pub fn needs_bootstrap(&self) -> bool {
        !matches!(self, Self::Ready)
    }
}

impl std::fmt::Display for InstallationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Empty => "empty",
            Self::Uninitialized => "uninitialized",
            Self::Ready => "ready",
        };
        write!(f, "{label}")
    }
}

/// Inspect `root` without touching it.
pub fn probe_installation(root: &Path) -> InstallationStatus {
    let has_entries = fs::read_dir(root)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);

    if !has_entries {
        return InstallationStatus::Empty;
    }

    if root.join(InstallPath::EnvConfig).is_file() {
        InstallationStatus::Ready
    } else {
        InstallationStatus::Uninitialized
    }
}
