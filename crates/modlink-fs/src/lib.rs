//! Filesystem layer for modlink
//!
//! Reads the extension's Composer manifest, probes the platform installation
//! and manages the extensions symlink. Everything here is a plain, blocking
//! filesystem operation; subprocesses live in `modlink-core`.

pub mod constants;
pub mod error;
pub mod manifest;
pub mod probe;
pub mod symlink;

pub use constants::{InstallPath, MODULE_PACKAGE_TYPE};
pub use error::{Error, Result};
pub use manifest::{PackageManifest, read_package_name};
pub use probe::{InstallationStatus, probe_installation};
pub use symlink::{check_symlink, create_symlink};
