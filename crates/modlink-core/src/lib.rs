//! Installation orchestration for modlink
//!
//! Sits between the CLI and the filesystem layer:
//!
//! ```text
//!          modlink-cli
//!               |
//!          modlink-core  ---- external tools (installer, composer, bin/magento)
//!               |
//!          modlink-fs
//! ```
//!
//! - **Configuration**: [`Environment`] and [`InstallConfig`] resolve the
//!   installation root, toolchain and package name once, up front
//! - **Processes**: [`ProcessRunner`] abstracts subprocess execution so the
//!   orchestration can be exercised without a real toolchain
//! - **Orchestration**: [`Installer`] runs the fail-fast install sequence

pub mod composer;
pub mod config;
pub mod error;
pub mod install;
pub mod platform;
pub mod process;

pub use config::{Environment, InstallConfig, Toolchain};
pub use error::{Error, Result, StepFailure};
pub use install::{InstallReport, Installer, Stage};
pub use platform::PlatformStep;
pub use process::{CommandSpec, ExitReport, ProcessRunner, SystemRunner};
