//! The install sequence
//!
//! ```text
//! CheckInstallation -> [Bootstrap] -> InstallPackage -> CheckSymlink
//!     -> [CreateSymlink] -> ConfigureModule -> Done
//! ```
//!
//! Every step either advances or returns its error immediately. Nothing is
//! retried and completed steps are never rolled back: a package Composer has
//! already required stays required if a later step fails.

use std::fmt;

use modlink_fs::{check_symlink, create_symlink, probe_installation};

use crate::composer;
use crate::error::StepFailure;
use crate::{CommandSpec, Error, InstallConfig, PlatformStep, ProcessRunner, Result};

/// A step about to run, reported to the progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Bootstrap,
    ConfigureRepository,
    RequirePackage,
    CreateSymlink,
    Platform(PlatformStep),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bootstrap => write!(f, "Installing Magento"),
            Self::ConfigureRepository => write!(f, "Registering path repository"),
            Self::RequirePackage => write!(f, "Requiring package"),
            Self::CreateSymlink => write!(f, "Linking extensions directory"),
            Self::Platform(step) => write!(f, "Running {step}"),
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstallReport {
    /// The platform installer ran because the installation was not ready
    pub bootstrapped: bool,
    /// The extensions symlink did not exist and was created
    pub symlink_created: bool,
}

/// Runs the install sequence for one resolved configuration.
pub struct Installer<'a, R: ProcessRunner> {
    config: &'a InstallConfig,
    runner: &'a R,
    progress: Option<Box<dyn Fn(Stage) + 'a>>,
}

impl<'a, R: ProcessRunner> Installer<'a, R> {
    pub fn new(config: &'a InstallConfig, runner: &'a R) -> Self {
        Self {
            config,
            runner,
            progress: None,
        }
    }

    /// Call `progress` before each step starts.
    pub fn with_progress(mut self, progress: impl Fn(Stage) + 'a) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    pub fn run(&self) -> Result<InstallReport> {
        let bootstrapped = self.ensure_installation()?;
        self.install_package()?;
        let symlink_created = self.ensure_symlink()?;
        self.configure_module()?;

        tracing::info!(package = %self.config.package_name, "Installation complete");

        Ok(InstallReport {
            bootstrapped,
            symlink_created,
        })
    }

    fn ensure_installation(&self) -> Result<bool> {
        let status = probe_installation(&self.config.installation_root);
        tracing::debug!(
            root = %self.config.installation_root.display(),
            %status,
            "Probed installation"
        );

        if !status.needs_bootstrap() {
            tracing::debug!("Installation ready, skipping bootstrap");
            return Ok(false);
        }

        self.report(Stage::Bootstrap);
        let command = CommandSpec::new(&self.config.toolchain.installer);
        self.execute(&command)
            .map_err(|failure| Error::PlatformBootstrap {
                command: command.to_string(),
                failure,
            })?;
        Ok(true)
    }

    fn install_package(&self) -> Result<()> {
        let steps = [
            (Stage::ConfigureRepository, composer::configure_repository(self.config)),
            (Stage::RequirePackage, composer::require_package(self.config)),
        ];

        for (stage, command) in steps {
            self.report(stage);
            self.execute(&command)
                .map_err(|failure| Error::DependencyInstall {
                    command: command.to_string(),
                    failure,
                })?;
        }
        Ok(())
    }

    fn ensure_symlink(&self) -> Result<bool> {
        let link = &self.config.extensions_link_path;
        if check_symlink(link)? {
            tracing::debug!(link = %link.display(), "Symlink already present");
            return Ok(false);
        }

        self.report(Stage::CreateSymlink);
        create_symlink(&self.config.extensions_dir, link)?;
        Ok(true)
    }

    fn configure_module(&self) -> Result<()> {
        for step in PlatformStep::SEQUENCE {
            self.report(Stage::Platform(step));
            let command = step.command(self.config);
            self.execute(&command)
                .map_err(|failure| Error::PlatformCommand {
                    command: command.to_string(),
                    failure,
                })?;
        }
        Ok(())
    }

    fn execute(&self, command: &CommandSpec) -> std::result::Result<(), StepFailure> {
        let report = self.runner.run(command).map_err(StepFailure::Launch)?;
        if report.success() {
            return Ok(());
        }

        tracing::warn!(command = %command, code = ?report.code, "Command failed");
        Err(match report.code {
            Some(code) => StepFailure::Exit(code),
            None => StepFailure::Signal,
        })
    }

    fn report(&self, stage: Stage) {
        if let Some(progress) = &self.progress {
            progress(stage);
        }
    }
}
