//! Install configuration resolution
//!
//! Everything the installer needs is resolved here exactly once: the
//! installation root and toolchain from the environment, the package name
//! from the command line or the extension's manifest. The resulting
//! [`InstallConfig`] is immutable and passed explicitly to the [`Installer`].
//!
//! [`Installer`]: crate::Installer

use std::path::{Path, PathBuf};

use modlink_fs::{InstallPath, read_package_name};

use crate::{Error, Result};

/// Required: the platform installation root.
pub const ROOT_VAR: &str = "MAGENTO_ROOT";
/// Optional: platform bootstrap installer.
pub const INSTALLER_VAR: &str = "MODLINK_INSTALLER";
/// Optional: Composer binary.
pub const COMPOSER_VAR: &str = "MODLINK_COMPOSER";
/// Optional: platform CLI, defaults to `<root>/bin/magento`.
pub const PLATFORM_CLI_VAR: &str = "MODLINK_MAGENTO";

const DEFAULT_INSTALLER: &str = "install-magento";
const DEFAULT_COMPOSER: &str = "composer";

/// External programs the installer drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub installer: PathBuf,
    pub composer: PathBuf,
    pub platform_cli: PathBuf,
}

/// Values read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub installation_root: PathBuf,
    pub toolchain: Toolchain,
}

impl Environment {
    /// Read the environment of the current process.
    pub fn from_process() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let installation_root = get(ROOT_VAR)
            .map(PathBuf::from)
            .ok_or(Error::MissingEnv { var: ROOT_VAR })?;

        let toolchain = Toolchain {
            installer: get(INSTALLER_VAR).map_or_else(|| DEFAULT_INSTALLER.into(), PathBuf::from),
            composer: get(COMPOSER_VAR).map_or_else(|| DEFAULT_COMPOSER.into(), PathBuf::from),
            platform_cli: get(PLATFORM_CLI_VAR).map_or_else(
                || installation_root.join(InstallPath::PlatformCli),
                PathBuf::from,
            ),
        };

        Ok(Self {
            installation_root,
            toolchain,
        })
    }
}

/// Fully resolved, read-only settings for one installer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub extension_name: String,
    pub package_name: String,
    /// `<cwd>/extensions/<extension_name>`
    pub source_dir: PathBuf,
    /// `<cwd>/extensions`, the symlink target
    pub extensions_dir: PathBuf,
    pub installation_root: PathBuf,
    /// `<installation_root>/extensions`
    pub extensions_link_path: PathBuf,
    pub toolchain: Toolchain,
}

impl InstallConfig {
    /// Resolve the configuration for installing `extension_name`.
    ///
    /// The manifest is only read when `package_name` is `None`.
    pub fn resolve(
        extension_name: &str,
        package_name: Option<&str>,
        env: Environment,
        working_dir: &Path,
    ) -> Result<Self> {
        let extensions_dir = working_dir.join(InstallPath::ExtensionsDir);
        let source_dir = extensions_dir.join(extension_name);

        let package_name = match package_name {
            Some(name) => {
                tracing::debug!(package = %name, "Using package name from command line");
                name.to_string()
            }
            None => read_package_name(&source_dir)?,
        };

        let extensions_link_path = env.installation_root.join(InstallPath::ExtensionsDir);

        Ok(Self {
            extension_name: extension_name.to_string(),
            package_name,
            source_dir,
            extensions_dir,
            installation_root: env.installation_root,
            extensions_link_path,
            toolchain: env.toolchain,
        })
    }

    /// Resolve against the process environment and working directory.
    pub fn from_process(extension_name: &str, package_name: Option<&str>) -> Result<Self> {
        let env = Environment::from_process()?;
        let cwd = std::env::current_dir().map_err(Error::WorkingDir)?;
        Self::resolve(extension_name, package_name, env, &cwd)
    }
}
