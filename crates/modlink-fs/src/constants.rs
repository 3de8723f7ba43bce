//! Well-known paths of the platform installation and the extensions tree.

use std::path::Path;

/// Composer package type every installable extension must declare.
pub const MODULE_PACKAGE_TYPE: &str = "magento2-module";

/// Fixed relative paths used by the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPath {
    /// The `extensions` directory, both under the working directory (sources)
    /// and under the installation root (symlink)
    ExtensionsDir,
    /// The `composer.json` manifest inside an extension directory
    Manifest,
    /// `app/etc/env.php`, written once platform setup has completed
    EnvConfig,
    /// `bin/magento`, the platform CLI
    PlatformCli,
}

impl InstallPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExtensionsDir => "extensions",
            Self::Manifest => "composer.json",
            Self::EnvConfig => "app/etc/env.php",
            Self::PlatformCli => "bin/magento",
        }
    }
}

impl AsRef<Path> for InstallPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for InstallPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for InstallPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn joins_as_relative_path() {
        let root = PathBuf::from("/var/www/html");
        assert_eq!(
            root.join(InstallPath::EnvConfig),
            PathBuf::from("/var/www/html/app/etc/env.php")
        );
        assert_eq!(
            root.join(InstallPath::ExtensionsDir),
            PathBuf::from("/var/www/html/extensions")
        );
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(InstallPath::Manifest.to_string(), "composer.json");
        assert_eq!(InstallPath::PlatformCli.to_string(), "bin/magento");
    }
}
