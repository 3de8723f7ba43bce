//! Magento CLI activation sequence

use std::fmt;

use crate::{CommandSpec, InstallConfig};

/// One `bin/magento` subcommand of the activation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformStep {
    EnableModule,
    Upgrade,
    CompileDi,
    DeployStaticContent,
    FlushCache,
}

impl PlatformStep {
    /// The activation sequence, in the order it must run.
    pub const SEQUENCE: [Self; 5] = [
        Self::EnableModule,
        Self::Upgrade,
        Self::CompileDi,
        Self::DeployStaticContent,
        Self::FlushCache,
    ];

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::EnableModule => &["module:enable", "--all"],
            Self::Upgrade => &["setup:upgrade"],
            Self::CompileDi => &["setup:di:compile"],
            Self::DeployStaticContent => &["setup:static-content:deploy", "-f"],
            Self::FlushCache => &["cache:flush"],
        }
    }

    /// `bin/magento <args>` run from the installation root.
    pub fn command(&self, config: &InstallConfig) -> CommandSpec {
        CommandSpec::new(&config.toolchain.platform_cli)
            .args(self.args().iter().copied())
            .current_dir(&config.installation_root)
    }
}

impl fmt::Display for PlatformStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::EnableModule => "enable module",
            Self::Upgrade => "setup upgrade",
            Self::CompileDi => "compile dependency injection",
            Self::DeployStaticContent => "deploy static content",
            Self::FlushCache => "flush cache",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Toolchain;
    use rstest::rstest;
    use std::path::PathBuf;

    fn config() -> InstallConfig {
        InstallConfig {
            extension_name: "foo".into(),
            package_name: "vendor/foo".into(),
            source_dir: PathBuf::from("/extensions/foo"),
            extensions_dir: PathBuf::from("/extensions"),
            installation_root: PathBuf::from("/var/www/html"),
            extensions_link_path: PathBuf::from("/var/www/html/extensions"),
            toolchain: Toolchain {
                installer: PathBuf::from("install-magento"),
                composer: PathBuf::from("composer"),
                platform_cli: PathBuf::from("/var/www/html/bin/magento"),
            },
        }
    }

    #[rstest]
    #[case(PlatformStep::EnableModule, "/var/www/html/bin/magento module:enable --all")]
    #[case(PlatformStep::Upgrade, "/var/www/html/bin/magento setup:upgrade")]
    #[case(PlatformStep::CompileDi, "/var/www/html/bin/magento setup:di:compile")]
    #[case(
        PlatformStep::DeployStaticContent,
        "/var/www/html/bin/magento setup:static-content:deploy -f"
    )]
    #[case(PlatformStep::FlushCache, "/var/www/html/bin/magento cache:flush")]
    fn step_command_line(#[case] step: PlatformStep, #[case] expected: &str) {
        let command = step.command(&config());
        assert_eq!(command.to_string(), expected);
        assert_eq!(command.working_dir, Some(PathBuf::from("/var/www/html")));
    }

    #[test]
    fn sequence_order() {
        let subcommands: Vec<&str> = PlatformStep::SEQUENCE
            .iter()
            .map(|step| step.args()[0])
            .collect();

        assert_eq!(
            subcommands,
            [
                "module:enable",
                "setup:upgrade",
                "setup:di:compile",
                "setup:static-content:deploy",
                "cache:flush",
            ]
        );
    }
}
