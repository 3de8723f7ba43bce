//! Composer command lines
//!
//! The extension is registered as a path repository with symlinking enabled,
//! so edits in the extensions tree show up in the installation without a
//! reinstall, then required at the `@dev` stability constraint.

use std::path::Path;

use serde_json::json;

use crate::{CommandSpec, InstallConfig};

/// Version constraint used when requiring a path-repository package.
pub const DEV_CONSTRAINT: &str = "@dev";

/// JSON value for a symlinked Composer path repository at `url`.
pub fn path_repository(url: &Path) -> String {
    json!({
        "type": "path",
        "url": url.to_string_lossy(),
        "options": { "symlink": true },
    })
    .to_string()
}

/// `composer config repositories.<package> <path repository>` in the installation root.
pub fn configure_repository(config: &InstallConfig) -> CommandSpec {
    CommandSpec::new(&config.toolchain.composer)
        .arg("config")
        .arg(format!("repositories.{}", config.package_name))
        .arg(path_repository(&config.source_dir))
        .current_dir(&config.installation_root)
}

/// `composer require "<package> @dev"` in the installation root.
pub fn require_package(config: &InstallConfig) -> CommandSpec {
    CommandSpec::new(&config.toolchain.composer)
        .arg("require")
        .arg(format!("{} {DEV_CONSTRAINT}", config.package_name))
        .current_dir(&config.installation_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn path_repository_enables_symlink() {
        let raw = path_repository(Path::new("/extensions/foo"));
        let value: Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["type"], "path");
        assert_eq!(value["url"], "/extensions/foo");
        assert_eq!(value["options"]["symlink"], true);
    }
}
