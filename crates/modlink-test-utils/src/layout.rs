//! [`TestLayout`] builder for installer scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory laid out like a real run:
///
/// ```text
/// <tmp>/work/extensions/<name>/composer.json   extension sources
/// <tmp>/magento/                               installation root
/// <tmp>/bin/                                   fake external tools
/// <tmp>/commands.log                           argv of every fake tool call
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use modlink_test_utils::layout::TestLayout;
///
/// let layout = TestLayout::new();
/// layout.add_module("foo", "vendor/foo");
/// layout.bootstrap_root();
/// layout.assert_symlink("extensions");
/// ```
pub struct TestLayout {
    temp_dir: TempDir,
}

impl Default for TestLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLayout {
    /// Create the working directory, an empty installation root and the
    /// fake tool directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        for dir in ["work/extensions", "magento", "bin"] {
            fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
        }
        Self { temp_dir }
    }

    /// Directory the installer runs from.
    pub fn work_dir(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    /// `<work>/extensions`
    pub fn extensions_dir(&self) -> PathBuf {
        self.work_dir().join("extensions")
    }

    /// Installation root (`MAGENTO_ROOT`).
    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("magento")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.temp_dir.path().join("bin")
    }

    pub fn command_log(&self) -> PathBuf {
        self.temp_dir.path().join("commands.log")
    }

    /// Create `<extensions>/<name>/composer.json` with raw `content`.
    pub fn add_extension(&self, name: &str, content: &str) -> PathBuf {
        let dir = self.extensions_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("composer.json"), content).unwrap();
        dir
    }

    /// Create an extension whose manifest declares a Magento 2 module.
    pub fn add_module(&self, name: &str, package: &str) -> PathBuf {
        let manifest = serde_json::json!({
            "name": package,
            "type": "magento2-module",
            "require": { "php": ">=8.1" },
        });
        self.add_extension(name, &serde_json::to_string_pretty(&manifest).unwrap())
    }

    /// Make the installation root look like a finished platform setup.
    pub fn bootstrap_root(&self) {
        let etc = self.root().join("app/etc");
        fs::create_dir_all(&etc).unwrap();
        fs::write(etc.join("env.php"), "<?php\nreturn [];\n").unwrap();
        fs::write(self.root().join("index.php"), "<?php\n").unwrap();
    }

    /// Put a non-empty root in place but without `app/etc/env.php`.
    pub fn partial_root(&self) {
        fs::write(self.root().join("composer.json"), "{}").unwrap();
    }

    /// Assert that `path` (relative to the installation root) is a symlink.
    ///
    /// # Panics
    /// Panics with a descriptive message if it is missing or not a symlink.
    pub fn assert_symlink(&self, path: &str) {
        let full_path = self.root().join(path);
        let metadata = fs::symlink_metadata(&full_path)
            .unwrap_or_else(|_| panic!("Expected symlink to exist: {}", full_path.display()));
        assert!(
            metadata.file_type().is_symlink(),
            "Expected {} to be a symlink",
            full_path.display()
        );
    }

    /// Lines written to the command log by fake tools, in call order.
    pub fn logged_commands(&self) -> Vec<String> {
        fs::read_to_string(self.command_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Write an executable shell script `bin/<name>` that logs
    /// `<name> <args>` and exits with `exit_code`.
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, exit_code: i32) -> PathBuf {
        self.fake_tool_script(name, &format!("exit {exit_code}"))
    }

    /// Like [`fake_tool`](Self::fake_tool), but exits with `exit_code` only
    /// when its first argument is `subcommand` and with 0 otherwise.
    #[cfg(unix)]
    pub fn fake_tool_failing_on(&self, name: &str, subcommand: &str, exit_code: i32) -> PathBuf {
        self.fake_tool_script(
            name,
            &format!("if [ \"$1\" = \"{subcommand}\" ]; then exit {exit_code}; fi\nexit 0"),
        )
    }

    #[cfg(unix)]
    fn fake_tool_script(&self, name: &str, tail: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir().join(name);
        let script = format!(
            "#!/bin/sh\necho \"{name} $*\" >> \"{log}\"\n{tail}\n",
            log = self.command_log().display()
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

/// Read a symlink's target, panicking with context on failure.
pub fn read_link(path: &Path) -> PathBuf {
    fs::read_link(path).unwrap_or_else(|e| panic!("Could not read link {}: {e}", path.display()))
}
