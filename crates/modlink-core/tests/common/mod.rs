//! Test doubles shared by the modlink-core integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io;

use modlink_core::config::ROOT_VAR;
use modlink_core::{CommandSpec, Environment, ExitReport, InstallConfig, ProcessRunner};
use modlink_test_utils::layout::TestLayout;

/// Records every command instead of running it.
///
/// Commands whose rendered form contains a registered pattern fail with the
/// registered exit code, or fail to launch.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<CommandSpec>>,
    failures: Vec<(String, Option<i32>)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit with `code` for commands containing `pattern`.
    pub fn fail_on(mut self, pattern: &str, code: i32) -> Self {
        self.failures.push((pattern.to_string(), Some(code)));
        self
    }

    /// Refuse to launch commands containing `pattern`.
    pub fn unlaunchable(mut self, pattern: &str) -> Self {
        self.failures.push((pattern.to_string(), None));
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    /// Rendered command lines, with the program reduced to its file name.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|spec| {
                let program = spec
                    .program
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                std::iter::once(program)
                    .chain(spec.args.iter().cloned())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> io::Result<ExitReport> {
        self.calls.borrow_mut().push(command.clone());

        let rendered = command.to_string();
        for (pattern, outcome) in &self.failures {
            if rendered.contains(pattern.as_str()) {
                return match outcome {
                    Some(code) => Ok(ExitReport::from_code(*code)),
                    None => Err(io::Error::new(io::ErrorKind::NotFound, "no such program")),
                };
            }
        }
        Ok(ExitReport::from_code(0))
    }
}

/// Resolve a configuration against `layout` with default tool names.
pub fn config_for(layout: &TestLayout, extension: &str, package: Option<&str>) -> InstallConfig {
    let root = layout.root().to_string_lossy().into_owned();
    let env = Environment::from_lookup(|key| (key == ROOT_VAR).then(|| root.clone())).unwrap();
    InstallConfig::resolve(extension, package, env, &layout.work_dir()).unwrap()
}
