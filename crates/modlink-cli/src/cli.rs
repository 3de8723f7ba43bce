//! CLI argument parsing using clap derive
//!
//! Parsing never exits the process. Help and version requests come back as
//! [`ParseOutcome`] variants, and bad input comes back as [`CliError::Usage`].
//! The caller decides what to print and which exit code to use.
//!
//! `-h`/`--help` anywhere in the argument list wins over every other token,
//! including malformed ones. A bare `--` is dropped rather than treated as an
//! end-of-options marker.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::error::{CliError, Result};

/// Install a Magento 2 extension from ./extensions into an existing installation
#[derive(Parser, Debug)]
#[command(name = "modlink")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Environment:
  MAGENTO_ROOT        Magento installation root (required)
  MODLINK_INSTALLER   Platform installer run when the root is not set up [default: install-magento]
  MODLINK_COMPOSER    Composer binary [default: composer]
  MODLINK_MAGENTO     Magento CLI [default: $MAGENTO_ROOT/bin/magento]")]
pub struct Cli {
    /// Composer package name (read from the extension's composer.json when omitted)
    #[arg(long, value_name = "NAME")]
    pub package_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Extension directory under ./extensions
    #[arg(value_name = "EXTENSION")]
    pub extensions: Vec<String>,
}

/// Validated arguments for an install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallArgs {
    pub extension_name: String,
    pub package_name: Option<String>,
    pub verbose: bool,
}

/// Result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// `-h`/`--help`: print the text and exit successfully
    Help(String),
    /// `-V`/`--version`: print the text and exit successfully
    Version(String),
    Install(InstallArgs),
}

/// Parse `args` (including the program name).
pub fn parse_args<I, T>(args: I) -> Result<ParseOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next();
    let rest: Vec<OsString> = args.filter(|arg| arg.as_os_str() != "--").collect();

    if rest.iter().any(|arg| is_help_flag(arg)) {
        return Ok(ParseOutcome::Help(usage()));
    }

    let cli = match Cli::try_parse_from(program.into_iter().chain(rest)) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp => Ok(ParseOutcome::Help(err.render().to_string())),
                ErrorKind::DisplayVersion => Ok(ParseOutcome::Version(err.render().to_string())),
                _ => Err(CliError::usage(clap_message(&err))),
            };
        }
    };

    cli.into_install_args().map(ParseOutcome::Install)
}

/// Full help text, printed after argument errors.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

impl Cli {
    fn into_install_args(self) -> Result<InstallArgs> {
        let mut extensions = self.extensions.into_iter();
        let extension_name = match (extensions.next(), extensions.next()) {
            (Some(name), None) if !name.is_empty() => name,
            (Some(_), None) => return Err(CliError::usage("Extension name must not be empty")),
            (None, _) => return Err(CliError::usage("Missing extension name")),
            (Some(_), Some(_)) => {
                return Err(CliError::usage(format!(
                    "Expected exactly one extension name, got {}",
                    2 + extensions.count()
                )));
            }
        };

        if self.package_name.as_deref() == Some("") {
            return Err(CliError::usage("--package-name must not be empty"));
        }

        Ok(InstallArgs {
            extension_name,
            package_name: self.package_name,
            verbose: self.verbose,
        })
    }
}

fn is_help_flag(arg: &OsString) -> bool {
    arg.as_os_str() == "-h" || arg.as_os_str() == "--help"
}

/// First line of a clap error without the `error: ` prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
