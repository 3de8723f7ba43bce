//! modlink
//!
//! Installs a Magento 2 extension from `./extensions/<name>` into the
//! installation at `$MAGENTO_ROOT`: bootstraps the installation if needed,
//! requires the package through a symlinked Composer path repository, links
//! `$MAGENTO_ROOT/extensions` to the sources and runs the `bin/magento`
//! activation sequence.

mod cli;
mod error;

use std::ffi::OsString;
use std::process::ExitCode;

use colored::Colorize;
use modlink_core::{InstallConfig, Installer, SystemRunner};
use tracing_subscriber::EnvFilter;

use cli::ParseOutcome;
use error::Result;

fn main() -> ExitCode {
    match run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            if e.shows_usage() {
                print!("{}", cli::usage());
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let args = match cli::parse_args(args)? {
        ParseOutcome::Help(text) | ParseOutcome::Version(text) => {
            print!("{text}");
            return Ok(());
        }
        ParseOutcome::Install(args) => args,
    };

    init_tracing(args.verbose);
    tracing::debug!(?args, "Parsed arguments");

    let config = InstallConfig::from_process(&args.extension_name, args.package_name.as_deref())?;

    println!(
        "{} Installing {} from {}",
        "→".cyan(),
        config.package_name.bold(),
        config.source_dir.display()
    );

    let report = Installer::new(&config, &SystemRunner)
        .with_progress(|stage| println!("{} {}...", "→".cyan(), stage))
        .run()?;

    if report.symlink_created {
        println!(
            "{} Linked {} -> {}",
            "✓".green().bold(),
            config.extensions_link_path.display(),
            config.extensions_dir.display()
        );
    }

    println!(
        "{} {} installed into {}",
        "✓".green().bold(),
        config.package_name.bold(),
        config.installation_root.display()
    );

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise `--verbose` selects debug.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}
