//! Extensions symlink management
//!
//! The check never follows the link: a dangling symlink still counts as
//! present, while a regular file or directory at the link path is a conflict
//! the installer refuses to resolve on its own.

use std::fs;
use std::io;
use std::path::Path;

use crate::{Error, Result};

/// Check whether `path` is already a symbolic link.
///
/// Returns `Ok(false)` when nothing exists at `path` and
/// [`Error::NotASymlink`] when something other than a symlink does.
pub fn check_symlink(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => Ok(true),
        Ok(_) => Err(Error::NotASymlink {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Create a symlink at `link` pointing to `target`, creating parent
/// directories (mode `0755` on Unix) as needed.
pub fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    if let Some(parent) = link.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_parent_dirs(parent).map_err(|source| Error::SymlinkCreate {
            link: link.to_path_buf(),
            target: target.to_path_buf(),
            source,
        })?;
    }

    platform_symlink(target, link).map_err(|source| Error::SymlinkCreate {
        link: link.to_path_buf(),
        target: target.to_path_buf(),
        source,
    })?;

    tracing::debug!(link = %link.display(), target = %target.display(), "Symlink created");
    Ok(())
}

#[cfg(unix)]
fn create_parent_dirs(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
}

#[cfg(not(unix))]
fn create_parent_dirs(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn platform_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn platform_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
