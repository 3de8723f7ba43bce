//! Composer manifest reading
//!
//! Only two fields matter to the installer: `type`, which must name a
//! Magento 2 module, and `name`, the Composer package id.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::{Error, InstallPath, MODULE_PACKAGE_TYPE, Result};

/// The validated subset of an extension's `composer.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    /// Composer package id, e.g. `vendor/module`
    pub name: String,
    /// Path the manifest was read from
    pub path: PathBuf,
}

/// Fields are kept as raw values so a wrongly typed `type` or `name` is
/// reported as a validation failure rather than a parse failure.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(rename = "type", default)]
    package_type: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
}

impl PackageManifest {
    /// Load and validate the manifest of the extension in `source_dir`.
    pub fn load(source_dir: &Path) -> Result<Self> {
        ensure_readable_dir(source_dir)?;

        let path = source_dir.join(InstallPath::Manifest);
        let bytes = read_manifest_bytes(&path)?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| Error::ManifestParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if !value.is_object() {
            return Err(Error::ManifestParse {
                path,
                message: "top-level value is not an object".into(),
            });
        }

        let raw: RawManifest =
            serde_json::from_value(value).map_err(|e| Error::ManifestParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let declared_type = raw.package_type.as_ref().and_then(Value::as_str);
        if declared_type != Some(MODULE_PACKAGE_TYPE) {
            let found = raw
                .package_type
                .as_ref()
                .map_or_else(|| "nothing".to_string(), Value::to_string);
            return Err(Error::InvalidPackageType {
                path,
                expected: MODULE_PACKAGE_TYPE,
                found,
            });
        }

        let name = match raw.name.as_ref().and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => return Err(Error::MissingPackageName { path }),
        };

        tracing::debug!(package = %name, manifest = %path.display(), "Manifest validated");

        Ok(Self { name, path })
    }
}

/// Read the Composer package name of the extension in `source_dir`.
pub fn read_package_name(source_dir: &Path) -> Result<String> {
    PackageManifest::load(source_dir).map(|manifest| manifest.name)
}

fn ensure_readable_dir(dir: &Path) -> Result<()> {
    let metadata = fs::metadata(dir).map_err(|_| Error::SourceDir {
        path: dir.to_path_buf(),
        reason: "does not exist".into(),
    })?;

    if !metadata.is_dir() {
        return Err(Error::SourceDir {
            path: dir.to_path_buf(),
            reason: "is not a directory".into(),
        });
    }

    fs::read_dir(dir).map_err(|e| Error::SourceDir {
        path: dir.to_path_buf(),
        reason: format!("is not readable: {e}"),
    })?;

    Ok(())
}

fn read_manifest_bytes(path: &Path) -> Result<Vec<u8>> {
    let metadata = fs::metadata(path).map_err(|_| Error::ManifestNotFound {
        path: path.to_path_buf(),
        reason: "does not exist".into(),
    })?;

    if !metadata.is_file() {
        return Err(Error::ManifestNotFound {
            path: path.to_path_buf(),
            reason: "is not a regular file".into(),
        });
    }

    fs::read(path).map_err(|e| Error::ManifestNotFound {
        path: path.to_path_buf(),
        reason: format!("is not readable: {e}"),
    })
}
