use modlink_fs::{Error, PackageManifest, read_package_name};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_manifest(dir: &Path, content: &str) {
    fs::write(dir.join("composer.json"), content).unwrap();
}

#[test]
fn test_reads_package_name() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        r#"{"type": "magento2-module", "name": "vendor/foo", "version": "1.0.0"}"#,
    );

    let name = read_package_name(temp.path()).unwrap();
    assert_eq!(name, "vendor/foo");
}

#[test]
fn test_load_records_manifest_path() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), r#"{"type": "magento2-module", "name": "vendor/foo"}"#);

    let manifest = PackageManifest::load(temp.path()).unwrap();
    assert_eq!(manifest.path, temp.path().join("composer.json"));
}

#[test]
fn test_missing_source_dir() {
    let temp = TempDir::new().unwrap();
    let err = read_package_name(&temp.path().join("absent")).unwrap_err();
    assert!(matches!(err, Error::SourceDir { .. }), "got {err:?}");
}

#[test]
fn test_source_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("foo");
    fs::write(&file, "not a directory").unwrap();

    let err = read_package_name(&file).unwrap_err();
    assert!(
        matches!(err, Error::SourceDir { ref reason, .. } if reason.contains("not a directory")),
        "got {err:?}"
    );
}

#[test]
fn test_missing_manifest() {
    let temp = TempDir::new().unwrap();
    let err = read_package_name(temp.path()).unwrap_err();
    assert!(matches!(err, Error::ManifestNotFound { .. }), "got {err:?}");
}

#[test]
fn test_manifest_is_a_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("composer.json")).unwrap();

    let err = read_package_name(temp.path()).unwrap_err();
    assert!(
        matches!(err, Error::ManifestNotFound { ref reason, .. } if reason.contains("regular file")),
        "got {err:?}"
    );
}

#[rstest]
#[case::not_json("this is not json")]
#[case::truncated(r#"{"type": "magento2-module""#)]
#[case::array(r#"["magento2-module", "vendor/foo"]"#)]
#[case::string(r#""vendor/foo""#)]
#[case::null("null")]
fn test_unparseable_manifest(#[case] content: &str) {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), content);

    let err = read_package_name(temp.path()).unwrap_err();
    assert!(matches!(err, Error::ManifestParse { .. }), "got {err:?}");
}

#[rstest]
#[case::library(r#"{"type": "library", "name": "vendor/foo"}"#)]
#[case::theme(r#"{"type": "magento2-theme", "name": "vendor/foo"}"#)]
#[case::missing(r#"{"name": "vendor/foo"}"#)]
#[case::not_a_string(r#"{"type": 2, "name": "vendor/foo"}"#)]
#[case::case_sensitive(r#"{"type": "Magento2-Module", "name": "vendor/foo"}"#)]
fn test_wrong_package_type(#[case] content: &str) {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), content);

    let err = read_package_name(temp.path()).unwrap_err();
    assert!(
        matches!(err, Error::InvalidPackageType { expected, .. } if expected == "magento2-module"),
        "got {err:?}"
    );
}

#[rstest]
#[case::absent(r#"{"type": "magento2-module"}"#)]
#[case::empty(r#"{"type": "magento2-module", "name": ""}"#)]
#[case::blank(r#"{"type": "magento2-module", "name": "   "}"#)]
#[case::null(r#"{"type": "magento2-module", "name": null}"#)]
fn test_missing_package_name(#[case] content: &str) {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), content);

    let err = read_package_name(temp.path()).unwrap_err();
    assert!(matches!(err, Error::MissingPackageName { .. }), "got {err:?}");
}

#[test]
fn test_type_checked_before_name() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), r#"{"type": "library"}"#);

    let err = read_package_name(temp.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidPackageType { .. }), "got {err:?}");
}
