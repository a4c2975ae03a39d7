//! CLI integration tests for packmap.
//!
//! These tests run the binary against mapping files in temporary directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the packmap binary command, isolated from any user config.
fn packmap(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("packmap").unwrap();
    cmd.env("HOME", home).env_remove("PACKMAP_PACKAGES");
    cmd
}

/// Create a project directory with a `.packages` file.
fn project(contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".packages"), contents).unwrap();
    tmp
}

// ============================================================================
// packmap resolve
// ============================================================================

#[test]
fn test_resolve_package_uri() {
    let tmp = project("# deps\nfoo=http://cdn.example/foo/1.0/\n");

    packmap(tmp.path())
        .args(["resolve", "package:foo/src/a.txt"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("http://cdn.example/foo/1.0/src/a.txt\n");
}

#[test]
fn test_resolve_relative_entry_against_file_directory() {
    let tmp = project("foo=deps/foo\n");

    packmap(tmp.path())
        .args(["resolve", "package:foo/a.txt"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("file://"))
        .stdout(predicate::str::ends_with("/deps/foo/a.txt\n"));
}

#[test]
fn test_resolve_passes_through_other_schemes() {
    let tmp = project("foo=http://x/\n");

    packmap(tmp.path())
        .args(["resolve", "https://example.com/a"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("https://example.com/a\n");
}

#[test]
fn test_resolve_unknown_package() {
    let tmp = project("foo=http://x/\n");

    packmap(tmp.path())
        .args(["resolve", "package:bar/a.txt"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown package name: `bar`"))
        .stderr(predicate::str::contains("packmap list"));
}

#[test]
fn test_resolve_rejects_authority() {
    let tmp = project("foo=http://x/\n");

    packmap(tmp.path())
        .args(["resolve", "package://foo/a.txt"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not have a host part"));
}

#[test]
fn test_explicit_packages_flag() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("custom.map");
    fs::write(&file, "foo=http://x/foo/\n").unwrap();

    packmap(tmp.path())
        .args(["--packages", file.to_str().unwrap(), "resolve", "package:foo/a"])
        .assert()
        .success()
        .stdout("http://x/foo/a\n");
}

#[test]
fn test_packages_file_from_project_config() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join(".packmap")).unwrap();
    fs::write(
        tmp.path().join(".packmap/config.toml"),
        "packages_file = \"deps.map\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("deps.map"), "foo=http://x/foo/\n").unwrap();

    packmap(tmp.path())
        .args(["resolve", "package:foo/a"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("http://x/foo/a\n");
}

// ============================================================================
// error reporting
// ============================================================================

#[test]
fn test_missing_packages_file() {
    let tmp = TempDir::new().unwrap();

    packmap(tmp.path())
        .args(["list"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("package map not found"));
}

#[test]
fn test_format_error_points_into_file() {
    let tmp = project("foo=http://x/\nfoo=http://y/\n");

    packmap(tmp.path())
        .args(["list"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse package map"))
        .stderr(predicate::str::contains("same package name occurred twice"))
        .stderr(predicate::str::contains("line 2, column 1"))
        .stderr(predicate::str::contains("  --> "));
}

// ============================================================================
// packmap list
// ============================================================================

#[test]
fn test_list_in_file_order() {
    let tmp = project("zeta=http://x/z/\nalpha=http://x/a/\n");

    packmap(tmp.path())
        .args(["list"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("zeta -> http://x/z/\nalpha -> http://x/a/\n");

    packmap(tmp.path())
        .args(["list", "--names"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("zeta\nalpha\n");
}

#[test]
fn test_list_json() {
    let tmp = project("foo=http://x/foo/\n");

    let output = packmap(tmp.path())
        .args(["list", "--json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["name"], "foo");
    assert_eq!(entries[0]["location"], "http://x/foo/");
}

// ============================================================================
// packmap relativize
// ============================================================================

#[test]
fn test_relativize() {
    let tmp = TempDir::new().unwrap();

    packmap(tmp.path())
        .args(["relativize", "http://e/a/b", "--base", "http://e/f/g/h"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("../../a/b\n");

    packmap(tmp.path())
        .args(["relativize", "http://other/a/b", "--base", "http://e/f/g/h"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("http://other/a/b\n");
}

#[test]
fn test_relativize_rejects_relative_base() {
    let tmp = TempDir::new().unwrap();

    packmap(tmp.path())
        .args(["relativize", "http://e/a/b", "--base", "f/g"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("base location is not absolute"));
}

// ============================================================================
// packmap rewrite
// ============================================================================

#[test]
fn test_rewrite_relative_to_stdout() {
    let tmp = TempDir::new().unwrap();
    let deps = tmp.path().join("deps/foo/lib");
    fs::create_dir_all(&deps).unwrap();
    let deps_url = url::Url::from_directory_path(deps.canonicalize().unwrap()).unwrap();
    fs::write(
        tmp.path().join(".packages"),
        format!("foo={}\nweb=http://cdn/web\n", deps_url),
    )
    .unwrap();

    packmap(tmp.path())
        .args(["rewrite", "--comment", "pinned"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("#pinned\nfoo=deps/foo/lib/\nweb=http://cdn/web/\n");
}

#[test]
fn test_rewrite_absolute_to_file() {
    let tmp = project("foo=lib\n");

    packmap(tmp.path())
        .args(["rewrite", "--absolute", "--output", "out.packages"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let text = fs::read_to_string(tmp.path().join("out.packages")).unwrap();
    assert!(text.starts_with("# generated by packmap on "));
    assert!(text.contains("\nfoo=file://"));
    assert!(text.ends_with("/lib/\n"));
}

// ============================================================================
// packmap completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();

    packmap(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("packmap"));
}

#[test]
fn test_completions_to_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("completions").join("_packmap");

    packmap(tmp.path())
        .args(["completions", "zsh", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let script = fs::read_to_string(&out).unwrap();
    assert!(script.contains("#compdef packmap"));
}
