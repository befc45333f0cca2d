use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Temp dir holding an empty config file and an `SDKs` directory with `sdks` in it
fn sandbox(sdks: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "").unwrap();
    std::fs::create_dir(dir.path().join("SDKs")).unwrap();
    for name in sdks {
        std::fs::create_dir(dir.path().join("SDKs").join(name)).unwrap();
    }
    dir
}

fn find_sdk(sandbox: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_find-sdk"))
        .arg("--config")
        .arg(sandbox.join("config.toml"))
        .arg("--sdk-dir")
        .arg(sandbox.join("SDKs"))
        .args(args)
        .env_remove("FIND_SDK_DIR")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_min_version_is_usage_error() {
    let dir = sandbox(&[]);
    let output = find_sdk(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_config_file_fails() {
    let dir = sandbox(&[]);
    let output = Command::new(env!("CARGO_BIN_EXE_find-sdk"))
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("10.6")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("nope.toml"));
}

#[test]
fn debug_logging_reports_startup() {
    let dir = sandbox(&["MacOSX10.7.sdk"]);
    let output = find_sdk(dir.path(), &["-vv", "--verify", "10.6"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10.6\n");

    let err = stderr(&output);
    assert!(err.contains(&format!("find-sdk v{} starting", env!("CARGO_PKG_VERSION"))));
    assert!(err.contains("Requested SDK 10.6 not installed"));
}

#[test]
fn verify_with_sdk_path_trusts_discovery() {
    let dir = sandbox(&["MacOSX10.7.sdk"]);
    let output = find_sdk(dir.path(), &["--verify", "--sdk_path=/custom/sdk", "10.6"]);
    assert!(output.status.success());
    assert!(!stderr(&output).contains("vvvvvvv"));

    let expected = if cfg!(target_os = "macos") { "10.7\n" } else { "\n" };
    assert_eq!(stdout(&output), expected);
}

#[test]
fn verify_mismatch_prints_request_and_banner() {
    let dir = sandbox(&["MacOSX10.7.sdk"]);
    let output = find_sdk(dir.path(), &["--verify", "10.6"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10.6\n");

    let err = stderr(&output);
    assert!(err.starts_with("\n"), "only the banner is written at the default log level");
    assert!(err.contains("vvvvvvv"));
    assert!(err.contains("This build requires the 10.6 SDK, but it was not found on your system."));
    assert!(err.contains("^^^^^^^"));
}

#[cfg(target_os = "macos")]
mod macos {
    use super::*;

    #[test]
    fn prefers_exact_match() {
        let dir = sandbox(&["MacOSX10.6.sdk", "MacOSX10.7.sdk"]);
        let output = find_sdk(dir.path(), &["10.6"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "10.6\n");
    }

    #[test]
    fn picks_next_version_up() {
        let dir = sandbox(&["MacOSX10.7.sdk", "MacOSX10.10.sdk"]);
        let output = find_sdk(dir.path(), &["10.6"]);
        assert_eq!(stdout(&output), "10.7\n");
    }

    #[test]
    fn no_sdk_is_hard_failure() {
        let dir = sandbox(&[]);
        let output = find_sdk(dir.path(), &["10.6"]);
        assert!(!output.status.success());
        assert!(stdout(&output).is_empty());
        let err = stderr(&output);
        assert!(err.contains("No 10.6+ SDK found"));
        assert!(err.contains("Install a newer Xcode or SDK package."));
    }
}

#[cfg(not(target_os = "macos"))]
mod other_platform {
    use super::*;

    #[test]
    fn prints_empty_line() {
        let dir = sandbox(&["MacOSX10.6.sdk", "MacOSX10.7.sdk"]);
        let output = find_sdk(dir.path(), &["10.6"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "\n");
    }

    #[test]
    fn no_sdk_is_not_an_error() {
        let dir = sandbox(&[]);
        let output = find_sdk(dir.path(), &["10.6"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "\n");
    }
}
