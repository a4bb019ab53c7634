//! Greeting File-Effect Integration Tests
//!
//! Exercises the public operation end to end: exact file content, overwrite
//! semantics, error reporting, and descriptor hygiene.

use anyhow::Result;
use greeter_core::{GreeterError, greet, greet_to};
use tempfile::tempdir;

#[test]
fn test_greet_writes_payload_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("out.txt");

    greet(&path)?;

    assert_eq!(
        std::fs::read_to_string(&path)?,
        "Some text: Write this to the file\n"
    );
    Ok(())
}

#[test]
fn test_repeat_calls_do_not_append() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("out.txt");

    greet(&path)?;
    let once = std::fs::read(&path)?;
    greet(&path)?;
    let twice = std::fs::read(&path)?;

    assert_eq!(once.len(), twice.len());
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn test_unwritable_path_reports_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-parent").join("out.txt");

    let err = greet(&path).unwrap_err();

    assert_eq!(err.path(), Some(path.as_path()));
    match err {
        GreeterError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

/// Count open descriptors for this process.
#[cfg(target_os = "linux")]
fn open_fd_count() -> usize {
    std::fs::read_dir("/proc/self/fd").unwrap().count()
}

#[cfg(target_os = "linux")]
#[test]
fn test_no_descriptor_leak_on_success_or_failure() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("out.txt");
    let bad = dir.path().join("missing-parent").join("out.txt");

    // Warm up lazily opened stdio state so it does not skew the count.
    greet_to(&mut Vec::new(), &good).unwrap();

    let before = open_fd_count();
    for _ in 0..8 {
        greet_to(&mut Vec::new(), &good).unwrap();
        greet_to(&mut Vec::new(), &bad).unwrap_err();
    }
    let after = open_fd_count();

    assert_eq!(before, after);
}
