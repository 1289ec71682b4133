//! One-shot source file writer. Failures are reported, never propagated:
//! the run counts as attempted whether or not the artifact landed.

use colored::Colorize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Write the fully rendered `text` to `path`, overwriting any existing file.
pub fn write_source(path: &Path, text: &str) {
    match try_write(path, text) {
        Ok(()) => println!("wrote {}", path.display()),
        Err(error) => eprintln!(
            "{} failed to write {}: {error}",
            "error:".red().bold(),
            path.display()
        ),
    }
}

fn try_write(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    // Scoped handle: released on every exit path, including the error ones.
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_overwrites_unconditionally() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ast.rs");

        write_source(&path, "first\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

        write_source(&path, "second\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/printer.rs");
        write_source(&path, "stub\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "stub\n");
    }

    #[test]
    fn write_failure_is_reported_not_propagated() {
        let dir = tempfile::tempdir().unwrap();
        // The directory itself is not a writable file target.
        write_source(dir.path(), "never lands\n");
        assert!(dir.path().is_dir());
    }
}
