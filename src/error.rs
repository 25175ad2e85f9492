//! Error taxonomy for a generation run.
//!
//! Every failure is fatal for the remainder of the run: there are no retries
//! and no best-effort continuation. Documents written before a failure remain
//! on disk.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort workspace generation
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The project directory carries no build description, so there is
    /// nothing to inspect. Nothing has been written when this is returned.
    #[error("no build.zig found in {}", .dir.display())]
    MissingBuildDescription { dir: PathBuf },

    /// The step-listing subprocess exited non-zero or could not be run at
    /// all. Carries the captured stderr (or the OS error text) for display.
    #[error("`zig build --list-steps` failed:\n{stderr}")]
    SubprocessFailed { stderr: String },

    /// The step-listing subprocess produced more output than the fixed
    /// capture cap. Failing here beats silently truncating and masking
    /// unexpectedly large output.
    #[error("step listing exceeded the {limit}-byte output cap")]
    OutputTooLarge { limit: usize },

    /// The output directory could not be created. An already-existing
    /// directory is not an error and never reaches this variant.
    #[error("failed to create output directory {}: {source}", .path.display())]
    DirectoryCreateFailed { path: PathBuf, source: io::Error },

    /// One of the four documents could not be written. Earlier documents
    /// stay on disk; there is no rollback.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_build_description_names_the_directory() {
        let err = GenerateError::MissingBuildDescription {
            dir: Path::new("/tmp/project").to_path_buf(),
        };
        let msg = err.to_string();
        assert!(msg.contains("build.zig"));
        assert!(msg.contains("/tmp/project"));
    }

    #[test]
    fn subprocess_failed_carries_stderr() {
        let err = GenerateError::SubprocessFailed {
            stderr: "error: no build.zig file found".to_string(),
        };
        assert!(err.to_string().contains("no build.zig file found"));
    }

    #[test]
    fn write_failed_names_the_target_path() {
        let err = GenerateError::WriteFailed {
            path: Path::new("/out/tasks.json").to_path_buf(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("tasks.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn output_too_large_names_the_cap() {
        let err = GenerateError::OutputTooLarge { limit: 4 * 1024 * 1024 };
        assert!(err.to_string().contains("4194304"));
    }
}
