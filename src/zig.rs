//! Invocation of the Zig build tool
//!
//! The one subprocess this tool runs is `zig build --list-steps`, executed
//! with the project directory as working directory. The call is synchronous
//! with no timeout and no retry; both output streams are captured in full,
//! bounded by a fixed cap.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::GenerateError;

/// Conventional build-description filename, checked before anything runs
pub const BUILD_MANIFEST: &str = "build.zig";

/// Per-stream cap on captured subprocess output
pub const MAX_CAPTURED_BYTES: usize = 4 * 1024 * 1024;

/// Verifies the project directory carries a build description.
pub fn ensure_build_manifest(project_dir: &Path) -> Result<(), GenerateError> {
    if project_dir.join(BUILD_MANIFEST).is_file() {
        Ok(())
    } else {
        Err(GenerateError::MissingBuildDescription {
            dir: project_dir.to_path_buf(),
        })
    }
}

/// Runs `zig build --list-steps` in `project_dir` and returns its stdout.
///
/// A stream larger than [`MAX_CAPTURED_BYTES`] fails the run with
/// [`GenerateError::OutputTooLarge`] instead of being truncated. A non-zero
/// exit, or a process that could not be spawned at all, is
/// [`GenerateError::SubprocessFailed`] carrying the stderr text.
pub fn list_steps_output(project_dir: &Path) -> Result<String, GenerateError> {
    debug!(dir = %project_dir.display(), "running zig build --list-steps");
    let output = Command::new("zig")
        .args(["build", "--list-steps"])
        .current_dir(project_dir)
        .output()
        .map_err(|e| GenerateError::SubprocessFailed {
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(GenerateError::SubprocessFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    if output.stdout.len() > MAX_CAPTURED_BYTES || output.stderr.len() > MAX_CAPTURED_BYTES {
        return Err(GenerateError::OutputTooLarge {
            limit: MAX_CAPTURED_BYTES,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
