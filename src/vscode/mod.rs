//! Renderers for the four VS Code workspace documents
//!
//! Each document is fixed-shape JSON rendered from serde document structs.
//! Rendering is deterministic: the same [`ProjectContext`](crate::steps::ProjectContext)
//! always produces byte-identical output. The only failure mode of a
//! render-and-write operation is the write itself.

pub mod launch;
pub mod statics;
pub mod tasks;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::GenerateError;

pub const EXTENSIONS_FILE: &str = "extensions.json";
pub const TASKS_FILE: &str = "tasks.json";
pub const LAUNCH_FILE: &str = "launch.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Serializes a document as pretty-printed JSON with a trailing newline and
/// writes it to `out_dir/file_name`. Failures carry the target path.
pub fn write_document<T: Serialize>(
    out_dir: &Path,
    file_name: &str,
    document: &T,
) -> Result<PathBuf, GenerateError> {
    let path = out_dir.join(file_name);
    let mut text = serde_json::to_string_pretty(document).map_err(|e| {
        GenerateError::WriteFailed {
            path: path.clone(),
            source: e.into(),
        }
    })?;
    text.push('\n');
    fs::write(&path, text).map_err(|e| GenerateError::WriteFailed {
        path: path.clone(),
        source: e,
    })?;
    debug!(path = %path.display(), "wrote document");
    Ok(path)
}
