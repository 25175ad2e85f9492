//! Generation orchestration
//!
//! A thin sequential layer over the collaborators: precondition check, step
//! extraction, output-directory creation, then the four render-and-write
//! operations in fixed order. Any failure aborts the run; documents already
//! written stay on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::error::GenerateError;
use crate::steps::{parse_step_listing, GraphStep, ProjectContext};
use crate::vscode;
use crate::zig;

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Number of steps extracted from the project
    pub step_count: usize,
    /// Paths written, in write order
    pub files: Vec<PathBuf>,
}

/// Standalone-mode entry: inspects `project_dir` through the build tool and
/// writes the four documents into `out_dir`.
pub fn generate_workspace(
    project_dir: &Path,
    out_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    zig::ensure_build_manifest(project_dir)?;
    let listing = zig::list_steps_output(project_dir)?;
    let steps = parse_step_listing(&listing);
    debug!(count = steps.len(), "extracted steps from listing");
    let ctx = ProjectContext::new(project_name_of(project_dir), steps);
    generate_into(&ctx, out_dir)
}

/// Library-mode entry: renders from an already-known step collection,
/// skipping subprocess invocation and text parsing.
pub fn generate_from_steps<I>(
    project_name: &str,
    steps: I,
    out_dir: &Path,
) -> Result<GenerateSummary, GenerateError>
where
    I: IntoIterator,
    I::Item: GraphStep,
{
    let ctx = ProjectContext::from_steps(project_name, steps);
    generate_into(&ctx, out_dir)
}

/// Renders and writes all four documents for a prepared context.
pub fn generate_into(
    ctx: &ProjectContext,
    out_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let started = Instant::now();
    create_output_dir(out_dir)?;

    let mut files = Vec::with_capacity(4);
    files.push(vscode::write_document(
        out_dir,
        vscode::EXTENSIONS_FILE,
        &vscode::statics::extensions_document(),
    )?);
    files.push(vscode::write_document(
        out_dir,
        vscode::TASKS_FILE,
        &vscode::tasks::tasks_document(ctx),
    )?);
    files.push(vscode::write_document(
        out_dir,
        vscode::LAUNCH_FILE,
        &vscode::launch::launch_document(ctx),
    )?);
    files.push(vscode::write_document(
        out_dir,
        vscode::SETTINGS_FILE,
        &vscode::statics::settings_document(),
    )?);

    info!(
        project = %ctx.project_name,
        steps = ctx.steps.len(),
        files = files.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "workspace configuration generated"
    );

    Ok(GenerateSummary {
        step_count: ctx.steps.len(),
        files,
    })
}

/// Creates the output directory; a pre-existing directory is not an error.
fn create_output_dir(out_dir: &Path) -> Result<(), GenerateError> {
    match fs::create_dir_all(out_dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(GenerateError::DirectoryCreateFailed {
            path: out_dir.to_path_buf(),
            source: e,
        }),
    }
}

/// Project name for labels and the fallback debug target: the directory's
/// file name, canonicalized so `.` resolves to something meaningful.
fn project_name_of(project_dir: &Path) -> String {
    project_dir
        .canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(project_dir)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}
