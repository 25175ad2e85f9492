//! zigwire - VS Code workspace generation for Zig projects
//!
//! This library inspects a Zig project's declared build steps and emits a
//! fixed set of VS Code integration files (extension recommendations, task
//! definitions, debugger launch definitions, editor settings) into an output
//! directory.
//!
//! # Core Concepts
//!
//! - **Step extraction**: the project's steps are discovered either by
//!   parsing `zig build --list-steps` output (standalone mode) or by
//!   iterating an in-memory step collection (library mode)
//! - **Document rendering**: four fixed-shape JSON documents are rendered
//!   deterministically from the extracted [`ProjectContext`]
//! - **One-shot generation**: no persistent state, no concurrency; a failure
//!   aborts the run, leaving already-written documents in place
//!
//! # Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use zigwire::{generate_from_steps, generate_workspace};
//!
//! fn generate(out_dir: &Path) -> Result<(), zigwire::GenerateError> {
//!     // Standalone mode: run the build tool and parse its step listing
//!     let summary = generate_workspace(Path::new("."), out_dir)?;
//!     println!("wrote {} files", summary.files.len());
//!
//!     // Library mode: render from steps already known in memory
//!     let steps = [("run", "Run the app"), ("test", "Run unit tests")];
//!     generate_from_steps("myproject", steps, out_dir)?;
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`steps`]: step records, category derivation, both extraction variants
//! - [`vscode`]: the four document renderers and the write collaborator
//! - [`zig`]: build-description precondition and subprocess invocation
//! - [`service`]: sequential orchestration of a generation run

// Public modules
pub mod cli;
pub mod error;
pub mod service;
pub mod steps;
pub mod util;
pub mod vscode;
pub mod zig;

// Re-export key types for convenient access
pub use error::GenerateError;
pub use service::{generate_from_steps, generate_into, generate_workspace, GenerateSummary};
pub use steps::{GraphStep, ProjectContext, StepCategory, StepRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_zigwire() {
        assert_eq!(NAME, "zigwire");
    }
}
