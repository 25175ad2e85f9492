//! Command handlers mapping library results onto process exit codes

use anyhow::{Context, Result};
use tracing::error;

use crate::cli::commands::CliArgs;
use crate::service::{generate_workspace, GenerateSummary};

/// Runs generation and maps the outcome to an exit code: 0 on success, 1 on
/// any generation failure.
pub fn handle_generate(args: &CliArgs) -> i32 {
    match run(args) {
        Ok(summary) => {
            if !args.quiet {
                report(args, &summary);
            }
            0
        }
        Err(e) => {
            error!(error = ?e, "generation failed");
            eprintln!("Error: {e:#}");
            1
        }
    }
}

fn run(args: &CliArgs) -> Result<GenerateSummary> {
    generate_workspace(&args.project_dir, &args.output_dir).with_context(|| {
        format!(
            "generating workspace configuration for {}",
            args.project_dir.display()
        )
    })
}

fn report(args: &CliArgs, summary: &GenerateSummary) {
    println!(
        "Generated {} files from {} build step(s) into {}",
        summary.files.len(),
        summary.step_count,
        args.output_dir.display()
    );
    if args.verbose {
        for file in &summary.files {
            println!("  {}", file.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn args_for(project: &std::path::Path, out: &std::path::Path) -> CliArgs {
        CliArgs::parse_from([
            "zigwire",
            "-q",
            project.to_str().unwrap(),
            out.to_str().unwrap(),
        ])
    }

    #[test]
    fn missing_build_description_maps_to_exit_code_one() {
        let project = tempdir().unwrap();
        let out = project.path().join("out");
        let code = handle_generate(&args_for(project.path(), &out));
        assert_eq!(code, 1);
        assert!(!out.exists());
    }

    #[test]
    fn failing_subprocess_maps_to_exit_code_one() {
        let project = tempdir().unwrap();
        fs::write(project.path().join("build.zig"), "not zig code").unwrap();
        let out = project.path().join("out");
        let code = handle_generate(&args_for(project.path(), &out));
        assert_eq!(code, 1);
    }
}
