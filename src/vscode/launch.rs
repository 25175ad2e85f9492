//! launch.json rendering
//!
//! Debug targets come from the context's executable list when one is known,
//! otherwise from run-capable steps, otherwise a single project-named
//! fallback. The configurations list is never empty.

use serde::Serialize;

use super::tasks::DEFAULT_BUILD_TASK_LABEL;
use crate::steps::{ProjectContext, StepCategory};

#[derive(Debug, Clone, Serialize)]
pub struct LaunchFile {
    pub version: &'static str,
    pub configurations: Vec<LaunchConfiguration>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LaunchConfiguration {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub request: &'static str,
    pub program: String,
    pub args: Vec<String>,
    pub cwd: &'static str,
    #[serde(rename = "preLaunchTask")]
    pub pre_launch_task: &'static str,
    pub linux: MiDebugger,
    pub osx: MiDebugger,
    pub windows: WindowsDebugger,
}

#[derive(Debug, Clone, Serialize)]
pub struct MiDebugger {
    #[serde(rename = "MIMode")]
    pub mi_mode: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WindowsDebugger {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Target preference order: known executables (library mode populates a
/// placeholder equal to the project name), then run-category step names
/// (standalone mode), then the project name itself so the list is never
/// empty. The placeholder can name a binary that was never installed;
/// callers treat it as informational.
fn debug_targets(ctx: &ProjectContext) -> Vec<String> {
    if !ctx.executable_names.is_empty() {
        return ctx.executable_names.clone();
    }
    let run_steps: Vec<String> = ctx
        .steps
        .iter()
        .filter(|s| s.category == StepCategory::Run)
        .map(|s| s.name.clone())
        .collect();
    if !run_steps.is_empty() {
        return run_steps;
    }
    vec![ctx.project_name.clone()]
}

/// Renders the launch document, one configuration per debug target.
pub fn launch_document(ctx: &ProjectContext) -> LaunchFile {
    let configurations = debug_targets(ctx)
        .into_iter()
        .map(|target| LaunchConfiguration {
            name: format!("Debug {target}"),
            kind: "cppdbg",
            request: "launch",
            program: format!("${{workspaceFolder}}/zig-out/bin/{target}"),
            args: Vec::new(),
            cwd: "${workspaceFolder}",
            pre_launch_task: DEFAULT_BUILD_TASK_LABEL,
            linux: MiDebugger { mi_mode: "gdb" },
            osx: MiDebugger { mi_mode: "lldb" },
            windows: WindowsDebugger { kind: "cppvsdbg" },
        })
        .collect();

    LaunchFile {
        version: "0.2.0",
        configurations,
    }
}
