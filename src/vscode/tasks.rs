//! tasks.json rendering
//!
//! One task per extracted step, in discovery order, preceded by an
//! always-present default build task. Presentation and problem matcher are
//! fixed policy, identical for every task.

use serde::Serialize;

use crate::steps::{ProjectContext, StepCategory};

/// Label of the always-present default task; launch configurations reference
/// it as their pre-launch task.
pub const DEFAULT_BUILD_TASK_LABEL: &str = "zig build";

#[derive(Debug, Clone, Serialize)]
pub struct TasksFile {
    pub version: &'static str,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub command: &'static str,
    pub args: Vec<String>,
    pub group: TaskGroup,
    pub presentation: Presentation,
    #[serde(rename = "problemMatcher")]
    pub problem_matcher: &'static str,
}

/// Either a bare group name or the default-task marker object
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TaskGroup {
    Kind(&'static str),
    Default {
        kind: &'static str,
        #[serde(rename = "isDefault")]
        is_default: bool,
    },
}

/// Fixed presentation policy: sequential shared panel, no focus stealing,
/// no clearing between runs.
#[derive(Debug, Clone, Serialize)]
pub struct Presentation {
    pub echo: bool,
    pub reveal: &'static str,
    pub focus: bool,
    pub panel: &'static str,
    #[serde(rename = "showReuseMessage")]
    pub show_reuse_message: bool,
    pub clear: bool,
}

impl Presentation {
    fn fixed() -> Self {
        Self {
            echo: true,
            reveal: "always",
            focus: false,
            panel: "shared",
            show_reuse_message: true,
            clear: false,
        }
    }
}

/// Renders the tasks document: the default build task, then one task per
/// step. Test-category steps land in the test group, everything else in the
/// build group.
pub fn tasks_document(ctx: &ProjectContext) -> TasksFile {
    let mut tasks = Vec::with_capacity(ctx.steps.len() + 1);
    tasks.push(Task {
        label: DEFAULT_BUILD_TASK_LABEL.to_string(),
        kind: "shell",
        command: "zig",
        args: vec!["build".to_string()],
        group: TaskGroup::Default {
            kind: "build",
            is_default: true,
        },
        presentation: Presentation::fixed(),
        problem_matcher: "$gcc",
    });

    for step in &ctx.steps {
        let group = match step.category {
            StepCategory::Test => "test",
            _ => "build",
        };
        tasks.push(Task {
            label: format!("zig build {}", step.name),
            kind: "shell",
            command: "zig",
            args: vec!["build".to_string(), step.name.clone()],
            group: TaskGroup::Kind(group),
            presentation: Presentation::fixed(),
            problem_matcher: "$gcc",
        });
    }

    TasksFile {
        version: "2.0.0",
        tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::StepRecord;

    fn ctx(steps: &[(&str, &str)]) -> ProjectContext {
        ProjectContext::new(
            "demo",
            steps
                .iter()
                .map(|(n, d)| StepRecord::new(*n, *d))
                .collect(),
        )
    }

    #[test]
    fn task_count_is_steps_plus_default() {
        let doc = tasks_document(&ctx(&[("build", ""), ("test", ""), ("run", "")]));
        assert_eq!(doc.version, "2.0.0");
        assert_eq!(doc.tasks.len(), 4);
    }

    #[test]
    fn default_task_comes_first_with_plain_build_invocation() {
        let doc = tasks_document(&ctx(&[("run", "")]));
        let default = &doc.tasks[0];
        assert_eq!(default.label, DEFAULT_BUILD_TASK_LABEL);
        assert_eq!(default.args, ["build"]);
        assert!(matches!(
            default.group,
            TaskGroup::Default {
                kind: "build",
                is_default: true
            }
        ));
    }

    #[test]
    fn step_tasks_follow_in_discovery_order() {
        let doc = tasks_document(&ctx(&[("zzz", ""), ("aaa", "")]));
        assert_eq!(doc.tasks[1].label, "zig build zzz");
        assert_eq!(doc.tasks[1].args, ["build", "zzz"]);
        assert_eq!(doc.tasks[2].label, "zig build aaa");
    }

    #[test]
    fn test_steps_join_the_test_group() {
        let doc = tasks_document(&ctx(&[("test", ""), ("run", ""), ("docs", "")]));
        assert!(matches!(doc.tasks[1].group, TaskGroup::Kind("test")));
        assert!(matches!(doc.tasks[2].group, TaskGroup::Kind("build")));
        assert!(matches!(doc.tasks[3].group, TaskGroup::Kind("build")));
    }

    #[test]
    fn presentation_policy_is_constant_across_tasks() {
        let doc = tasks_document(&ctx(&[("test", ""), ("docs", "")]));
        for task in &doc.tasks {
            assert!(task.presentation.echo);
            assert_eq!(task.presentation.reveal, "always");
            assert!(!task.presentation.focus);
            assert_eq!(task.presentation.panel, "shared");
            assert!(task.presentation.show_reuse_message);
            assert!(!task.presentation.clear);
            assert_eq!(task.problem_matcher, "$gcc");
        }
    }

    #[test]
    fn group_serialization_shapes() {
        let doc = tasks_document(&ctx(&[("test", "")]));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["tasks"][0]["group"]["isDefault"], true);
        assert_eq!(json["tasks"][1]["group"], "test");
    }
}
