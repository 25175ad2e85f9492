//! Normalized build-step records
//!
//! Both extraction variants (the text parser over `zig build --list-steps`
//! output and the in-process iteration over an already-known step collection)
//! produce the same [`StepRecord`] shape, collected into a [`ProjectContext`]
//! that the document renderers consume read-only.

pub mod graph;
pub mod list_output;

pub use graph::GraphStep;
pub use list_output::parse_step_listing;

use serde::Serialize;

/// Coarse classification of a step for editor grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepCategory {
    /// Launches the built program
    Run,
    /// Runs the test suite
    Test,
    /// Produces or installs build artifacts
    Build,
    /// Anything project-defined
    Custom,
}

impl StepCategory {
    /// Derives the category from a step name.
    ///
    /// Case-sensitive exact match: `"run"`, `"test"`, `"build"` and
    /// `"install"` are recognized; every other name is [`StepCategory::Custom`].
    pub fn from_step_name(name: &str) -> Self {
        match name {
            "run" => StepCategory::Run,
            "test" => StepCategory::Test,
            "build" | "install" => StepCategory::Build,
            _ => StepCategory::Custom,
        }
    }
}

/// A named, invokable unit of the project's build surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Step name as declared in the build description (unique within a run)
    pub name: String,
    /// Free-text description, possibly empty
    pub description: String,
    /// Editor grouping derived from the name
    pub category: StepCategory,
}

impl StepRecord {
    /// Builds a record, deriving the category from the name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let category = StepCategory::from_step_name(&name);
        Self {
            name,
            description: description.into(),
            category,
        }
    }
}

/// Everything the document renderers need to know about a project
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    /// Project name, used for labels and the fallback debug target
    pub project_name: String,
    /// Steps in discovery order; the order is preserved into tasks.json
    pub steps: Vec<StepRecord>,
    /// Best-effort executable names; empty when nothing reliable is known
    pub executable_names: Vec<String>,
}

impl ProjectContext {
    /// Builds a context with no known executables (standalone CLI mode).
    pub fn new(project_name: impl Into<String>, steps: Vec<StepRecord>) -> Self {
        Self {
            project_name: project_name.into(),
            steps,
            executable_names: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_a_pure_function_of_the_name() {
        assert_eq!(StepCategory::from_step_name("run"), StepCategory::Run);
        assert_eq!(StepCategory::from_step_name("test"), StepCategory::Test);
        assert_eq!(StepCategory::from_step_name("build"), StepCategory::Build);
        assert_eq!(StepCategory::from_step_name("install"), StepCategory::Build);
        assert_eq!(StepCategory::from_step_name("docs"), StepCategory::Custom);
        assert_eq!(StepCategory::from_step_name("fmt"), StepCategory::Custom);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        assert_eq!(StepCategory::from_step_name("Run"), StepCategory::Custom);
        assert_eq!(StepCategory::from_step_name("TEST"), StepCategory::Custom);
        assert_eq!(StepCategory::from_step_name("Install"), StepCategory::Custom);
    }

    #[test]
    fn record_derives_category_independent_of_description() {
        let a = StepRecord::new("test", "Run unit tests");
        let b = StepRecord::new("test", "");
        assert_eq!(a.category, StepCategory::Test);
        assert_eq!(b.category, StepCategory::Test);
    }

    #[test]
    fn cli_context_has_no_executables() {
        let ctx = ProjectContext::new("demo", vec![StepRecord::new("run", "Run it")]);
        assert_eq!(ctx.project_name, "demo");
        assert_eq!(ctx.steps.len(), 1);
        assert!(ctx.executable_names.is_empty());
    }
}
