//! In-process extraction from an already-known step collection
//!
//! Library consumers that hold the build graph in memory implement
//! [`GraphStep`] for their step type and skip subprocess invocation and text
//! parsing entirely.

use super::{ProjectContext, StepRecord};

/// A named step already registered with the build description.
pub trait GraphStep {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

impl<T: GraphStep + ?Sized> GraphStep for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

impl GraphStep for (&str, &str) {
    fn name(&self) -> &str {
        self.0
    }

    fn description(&self) -> &str {
        self.1
    }
}

impl ProjectContext {
    /// Builds a context by iterating known steps in their native order.
    ///
    /// `executable_names` is populated with a single placeholder equal to the
    /// project name: nothing here can enumerate real install artifacts, so
    /// callers must treat the list as informational only.
    pub fn from_steps<I>(project_name: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator,
        I::Item: GraphStep,
    {
        let project_name = project_name.into();
        let steps = steps
            .into_iter()
            .map(|s| StepRecord::new(s.name(), s.description()))
            .collect();
        Self {
            executable_names: vec![project_name.clone()],
            project_name,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::StepCategory;

    #[test]
    fn iteration_order_is_preserved() {
        let ctx = ProjectContext::from_steps(
            "demo",
            [("docs", "Build docs"), ("run", "Run it"), ("test", "")],
        );
        let names: Vec<&str> = ctx.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["docs", "run", "test"]);
        assert_eq!(ctx.steps[1].category, StepCategory::Run);
    }

    #[test]
    fn executable_placeholder_equals_the_project_name() {
        let ctx = ProjectContext::from_steps("demo", [("build", "Build")]);
        assert_eq!(ctx.executable_names, ["demo"]);
    }

    #[test]
    fn empty_collection_still_carries_the_placeholder() {
        let steps: [(&str, &str); 0] = [];
        let ctx = ProjectContext::from_steps("demo", steps);
        assert!(ctx.steps.is_empty());
        assert_eq!(ctx.executable_names, ["demo"]);
    }
}
