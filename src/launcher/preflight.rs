//! Optional pre-launch check that each command's program can be found.
//!
//! Problems are only reported. A launch never depends on this check,
//! since a missing program is expected to show up in its own window.

use super::LaunchPlan;
use crate::platform::FilesystemOps;

/// A launch whose program could not be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightIssue {
    pub label: String,
    pub program: String,
}

impl std::fmt::Display for PreflightIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}' was not found", self.label, self.program)
    }
}

/// Look up the program of every launch in `plan`
pub fn check_plan(plan: &LaunchPlan, fs_ops: &dyn FilesystemOps) -> Vec<PreflightIssue> {
    let mut issues = Vec::new();

    for step in plan {
        let Some(program) = step.spec.program() else {
            continue;
        };

        if !fs_ops.is_runnable(program) {
            warn!("Preflight: {} program '{}' not found", step.spec.label, program);
            issues.push(PreflightIssue {
                label: step.spec.label.clone(),
                program: program.to_string(),
            });
        }
    }

    if issues.is_empty() {
        debug!("Preflight: all {} programs found", plan.len());
    }
    issues
}
