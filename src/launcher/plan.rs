//! Launch Plan
//!
//! The fixed sequence of launches for one session: the server, then every
//! native client, then every script client, each followed by its pause.

use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::models::{ProcessKind, ProcessSpec};

/// One launch and the pause that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchStep {
    pub spec: ProcessSpec,
    pub delay_after: Duration,
}

/// Ordered launches for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    steps: Vec<LaunchStep>,
}

impl LaunchPlan {
    /// Build the plan described by `config`
    pub fn from_config(config: &Config) -> Self {
        let warmup = config.timing.warmup();
        let client_delay = config.timing.client_delay();

        let mut steps = Vec::with_capacity(
            1 + config.native_client.count + config.script_client.count,
        );
        steps.push(LaunchStep {
            spec: ProcessSpec::server(config.server.command.clone()),
            delay_after: warmup,
        });

        for kind in ProcessKind::LAUNCH_ORDER.into_iter().filter(ProcessKind::is_client) {
            let Some(section) = config.client(kind) else {
                continue;
            };
            let command = section.command_for(kind);
            steps.extend((1..=section.count).map(|ordinal| LaunchStep {
                spec: ProcessSpec::client(kind, ordinal, command.clone()),
                delay_after: client_delay,
            }));
        }

        Self { steps }
    }

    pub fn steps(&self) -> &[LaunchStep] {
        &self.steps
    }

    /// Number of launches; always at least one (the server)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of launches of one kind
    pub fn count_of(&self, kind: ProcessKind) -> usize {
        self.steps.iter().filter(|s| s.spec.kind == kind).count()
    }

    /// Sum of every pause in the plan
    pub fn total_delay(&self) -> Duration {
        self.steps.iter().map(|s| s.delay_after).sum()
    }

    /// Check every command can be handed to a terminal
    pub fn validate(&self) -> Result<()> {
        self.steps.iter().try_for_each(|step| step.spec.validate())
    }

    /// Human-readable description, one line per launch
    pub fn describe(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                format!(
                    "{:>2}. {:<18} {:<40} then wait {} ms",
                    i + 1,
                    step.spec.label,
                    step.spec.command,
                    step.delay_after.as_millis()
                )
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a LaunchPlan {
    type Item = &'a LaunchStep;
    type IntoIter = std::slice::Iter<'a, LaunchStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
