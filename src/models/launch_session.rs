//! Launch Session Model
//!
//! One run of the launcher from its first launch to completion or
//! failure. Nothing here is persisted; the session only lives as long
//! as the process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ProcessSpec;

/// State of a launch session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Launches are still being issued
    #[default]
    Running,
    /// Every planned launch was issued
    Completed,
    /// The launch at `failed_step` (0-based) failed and the rest were skipped
    Aborted { failed_step: usize },
}

/// A process that was handed to a terminal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub spec: ProcessSpec,
    /// PID of the terminal host process, when the OS reports one
    pub pid: Option<u32>,
    pub launched_at: DateTime<Utc>,
}

/// Ephemeral record of one launcher run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub state: SessionState,
    pub records: Vec<LaunchRecord>,
}

impl LaunchSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            state: SessionState::Running,
            records: Vec::new(),
        }
    }

    /// Record a successful launch
    pub fn record_launch(&mut self, spec: ProcessSpec, pid: Option<u32>) {
        self.records.push(LaunchRecord {
            spec,
            pid,
            launched_at: Utc::now(),
        });
    }

    pub fn mark_completed(&mut self) {
        self.state = SessionState::Completed;
        self.finished_at = Some(Utc::now());
    }

    pub fn mark_aborted(&mut self, failed_step: usize) {
        self.state = SessionState::Aborted { failed_step };
        self.finished_at = Some(Utc::now());
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed)
    }

    pub fn launched_count(&self) -> usize {
        self.records.len()
    }

    /// Labels of launched processes, in launch order
    pub fn launched_labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.spec.label.as_str()).collect()
    }

    /// Short id used in log spans
    pub fn short_id(&self) -> String {
        self.id.simple().to_string().chars().take(8).collect()
    }

    /// Wall-clock duration of the session, if it has finished
    pub fn duration(&self) -> Option<std::time::Duration> {
        self.finished_at
            .and_then(|end| end.signed_duration_since(self.started_at).to_std().ok())
    }
}

impl Default for LaunchSession {
    fn default() -> Self {
        Self::new()
    }
}
