//! The launcher: starts every process of a [`LaunchPlan`] in its own
//! terminal window, in plan order, pausing after each launch.
//!
//! Launches are fire-and-forget. The launcher never waits on, watches or
//! cleans up a process it started. A failure to open a window aborts
//! the rest of the plan and is returned to the caller as
//! [`Error::LaunchAborted`], together with the partial session; windows
//! that are already open stay open.

pub mod plan;
pub mod preflight;

pub use plan::{LaunchPlan, LaunchStep};
pub use preflight::{check_plan, PreflightIssue};

use std::io::Write;

use tracing::Instrument;

use crate::error::{Error, Result};
use crate::models::{LaunchSession, ProcessSpec};
use crate::platform::TerminalOps;

/// Where status lines are written
pub type StatusSink = Box<dyn Write + Send>;

/// Starts the processes of one plan
pub struct Launcher {
    plan: LaunchPlan,
    terminal: Box<dyn TerminalOps>,
    status: StatusSink,
}

impl Launcher {
    /// Create a launcher that prints status lines to stdout
    pub fn new(plan: LaunchPlan, terminal: Box<dyn TerminalOps>) -> Self {
        Self {
            plan,
            terminal,
            status: Box::new(std::io::stdout()),
        }
    }

    /// Send status lines somewhere other than stdout
    pub fn with_status_sink(mut self, sink: StatusSink) -> Self {
        self.status = sink;
        self
    }

    /// Launch every process in the plan.
    ///
    /// For each step the status line is written and flushed before the
    /// window is opened, and the step's pause follows the launch. The
    /// first failure stops the sequence: later steps print nothing, open
    /// nothing and do not sleep.
    pub async fn launch_all(&mut self) -> Result<LaunchSession> {
        let session = LaunchSession::new();
        let span = info_span!("launch", session = %session.short_id());
        self.run(session).instrument(span).await
    }

    async fn run(&mut self, mut session: LaunchSession) -> Result<LaunchSession> {
        info!(
            "Launching {} processes via {}",
            self.plan.len(),
            self.terminal.name()
        );

        for index in 0..self.plan.len() {
            let step = self.plan.steps()[index].clone();

            self.print_status(&step.spec)?;

            match self.open_terminal(&step.spec).await {
                Ok(pid) => {
                    debug!(
                        "{} launched (kind {}, pid {:?})",
                        step.spec.label,
                        step.spec.kind.as_str(),
                        pid
                    );
                    session.record_launch(step.spec, pid);
                }
                Err(e) => {
                    session.mark_aborted(index);
                    error!(
                        "Launch of {} failed after {} of {} launches: {}",
                        step.spec.label,
                        session.launched_count(),
                        self.plan.len(),
                        e
                    );
                    return Err(Error::LaunchAborted {
                        session: Box::new(session),
                        source: Box::new(e),
                    });
                }
            }

            if !step.delay_after.is_zero() {
                tokio::time::sleep(step.delay_after).await;
            }
        }

        session.mark_completed();
        info!("All {} processes launched", session.launched_count());
        Ok(session)
    }

    /// Open a terminal window for one process, without waiting on it
    pub async fn open_terminal(&self, spec: &ProcessSpec) -> Result<Option<u32>> {
        self.terminal
            .open_terminal(&spec.command, &spec.title)
            .await
            .map_err(|e| match e {
                Error::TerminalLaunchFailed {
                    command, reason, ..
                } => Error::TerminalLaunchFailed {
                    label: spec.label.clone(),
                    command,
                    reason,
                },
                other => other,
            })
    }

    fn print_status(&mut self, spec: &ProcessSpec) -> Result<()> {
        writeln!(self.status, "{}", spec.status_line())?;
        self.status.flush()?;
        Ok(())
    }
}
