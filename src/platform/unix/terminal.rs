//! Unix terminal operations
//!
//! Opens windows through an X11/Wayland terminal emulator, or through
//! Terminal.app on macOS.

use crate::error::{Error, Result};
use crate::models::TerminalEmulator;
use crate::platform::traits::TerminalOps;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

pub struct UnixTerminal {
    emulator: TerminalEmulator,
    hold_open: bool,
}

impl UnixTerminal {
    pub fn new(emulator: TerminalEmulator, hold_open: bool) -> Self {
        Self {
            emulator,
            hold_open,
        }
    }

    fn build_command(&self, command: &str, title: &str) -> Command {
        let mut cmd = Command::new(self.emulator.program());
        cmd.args(self.emulator.build_args(title, command, self.hold_open))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            // Own process group, so a Ctrl+C in our terminal leaves the window alone
            .process_group(0);
        cmd
    }
}

#[async_trait::async_trait]
impl TerminalOps for UnixTerminal {
    fn name(&self) -> &str {
        self.emulator.as_str()
    }

    async fn open_terminal(&self, command: &str, title: &str) -> Result<Option<u32>> {
        debug!(
            "Opening {} window '{}' running: {}",
            self.emulator, title, command
        );

        let child = tokio::process::Command::from(self.build_command(command, title))
            .kill_on_drop(false)
            .spawn()
            .map_err(|e| Error::TerminalLaunchFailed {
                label: title.to_string(),
                command: command.to_string(),
                reason: format!("{}: {}", self.emulator.program(), e),
            })?;

        // Dropping the handle does not kill the child; tokio reaps it
        Ok(child.id())
    }
}
