//! Windows terminal operations
//!
//! Opens a new console window through `cmd /C start`, or a new tab in
//! Windows Terminal.

use crate::error::{Error, Result};
use crate::models::TerminalEmulator;
use crate::platform::traits::TerminalOps;
use std::os::windows::process::CommandExt;
use std::process::Command;

pub struct Win32Terminal {
    emulator: TerminalEmulator,
    hold_open: bool,
}

impl Win32Terminal {
    pub fn new(emulator: TerminalEmulator, hold_open: bool) -> Self {
        Self {
            emulator,
            hold_open,
        }
    }

    fn build_command(&self, command: &str, title: &str) -> Command {
        let mut cmd = Command::new(self.emulator.program());
        let args = self.emulator.build_args(title, command, self.hold_open);

        if self.emulator == TerminalEmulator::WindowsConsole {
            // cmd.exe parses its own command line; pass it through untouched
            for arg in &args {
                cmd.raw_arg(arg);
            }
        } else {
            cmd.args(&args);
        }

        cmd
    }
}

#[async_trait::async_trait]
impl TerminalOps for Win32Terminal {
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

        Ok(child.id())
    }
}
