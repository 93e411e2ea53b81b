//! Process Specification Model
//!
//! A process specification pairs the label shown in status lines with
//! the command line executed inside the new terminal window.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProcessKind;
use crate::error::{Error, Result};

/// One process to launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// What kind of process this is
    pub kind: ProcessKind,

    /// 1-based position among processes of the same kind (clients only)
    pub ordinal: Option<usize>,

    /// Label used in status lines
    pub label: String,

    /// Title given to the terminal window
    pub title: String,

    /// Command line run inside the terminal
    pub command: String,
}

impl ProcessSpec {
    /// Specification for the server process
    pub fn server(command: impl Into<String>) -> Self {
        Self {
            kind: ProcessKind::Server,
            ordinal: None,
            label: ProcessKind::Server.label_stem().to_string(),
            title: ProcessKind::Server.title_stem().to_string(),
            command: command.into(),
        }
    }

    /// Specification for the `ordinal`-th client of `kind`
    pub fn client(kind: ProcessKind, ordinal: usize, command: impl Into<String>) -> Self {
        Self {
            kind,
            ordinal: Some(ordinal),
            label: format!("{} {}", kind.label_stem(), ordinal),
            title: format!("{} {}", kind.title_stem(), ordinal),
            command: command.into(),
        }
    }

    /// Line printed right before this process is launched
    pub fn status_line(&self) -> String {
        format!("[RUNNER] Starting {}...", self.label)
    }

    /// First word of the command, i.e. the program the terminal will run
    pub fn program(&self) -> Option<&str> {
        self.command.split_whitespace().next()
    }

    pub fn validate(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(Error::EmptyCommand {
                label: self.label.clone(),
            });
        }
        validate_command(&self.command)
    }
}

impl fmt::Display for ProcessSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.command)
    }
}

/// Maximum accepted command length in bytes
pub const MAX_COMMAND_LEN: usize = 8191;

/// Check a command line can be handed to a terminal at all.
///
/// This does not check that the program exists; a missing program only
/// shows up inside the opened window.
pub fn validate_command(command: &str) -> Result<()> {
    if command.contains('\0') {
        return Err(Error::CommandValidationFailed {
            command: command.replace('\0', "\\0"),
            reason: "command contains a NUL byte".to_string(),
        });
    }

    // cmd.exe caps its command line at 8191 characters
    if command.len() > MAX_COMMAND_LEN {
        return Err(Error::CommandValidationFailed {
            command: format!("{}...", command.chars().take(32).collect::<String>()),
            reason: format!("command exceeds {} bytes", MAX_COMMAND_LEN),
        });
    }

    if command.contains('\n') || command.contains('\r') {
        return Err(Error::CommandValidationFailed {
            command: command.to_string(),
            reason: "command must be a single line".to_string(),
        });
    }

    Ok(())
}
