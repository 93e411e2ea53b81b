//! Configuration management for stagger
//!
//! Which processes to start, how many clients of each kind, how long to
//! pause between launches, and which terminal host opens the windows.
//! Every section has defaults, so a missing file or a partial file still
//! yields a complete configuration.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::{validate_command, ProcessKind, TerminalEmulator};

/// Upper bound on clients of one kind
pub const MAX_CLIENTS_PER_KIND: usize = 64;

/// Upper bound on the warm-up delay (10 minutes)
pub const MAX_WARMUP_MS: u64 = 600_000;

/// Upper bound on the delay after each client (1 minute)
pub const MAX_CLIENT_DELAY_MS: u64 = 60_000;

/// Main configuration structure for stagger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// The server process
    pub server: ServerConfig,

    /// Compiled clients
    pub native_client: ClientConfig,

    /// Interpreted clients
    pub script_client: ClientConfig,

    /// Delays between launches
    pub timing: TimingConfig,

    /// Terminal host selection
    pub terminal: TerminalConfig,
}

/// Server process configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Command line run in the server window
    pub command: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            command: default_command(ProcessKind::Server),
        }
    }
}

/// Configuration shared by both client kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Command line run in each client window; the platform default for
    /// the client kind when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// How many clients of this kind to start
    pub count: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            command: None,
            count: 1,
        }
    }
}

impl ClientConfig {
    /// Command for a client of `kind`, falling back to the platform default
    pub fn command_for(&self, kind: ProcessKind) -> String {
        self.command
            .clone()
            .unwrap_or_else(|| default_command(kind))
    }
}

/// Delays used to stagger start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Pause after the server is launched, in milliseconds
    pub warmup_ms: u64,

    /// Pause after each client is launched, in milliseconds
    pub client_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            warmup_ms: 2000,
            client_delay_ms: 100,
        }
    }
}

impl TimingConfig {
    pub fn warmup(&self) -> Duration {
        Duration::from_millis(self.warmup_ms)
    }

    pub fn client_delay(&self) -> Duration {
        Duration::from_millis(self.client_delay_ms)
    }
}

/// Terminal host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Emulator name; detected when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emulator: Option<String>,

    /// Keep each window open after its command exits
    pub hold_open: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            emulator: None,
            hold_open: true,
        }
    }
}

impl TerminalConfig {
    /// The configured emulator, if any
    pub fn emulator(&self) -> Result<Option<TerminalEmulator>> {
        match self.emulator.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => TerminalEmulator::from_string(name)
                .map(Some)
                .ok_or_else(|| Error::UnknownTerminal {
                    name: name.to_string(),
                }),
        }
    }
}

/// Default command line for each kind of process on this platform
pub fn default_command(kind: ProcessKind) -> String {
    match kind {
        ProcessKind::Server if cfg!(windows) => "server.exe".to_string(),
        ProcessKind::Server => "./server".to_string(),
        ProcessKind::NativeClient if cfg!(windows) => "client.exe".to_string(),
        ProcessKind::NativeClient => "./client".to_string(),
        ProcessKind::ScriptClient => "node node_client.js".to_string(),
    }
}

/// Values that take precedence over anything read from disk
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub server_command: Option<String>,
    pub native_client_command: Option<String>,
    pub script_client_command: Option<String>,
    pub native_clients: Option<usize>,
    pub script_clients: Option<usize>,
    pub warmup_ms: Option<u64>,
    pub client_delay_ms: Option<u64>,
    pub terminal: Option<String>,
    pub no_hold: bool,
}

impl Config {
    /// Client section for `kind`; `None` for the server
    pub fn client(&self, kind: ProcessKind) -> Option<&ClientConfig> {
        match kind {
            ProcessKind::Server => None,
            ProcessKind::NativeClient => Some(&self.native_client),
            ProcessKind::ScriptClient => Some(&self.script_client),
        }
    }

    /// Apply command-line overrides on top of this configuration
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(command) = &overrides.server_command {
            self.server.command = command.clone();
        }
        if let Some(command) = &overrides.native_client_command {
            self.native_client.command = Some(command.clone());
        }
        if let Some(command) = &overrides.script_client_command {
            self.script_client.command = Some(command.clone());
        }
        if let Some(count) = overrides.native_clients {
            self.native_client.count = count;
        }
        if let Some(count) = overrides.script_clients {
            self.script_client.count = count;
        }
        if let Some(ms) = overrides.warmup_ms {
            self.timing.warmup_ms = ms;
        }
        if let Some(ms) = overrides.client_delay_ms {
            self.timing.client_delay_ms = ms;
        }
        if let Some(name) = &overrides.terminal {
            self.terminal.emulator = Some(name.clone());
        }
        if overrides.no_hold {
            self.terminal.hold_open = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.command.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "server.command".to_string(),
                reason: "Server command cannot be empty".to_string(),
            });
        }
        validate_command(&self.server.command).map_err(|e| Error::ConfigValidationFailed {
            field: "server.command".to_string(),
            reason: e.to_string(),
        })?;

        for (field, section) in [
            ("native_client", &self.native_client),
            ("script_client", &self.script_client),
        ] {
            if let Some(command) = &section.command {
                if command.trim().is_empty() {
                    return Err(Error::ConfigValidationFailed {
                        field: format!("{}.command", field),
                        reason: "Client command cannot be empty".to_string(),
                    });
                }
                validate_command(command).map_err(|e| Error::ConfigValidationFailed {
                    field: format!("{}.command", field),
                    reason: e.to_string(),
                })?;
            }

            if section.count > MAX_CLIENTS_PER_KIND {
                return Err(Error::ConfigValidationFailed {
                    field: format!("{}.count", field),
                    reason: format!("Client count cannot exceed {}", MAX_CLIENTS_PER_KIND),
                });
            }
        }

        if self.timing.warmup_ms > MAX_WARMUP_MS {
            return Err(Error::ConfigValidationFailed {
                field: "timing.warmup_ms".to_string(),
                reason: "Warm-up delay cannot exceed 10 minutes (600000 ms)".to_string(),
            });
        }

        if self.timing.client_delay_ms > MAX_CLIENT_DELAY_MS {
            return Err(Error::ConfigValidationFailed {
                field: "timing.client_delay_ms".to_string(),
                reason: "Client delay cannot exceed 1 minute (60000 ms)".to_string(),
            });
        }

        self.terminal
            .emulator()
            .map_err(|e| Error::ConfigValidationFailed {
                field: "terminal.emulator".to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
