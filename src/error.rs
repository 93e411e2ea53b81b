//! Error types and Result aliases for stagger

use std::fmt;
use std::path::PathBuf;

use crate::models::LaunchSession;

/// Result type alias for stagger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for stagger
#[derive(Debug)]
pub enum Error {
    // === Launch errors ===
    /// The terminal facility failed to open a window for a process
    TerminalLaunchFailed {
        label: String,
        command: String,
        reason: String,
    },

    /// No usable terminal emulator could be found on this host
    NoTerminalAvailable {
        platform: String,
    },

    /// A terminal emulator name was not recognised
    UnknownTerminal {
        name: String,
    },

    /// The requested terminal emulator is not supported on this platform
    TerminalNotSupported {
        name: String,
        platform: String,
    },

    /// Command validation failed
    CommandValidationFailed {
        command: String,
        reason: String,
    },

    /// Empty command
    EmptyCommand {
        label: String,
    },

    /// A launch failed part way through a session; `session` holds the
    /// launches made before it and is in the `Aborted` state
    LaunchAborted {
        session: Box<LaunchSession>,
        source: Box<Error>,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to save configuration file
    ConfigSaveFailed {
        path: PathBuf,
        reason: String,
    },

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    /// Failed to serialize configuration
    ConfigSerializationFailed {
        format: String,
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// JSON configuration could not be parsed
    Serde(serde_json::Error),

    /// TOML configuration could not be parsed
    Toml(toml::de::Error),
}

impl Error {
    /// Whether this error came from the terminal facility itself
    pub fn is_launch_failure(&self) -> bool {
        match self {
            Error::LaunchAborted { source, .. } => source.is_launch_failure(),
            other => matches!(
                other,
                Error::TerminalLaunchFailed { .. }
                    | Error::NoTerminalAvailable { .. }
                    | Error::TerminalNotSupported { .. }
            ),
        }
    }

    /// The partial session carried by [`Error::LaunchAborted`]
    pub fn session(&self) -> Option<&LaunchSession> {
        match self {
            Error::LaunchAborted { session, .. } => Some(&**session),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Launch errors
            Error::TerminalLaunchFailed {
                label,
                command,
                reason,
            } => {
                write!(
                    f,
                    "Failed to open a terminal for {} ('{}'): {}",
                    label, command, reason
                )
            }
            Error::NoTerminalAvailable { platform } => {
                write!(f, "No supported terminal emulator found on {}", platform)
            }
            Error::UnknownTerminal { name } => {
                write!(f, "Unknown terminal emulator: '{}'", name)
            }
            Error::TerminalNotSupported { name, platform } => {
                write!(f, "Terminal emulator '{}' is not supported on {}", name, platform)
            }
            Error::CommandValidationFailed { command, reason } => {
                write!(f, "Command validation failed for '{}': {}", command, reason)
            }
            Error::EmptyCommand { label } => {
                write!(f, "Command for {} cannot be empty", label)
            }
            Error::LaunchAborted { session, .. } => {
                write!(
                    f,
                    "Launch session {} aborted after {} launches",
                    session.short_id(),
                    session.launched_count()
                )
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigSaveFailed { path, reason } => {
                write!(f, "Failed to save config to '{}': {}", path.display(), reason)
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::ConfigSerializationFailed { format, reason } => {
                write!(f, "Failed to serialize config as {}: {}", format, reason)
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Failed to parse JSON config: {}", err),
            Error::Toml(err) => write!(f, "Failed to parse TOML config: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Serde(err) => Some(err),
            Error::Toml(err) => Some(err),
            Error::LaunchAborted { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}
