//! Platform abstraction layer
//!
//! This module provides a unified interface for platform-specific operations,
//! abstracting away differences between Unix, Windows, and other platforms.

mod traits;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

pub use traits::*;

use crate::error::{Error, Result};
use crate::models::TerminalEmulator;

/// Environment variable naming the terminal emulator to use
pub const TERMINAL_ENV_VAR: &str = "STAGGER_TERMINAL";

/// Platform implementation factory
pub struct Platform;

impl Platform {
    /// Get the platform-specific filesystem operations
    pub fn filesystem() -> Box<dyn FilesystemOps> {
        #[cfg(unix)]
        {
            Box::new(unix::UnixFilesystem::new())
        }

        #[cfg(windows)]
        {
            Box::new(windows::WindowsFilesystem::new())
        }

        #[cfg(not(any(unix, windows)))]
        {
            compile_error!("Unsupported platform");
        }
    }

    /// Get the platform-specific path operations
    pub fn paths() -> Box<dyn PathOps> {
        #[cfg(unix)]
        {
            Box::new(unix::UnixPaths::new())
        }

        #[cfg(windows)]
        {
            Box::new(windows::WindowsPaths::new())
        }

        #[cfg(not(any(unix, windows)))]
        {
            compile_error!("Unsupported platform");
        }
    }

    /// Get a terminal opener driving `emulator`
    pub fn terminal(emulator: TerminalEmulator, hold_open: bool) -> Result<Box<dyn TerminalOps>> {
        if !emulator.supported_on_current_platform() {
            return Err(Error::TerminalNotSupported {
                name: emulator.to_string(),
                platform: std::env::consts::OS.to_string(),
            });
        }

        #[cfg(unix)]
        {
            Ok(Box::new(unix::UnixTerminal::new(emulator, hold_open)))
        }

        #[cfg(windows)]
        {
            Ok(Box::new(windows::Win32Terminal::new(emulator, hold_open)))
        }

        #[cfg(not(any(unix, windows)))]
        {
            compile_error!("Unsupported platform");
        }
    }

    /// Emulators installed on this host, most preferred first
    pub fn detect_terminals() -> Vec<TerminalEmulator> {
        let fs_ops = Self::filesystem();
        TerminalEmulator::detection_candidates()
            .into_iter()
            .filter(|emulator| {
                emulator.is_builtin() || matches!(fs_ops.find_command(emulator.program()), Ok(Some(_)))
            })
            .collect()
    }

    /// Pick the emulator to use.
    ///
    /// An explicit choice wins, then `$STAGGER_TERMINAL`, then the first
    /// emulator detected on this host.
    pub fn resolve_terminal(explicit: Option<TerminalEmulator>) -> Result<TerminalEmulator> {
        if let Some(emulator) = explicit {
            debug!("Using configured terminal emulator: {}", emulator);
            return Ok(emulator);
        }

        if let Ok(name) = std::env::var(TERMINAL_ENV_VAR) {
            if !name.trim().is_empty() {
                let emulator = TerminalEmulator::from_string(&name)
                    .ok_or(Error::UnknownTerminal { name })?;
                debug!("Using terminal emulator from ${}: {}", TERMINAL_ENV_VAR, emulator);
                return Ok(emulator);
            }
        }

        let detected = Self::detect_terminals();
        debug!("Detected terminal emulators: {:?}", detected);
        detected
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoTerminalAvailable {
                platform: std::env::consts::OS.to_string(),
            })
    }
}
