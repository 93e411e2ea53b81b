//! Platform-specific operation traits
//!
//! These traits define the interface for platform-specific operations,
//! allowing for clean abstraction and easier testing.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Opens new terminal windows
#[async_trait::async_trait]
pub trait TerminalOps: Send + Sync {
    /// Name of the terminal host, for logs
    fn name(&self) -> &str;

    /// Open a new window titled `title` running `command`.
    ///
    /// Returns once the terminal host has been spawned, without waiting
    /// for `command` to start, produce output or exit. The result carries
    /// the host's PID when the OS reports one.
    async fn open_terminal(&self, command: &str, title: &str) -> Result<Option<u32>>;
}

/// Platform-specific filesystem operations
pub trait FilesystemOps: Send + Sync {
    /// Check if a file is executable
    fn is_executable(&self, path: &Path) -> bool;

    /// Find a command in PATH
    fn find_command(&self, command: &str) -> Result<Option<PathBuf>>;

    /// Whether `program` names something that can be run, either a path to
    /// an executable file or a command on PATH
    fn is_runnable(&self, program: &str) -> bool {
        let path = Path::new(program);
        if path.components().count() > 1 || path.is_absolute() {
            return self.is_executable(path);
        }
        matches!(self.find_command(program), Ok(Some(_)))
    }
}

/// Platform-specific path operations
pub trait PathOps: Send + Sync {
    /// Get configuration directory
    fn config_dir(&self) -> Result<PathBuf>;
}
