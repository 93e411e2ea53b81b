//! Windows filesystem operations

use crate::error::Result;
use crate::platform::traits::FilesystemOps;
use std::env;
use std::path::{Path, PathBuf};

/// Extensions tried when a command is given without one
const EXECUTABLE_EXTENSIONS: [&str; 6] = ["", ".exe", ".bat", ".cmd", ".ps1", ".com"];

pub struct WindowsFilesystem;

impl WindowsFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemOps for WindowsFilesystem {
    fn is_executable(&self, path: &Path) -> bool {
        // On Windows, executability is decided by extension
        path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .map(|ext| {
                    matches!(
                        ext.to_lowercase().as_str(),
                        "exe" | "bat" | "cmd" | "ps1" | "com"
                    )
                })
                .unwrap_or(false)
    }

    fn find_command(&self, command: &str) -> Result<Option<PathBuf>> {
        let mut dirs = vec![PathBuf::from(".")];
        if let Some(path_env) = env::var_os("PATH") {
            dirs.extend(env::split_paths(&path_env));
        }

        for dir in dirs {
            for ext in EXECUTABLE_EXTENSIONS {
                let candidate = dir.join(format!("{}{}", command, ext));
                if self.is_executable(&candidate) {
                    return Ok(Some(candidate));
                }
            }
        }

        Ok(None)
    }
}
