//! Unix filesystem operations

use crate::error::Result;
use crate::platform::traits::FilesystemOps;
use std::env;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub struct UnixFilesystem;

impl UnixFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemOps for UnixFilesystem {
    fn is_executable(&self, path: &Path) -> bool {
        match path.metadata() {
            Ok(metadata) if metadata.is_file() => metadata.permissions().mode() & 0o111 != 0,
            _ => false,
        }
    }

    fn find_command(&self, command: &str) -> Result<Option<PathBuf>> {
        if command.is_empty() || command.contains('/') {
            let path = PathBuf::from(command);
            return Ok(self.is_executable(&path).then_some(path));
        }

        let Some(path_env) = env::var_os("PATH") else {
            return Ok(None);
        };

        Ok(env::split_paths(&path_env)
            .map(|dir| dir.join(command))
            .find(|candidate| self.is_executable(candidate)))
    }
}
