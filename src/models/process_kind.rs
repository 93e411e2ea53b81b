//! Process Kind Definitions
//!
//! The three kinds of process a launch session starts, in launch order.

use serde::{Deserialize, Serialize};

/// Kind of process started by the launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessKind {
    /// The pre-built server executable
    Server,
    /// A compiled client executable
    NativeClient,
    /// A client run through a script interpreter
    ScriptClient,
}

impl ProcessKind {
    /// All kinds, in the order they are launched
    pub const LAUNCH_ORDER: [ProcessKind; 3] = [
        ProcessKind::Server,
        ProcessKind::NativeClient,
        ProcessKind::ScriptClient,
    ];

    /// Stable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessKind::Server => "server",
            ProcessKind::NativeClient => "native-client",
            ProcessKind::ScriptClient => "script-client",
        }
    }

    /// Stem used in status lines ("native client 1")
    pub fn label_stem(&self) -> &'static str {
        match self {
            ProcessKind::Server => "server",
            ProcessKind::NativeClient => "native client",
            ProcessKind::ScriptClient => "script client",
        }
    }

    /// Stem used in window titles ("Native Client 1")
    pub fn title_stem(&self) -> &'static str {
        match self {
            ProcessKind::Server => "Server",
            ProcessKind::NativeClient => "Native Client",
            ProcessKind::ScriptClient => "Script Client",
        }
    }

    pub fn is_client(&self) -> bool {
        !matches!(self, ProcessKind::Server)
    }
}
