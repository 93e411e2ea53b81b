//! Core data models for stagger
//!
//! This module contains the domain entities of a launch: the kinds of
//! process started, their specifications, the terminal hosts that open
//! windows for them, and the session that records a run.

pub mod launch_session;
pub mod process_kind;
pub mod process_spec;
pub mod terminal_emulator;

// Re-exports for convenience
pub use launch_session::{LaunchRecord, LaunchSession, SessionState};
pub use process_kind::ProcessKind;
pub use process_spec::{validate_command, ProcessSpec};
pub use terminal_emulator::TerminalEmulator;
