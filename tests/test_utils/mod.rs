//! Test Utilities and Mocks
//!
//! Shared helpers for the launcher tests: a terminal host that records
//! window requests instead of opening windows, and configuration fixtures.

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_terminal;

// Re-exports for convenience
pub use fixtures::{config_with_clients, instant_config};
pub use mock_terminal::{EventLog, LaunchEvent, MockTerminal};
