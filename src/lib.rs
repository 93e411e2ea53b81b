//! stagger - start a server and its clients, each in its own terminal window
//!
//! stagger opens one terminal window for a server and then one per client,
//! pausing between launches so the server has time to come up before
//! the clients connect. Launches are fire-and-forget: once a window is
//! open, stagger has nothing more to do with it.
//!
//! ## Module Organization
//!
//! - [`launcher`] - The launch plan and the [`Launcher`] that executes it
//! - [`platform`] - Opening terminal windows and finding programs per OS
//! - [`config`] - Configuration loading, defaults and validation
//! - [`models`] - Process specifications, terminal emulators, launch sessions
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> stagger::Result<()> {
//! // Load configuration from the default locations and launch everything
//! let session = stagger::launch_all().await?;
//! println!("launched {} processes", session.launched_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Launch Order
//!
//! 1. The server, followed by a warm-up pause (2 s by default)
//! 2. Each native client, each followed by a short pause (100 ms by default)
//! 3. Each script client, each followed by the same short pause
//!
//! The pauses only stagger start-up; nothing waits for a process to be ready.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod launcher;
pub mod models;
pub mod platform;

// Re-exports for core functionality
pub use config::loader::ConfigLoader;
pub use config::Config;
pub use error::{Error, Result};
pub use launcher::{LaunchPlan, Launcher};
pub use models::{LaunchSession, ProcessKind, ProcessSpec, TerminalEmulator};
pub use platform::Platform;

/// The current version of stagger from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Launch every process described by the configuration found in the
/// default locations
///
/// # Errors
///
/// Fails if the configuration is invalid, if no terminal emulator can be
/// found, or if opening any window fails. A failed window stops the
/// remaining launches.
pub async fn launch_all() -> Result<LaunchSession> {
    let config = ConfigLoader::load()?;
    launch_with_config(&config).await
}

/// Launch every process described by `config`
pub async fn launch_with_config(config: &Config) -> Result<LaunchSession> {
    config.validate()?;

    let plan = LaunchPlan::from_config(config);
    plan.validate()?;

    let emulator = Platform::resolve_terminal(config.terminal.emulator()?)?;
    let terminal = Platform::terminal(emulator, config.terminal.hold_open)?;

    Launcher::new(plan, terminal).launch_all().await
}
