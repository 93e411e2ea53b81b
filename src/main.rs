//! stagger - start a server and its clients in separate terminal windows
//!
//! With no arguments this opens the server, waits two seconds, then opens
//! one native client and one script client 100 ms apart.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info, warn};

use stagger::config::loader::LoadOptions;
use stagger::config::ConfigOverrides;
use stagger::launcher::check_plan;
use stagger::{Config, ConfigLoader, LaunchPlan, Launcher, Platform, TerminalEmulator};

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(
    name = "stagger",
    version,
    about = "Start a server and its clients, each in its own terminal window"
)]
struct Cli {
    /// Path to a configuration file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of native clients to start
    #[arg(short = 'n', long)]
    native_clients: Option<usize>,

    /// Number of script clients to start
    #[arg(short = 's', long)]
    script_clients: Option<usize>,

    /// Command line for the server
    #[arg(long, value_name = "CMD")]
    server: Option<String>,

    /// Command line for each native client
    #[arg(long, value_name = "CMD")]
    native_client: Option<String>,

    /// Command line for each script client
    #[arg(long, value_name = "CMD")]
    script_client: Option<String>,

    /// Pause after the server is launched (ms)
    #[arg(long)]
    warmup_ms: Option<u64>,

    /// Pause after each client is launched (ms)
    #[arg(long)]
    client_delay_ms: Option<u64>,

    /// Terminal emulator to open windows with (e.g. xterm, kitty, cmd)
    #[arg(short, long)]
    terminal: Option<String>,

    /// Close each window when its command exits
    #[arg(long)]
    no_hold: bool,

    /// Print the launch plan and exit without opening any window
    #[arg(long)]
    dry_run: bool,

    /// Warn about commands whose program cannot be found
    #[arg(long)]
    check: bool,

    /// List the terminal emulators found on this host and exit
    #[arg(long)]
    list_terminals: bool,

    /// Write the effective configuration to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            server_command: self.server.clone(),
            native_client_command: self.native_client.clone(),
            script_client_command: self.script_client.clone(),
            native_clients: self.native_clients,
            script_clients: self.script_clients,
            warmup_ms: self.warmup_ms,
            client_delay_ms: self.client_delay_ms,
            terminal: self.terminal.clone(),
            no_hold: self.no_hold,
        }
    }
}

fn init_logging(debug: bool) {
    let debug_env = env::var("STAGGER_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let log_level = if debug || debug_env { "debug" } else { "info" };

    // stdout carries the status lines only
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn load_configuration(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    // Overrides are applied first, then the result is validated
    let options = LoadOptions { validate: false };

    let mut config = match &cli.config {
        Some(path) => loader
            .load_from_path(path, &options)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => loader
            .load_with_options(options)
            .context("loading configuration")?,
    };

    match loader.current_path() {
        Some(path) => debug!("Configuration file: {}", path.display()),
        None => debug!("No configuration file, using defaults"),
    }

    config.apply_overrides(&cli.overrides());
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn list_terminals() {
    let detected = Platform::detect_terminals();
    if detected.is_empty() {
        println!("No supported terminal emulator found");
        return;
    }
    for (i, emulator) in detected.iter().enumerate() {
        let marker = if i == 0 { " (default)" } else { "" };
        println!("{}{}", emulator, marker);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.list_terminals {
        list_terminals();
        return Ok(());
    }

    let config = load_configuration(&cli)?;

    if let Some(path) = &cli.write_config {
        ConfigLoader::new()
            .save_to_path(&config, path)
            .with_context(|| format!("writing configuration to {}", path.display()))?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let plan = LaunchPlan::from_config(&config);
    plan.validate().context("invalid launch plan")?;

    if cli.check {
        let issues = check_plan(&plan, Platform::filesystem().as_ref());
        for issue in &issues {
            warn!("{}", issue);
        }
    }

    if cli.dry_run {
        for line in plan.describe() {
            println!("{}", line);
        }
        println!(
            "{} launches, {} ms of pauses",
            plan.len(),
            plan.total_delay().as_millis()
        );
        return Ok(());
    }

    let explicit: Option<TerminalEmulator> = config.terminal.emulator()?;
    let emulator = Platform::resolve_terminal(explicit).context("choosing a terminal emulator")?;
    let terminal = Platform::terminal(emulator, config.terminal.hold_open)?;
    debug!("Using terminal emulator {}", emulator);

    let session = match Launcher::new(plan, terminal).launch_all().await {
        Ok(session) => session,
        Err(e) => {
            if let Some(partial) = e.session().filter(|s| s.launched_count() > 0) {
                warn!(
                    "Windows already opened are left running: {}",
                    partial.launched_labels().join(", ")
                );
            }
            return Err(e.into());
        }
    };
    info!(
        "Session {} finished in {} ms: {} processes launched",
        session.short_id(),
        session.duration().unwrap_or_default().as_millis(),
        session.launched_count()
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    info!("Starting {} v{}", stagger::NAME, stagger::VERSION);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
