//! Integration Tests for the Launch Sequence
//!
//! Order of launches, status lines and pauses for a full run, with a
//! mock terminal host and paused tokio time.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use std::time::Duration;

use stagger::{LaunchPlan, Launcher};
use test_utils::{config_with_clients, EventLog, LaunchEvent, MockTerminal};
use tokio::time::Instant;

fn launcher_for(native: usize, script: usize, log: &EventLog) -> Launcher {
    let plan = LaunchPlan::from_config(&config_with_clients(native, script));
    Launcher::new(plan, Box::new(MockTerminal::new(log.clone())))
        .with_status_sink(log.status_sink())
}

#[tokio::test(start_paused = true)]
async fn test_default_counts_launch_three_windows() {
    let log = EventLog::new();
    let mut launcher = launcher_for(1, 1, &log);

    let start = Instant::now();
    let session = launcher.launch_all().await.unwrap();
    let elapsed = start.elapsed();

    assert!(session.is_completed());
    assert_eq!(
        log.status_lines(),
        vec![
            "[RUNNER] Starting server...",
            "[RUNNER] Starting native client 1...",
            "[RUNNER] Starting script client 1...",
        ]
    );
    assert_eq!(
        log.spawned_titles(),
        vec!["Server", "Native Client 1", "Script Client 1"]
    );

    // 2 s warm-up plus 100 ms after each of the two clients
    assert!(elapsed >= Duration::from_millis(2200), "{:?}", elapsed);
    assert!(elapsed < Duration::from_millis(2250), "{:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_server_only_still_waits_warmup() {
    let log = EventLog::new();
    let mut launcher = launcher_for(0, 0, &log);

    let start = Instant::now();
    let session = launcher.launch_all().await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(session.launched_labels(), vec!["server"]);
    assert_eq!(log.status_lines(), vec!["[RUNNER] Starting server..."]);
    assert_eq!(log.spawns().len(), 1);
    assert!(elapsed >= Duration::from_millis(2000), "{:?}", elapsed);
    assert!(elapsed < Duration::from_millis(2050), "{:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_status_line_precedes_each_spawn() {
    let log = EventLog::new();
    let mut launcher = launcher_for(2, 2, &log);
    launcher.launch_all().await.unwrap();

    let events = log.events();
    assert_eq!(events.len(), 10);
    for pair in events.chunks(2) {
        match pair {
            [LaunchEvent::Status(line), LaunchEvent::Spawn { title, .. }] => {
                assert!(line.starts_with("[RUNNER] Starting "));
                assert_eq!(
                    line.to_lowercase(),
                    format!("[runner] starting {}...", title.to_lowercase())
                );
            }
            other => panic!("status line and spawn out of order: {:?}", other),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_pauses_between_launches() {
    let log = EventLog::new();
    let mut launcher = launcher_for(2, 1, &log);
    launcher.launch_all().await.unwrap();

    let times: Vec<Instant> = log.spawns().into_iter().map(|(_, _, at)| at).collect();
    let gaps: Vec<Duration> = times.windows(2).map(|w| w[1] - w[0]).collect();

    assert_eq!(gaps.len(), 3);
    assert!(gaps[0] >= Duration::from_millis(2000) && gaps[0] < Duration::from_millis(2010));
    for gap in &gaps[1..] {
        assert!(*gap >= Duration::from_millis(100) && *gap < Duration::from_millis(110));
    }
}

#[tokio::test(start_paused = true)]
async fn test_clients_of_each_kind_run_their_own_command() {
    let log = EventLog::new();
    let mut launcher = launcher_for(2, 3, &log);
    let session = launcher.launch_all().await.unwrap();

    assert_eq!(session.launched_count(), 6);
    let commands: Vec<String> = log.spawns().into_iter().map(|(_, cmd, _)| cmd).collect();
    assert_eq!(commands[0], "./server");
    assert!(commands[1..3].iter().all(|c| c == "./client"));
    assert!(commands[3..].iter().all(|c| c == "node node_client.js"));
    assert_eq!(
        session.launched_labels(),
        vec![
            "server",
            "native client 1",
            "native client 2",
            "script client 1",
            "script client 2",
            "script client 3",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_timing_is_honoured() {
    let log = EventLog::new();
    let mut config = config_with_clients(1, 0);
    config.timing.warmup_ms = 500;
    config.timing.client_delay_ms = 0;

    let mut launcher = Launcher::new(
        LaunchPlan::from_config(&config),
        Box::new(MockTerminal::new(log.clone())),
    )
    .with_status_sink(log.status_sink());

    let start = Instant::now();
    launcher.launch_all().await.unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(500), "{:?}", elapsed);
    assert!(elapsed < Duration::from_millis(550), "{:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn test_records_carry_reported_pids() {
    let log = EventLog::new();
    let mut launcher = launcher_for(1, 1, &log);
    let session = launcher.launch_all().await.unwrap();

    let pids: Vec<Option<u32>> = session.records.iter().map(|r| r.pid).collect();
    assert_eq!(pids, vec![Some(4000), Some(4001), Some(4002)]);
    assert!(session.finished_at.is_some());
}
