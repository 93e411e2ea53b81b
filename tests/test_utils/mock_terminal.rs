//! Mock Terminal Implementation for Testing
//!
//! `MockTerminal` records every window request in an [`EventLog`]. The
//! same log doubles as the launcher's status sink, so a test can check
//! the interleaving of status lines and window requests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use stagger::error::{Error, Result};
use stagger::launcher::StatusSink;
use stagger::platform::TerminalOps;
use tokio::time::Instant;

/// Something the launcher did, in the order it did it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchEvent {
    /// A complete status line, without its newline
    Status(String),
    /// A window request
    Spawn {
        title: String,
        command: String,
        at: Instant,
    },
}

/// Shared, ordered record of launcher activity
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<LaunchEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: LaunchEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<LaunchEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn status_lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                LaunchEvent::Status(line) => Some(line),
                LaunchEvent::Spawn { .. } => None,
            })
            .collect()
    }

    /// Window titles in request order
    pub fn spawned_titles(&self) -> Vec<String> {
        self.spawns().into_iter().map(|(title, _, _)| title).collect()
    }

    /// `(title, command, time)` of each window request
    pub fn spawns(&self) -> Vec<(String, String, Instant)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                LaunchEvent::Spawn { title, command, at } => Some((title, command, at)),
                LaunchEvent::Status(_) => None,
            })
            .collect()
    }

    /// A status sink that appends each written line to this log
    pub fn status_sink(&self) -> StatusSink {
        Box::new(LineWriter {
            log: self.clone(),
            pending: Vec::new(),
        })
    }
}

/// Splits written bytes into lines and logs each complete one
struct LineWriter {
    log: EventLog,
    pending: Vec<u8>,
}

impl Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            if byte == b'\n' {
                let line = String::from_utf8_lossy(&self.pending).into_owned();
                self.log.push(LaunchEvent::Status(line));
                self.pending.clear();
            } else {
                self.pending.push(byte);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Terminal host that logs requests instead of opening windows
pub struct MockTerminal {
    log: EventLog,
    fail_at: Option<usize>,
    requests: Mutex<usize>,
}

impl MockTerminal {
    /// A terminal whose every request succeeds
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            fail_at: None,
            requests: Mutex::new(0),
        }
    }

    /// A terminal that fails the request with 0-based index `index`
    pub fn failing_at(log: EventLog, index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::new(log)
        }
    }

    /// Number of requests received, failed ones included
    pub fn requests(&self) -> usize {
        *self.requests.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl TerminalOps for MockTerminal {
    fn name(&self) -> &str {
        "mock"
    }

    async fn open_terminal(&self, command: &str, title: &str) -> Result<Option<u32>> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            let index = *requests;
            *requests += 1;
            index
        };

        if self.fail_at == Some(index) {
            return Err(Error::TerminalLaunchFailed {
                label: title.to_string(),
                command: command.to_string(),
                reason: "mock terminal refused the window".to_string(),
            });
        }

        self.log.push(LaunchEvent::Spawn {
            title: title.to_string(),
            command: command.to_string(),
            at: Instant::now(),
        });
        Ok(Some(4000 + index as u32))
    }
}
