//! Terminal Emulator Definitions
//!
//! Every terminal host stagger knows how to drive, together with the
//! argument vector each one needs to open a titled window running a
//! command.

use serde::{Deserialize, Serialize};

/// Terminal host used to open new windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalEmulator {
    /// Debian alternatives entry pointing at the preferred emulator
    XTerminalEmulator,
    /// GNOME Terminal
    GnomeTerminal,
    /// KDE Konsole
    Konsole,
    /// Xfce Terminal
    Xfce4Terminal,
    /// kitty
    Kitty,
    /// Alacritty
    Alacritty,
    /// WezTerm
    WezTerm,
    /// xterm
    Xterm,
    /// macOS Terminal.app, driven through osascript
    MacTerminal,
    /// Windows Terminal (`wt`)
    WindowsTerminal,
    /// A new `cmd.exe` console window
    WindowsConsole,
}

/// Emulators tried on Linux and other Unixes, most preferred first.
///
/// `x-terminal-emulator` is driven with xterm's `-T`/`-e` flags, which only
/// works when the alternative it points at accepts them, so it comes after
/// every emulator with its own argument set.
const UNIX_CANDIDATES: [TerminalEmulator; 8] = [
    TerminalEmulator::GnomeTerminal,
    TerminalEmulator::Konsole,
    TerminalEmulator::Xfce4Terminal,
    TerminalEmulator::Kitty,
    TerminalEmulator::Alacritty,
    TerminalEmulator::WezTerm,
    TerminalEmulator::XTerminalEmulator,
    TerminalEmulator::Xterm,
];

impl TerminalEmulator {
    /// Get a string representation of the emulator
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalEmulator::XTerminalEmulator => "x-terminal-emulator",
            TerminalEmulator::GnomeTerminal => "gnome-terminal",
            TerminalEmulator::Konsole => "konsole",
            TerminalEmulator::Xfce4Terminal => "xfce4-terminal",
            TerminalEmulator::Kitty => "kitty",
            TerminalEmulator::Alacritty => "alacritty",
            TerminalEmulator::WezTerm => "wezterm",
            TerminalEmulator::Xterm => "xterm",
            TerminalEmulator::MacTerminal => "terminal-app",
            TerminalEmulator::WindowsTerminal => "windows-terminal",
            TerminalEmulator::WindowsConsole => "cmd",
        }
    }

    /// Get emulator from string (case-insensitive)
    pub fn from_string(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "x-terminal-emulator" => Some(TerminalEmulator::XTerminalEmulator),
            "gnome-terminal" | "gnome" => Some(TerminalEmulator::GnomeTerminal),
            "konsole" => Some(TerminalEmulator::Konsole),
            "xfce4-terminal" | "xfce" => Some(TerminalEmulator::Xfce4Terminal),
            "kitty" => Some(TerminalEmulator::Kitty),
            "alacritty" => Some(TerminalEmulator::Alacritty),
            "wezterm" => Some(TerminalEmulator::WezTerm),
            "xterm" => Some(TerminalEmulator::Xterm),
            "terminal-app" | "terminal" | "terminal.app" => Some(TerminalEmulator::MacTerminal),
            "windows-terminal" | "wt" => Some(TerminalEmulator::WindowsTerminal),
            "cmd" | "cmd.exe" | "console" => Some(TerminalEmulator::WindowsConsole),
            _ => None,
        }
    }

    /// Executable that is spawned to open the window
    pub fn program(&self) -> &'static str {
        match self {
            TerminalEmulator::MacTerminal => "osascript",
            TerminalEmulator::WindowsTerminal => "wt",
            TerminalEmulator::WindowsConsole => "cmd",
            other => other.as_str(),
        }
    }

    /// Whether the program ships with the OS and needs no PATH lookup
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            TerminalEmulator::MacTerminal | TerminalEmulator::WindowsConsole
        )
    }

    /// Whether this emulator can be driven on the current platform
    pub fn supported_on_current_platform(&self) -> bool {
        match self {
            TerminalEmulator::WindowsTerminal | TerminalEmulator::WindowsConsole => {
                cfg!(windows)
            }
            TerminalEmulator::MacTerminal => cfg!(target_os = "macos"),
            _ => cfg!(unix),
        }
    }

    /// Emulators to probe on the current platform, most preferred first
    pub fn detection_candidates() -> Vec<TerminalEmulator> {
        if cfg!(windows) {
            vec![
                TerminalEmulator::WindowsConsole,
                TerminalEmulator::WindowsTerminal,
            ]
        } else if cfg!(target_os = "macos") {
            let mut candidates = vec![TerminalEmulator::MacTerminal];
            candidates.extend(UNIX_CANDIDATES);
            candidates
        } else {
            UNIX_CANDIDATES.to_vec()
        }
    }

    /// Build the arguments passed to [`program`](Self::program) so that a new
    /// window titled `title` runs `command`.
    ///
    /// With `hold_open` the window stays open after `command` exits.
    pub fn build_args(&self, title: &str, command: &str, hold_open: bool) -> Vec<String> {
        match self {
            // `start` gives the window its own console instead of sharing ours
            TerminalEmulator::WindowsConsole => {
                vec![
                    "/C".to_string(),
                    "start".to_string(),
                    format!("\"{}\"", title.replace('"', "")),
                    "cmd".to_string(),
                    if hold_open { "/K" } else { "/C" }.to_string(),
                    command.to_string(),
                ]
            }
            TerminalEmulator::WindowsTerminal => {
                vec![
                    "new-tab".to_string(),
                    "--title".to_string(),
                    title.to_string(),
                    "cmd".to_string(),
                    if hold_open { "/K" } else { "/C" }.to_string(),
                    command.to_string(),
                ]
            }
            TerminalEmulator::MacTerminal => {
                let payload = format!(
                    "printf '\\033]0;%s\\007' {}; {}",
                    shell_quote(title),
                    unix_payload(command, hold_open)
                );
                vec![
                    "-e".to_string(),
                    format!(
                        "tell application \"Terminal\" to do script \"{}\"",
                        applescript_escape(&payload)
                    ),
                    "-e".to_string(),
                    "tell application \"Terminal\" to activate".to_string(),
                ]
            }
            unix => {
                let payload = unix_payload(command, hold_open);
                let mut args: Vec<String> = match unix {
                    TerminalEmulator::GnomeTerminal => {
                        vec![format!("--title={}", title), "--".to_string()]
                    }
                    TerminalEmulator::Konsole => vec![
                        "-p".to_string(),
                        format!("tabtitle={}", title),
                        "-e".to_string(),
                    ],
                    TerminalEmulator::Xfce4Terminal => {
                        vec!["--title".to_string(), title.to_string(), "-x".to_string()]
                    }
                    TerminalEmulator::Kitty => vec!["--title".to_string(), title.to_string()],
                    TerminalEmulator::Alacritty => {
                        vec!["--title".to_string(), title.to_string(), "-e".to_string()]
                    }
                    // wezterm has no title flag; the OSC sequence sets it instead
                    TerminalEmulator::WezTerm => vec!["start".to_string(), "--".to_string()],
                    _ => vec!["-T".to_string(), title.to_string(), "-e".to_string()],
                };
                let payload = if matches!(unix, TerminalEmulator::WezTerm) {
                    format!("printf '\\033]0;%s\\007' {}; {}", shell_quote(title), payload)
                } else {
                    payload
                };
                args.extend(["sh".to_string(), "-c".to_string(), payload]);
                args
            }
        }
    }
}

impl std::fmt::Display for TerminalEmulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Script run by `sh -c` inside a Unix terminal
fn unix_payload(command: &str, hold_open: bool) -> String {
    if hold_open {
        format!("{}; exec \"${{SHELL:-/bin/sh}}\"", command)
    } else {
        command.to_string()
    }
}

/// Single-quote a string for POSIX sh
pub(crate) fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
