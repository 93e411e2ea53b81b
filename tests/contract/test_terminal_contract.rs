//! Contract Tests for Terminal Hosts
//!
//! Every terminal emulator must put the command and the window title
//! somewhere in its argument vector, and the platform factory must only
//! hand out openers for emulators this OS can drive.

use stagger::error::Error;
use stagger::models::TerminalEmulator;
use stagger::Platform;

const ALL: [TerminalEmulator; 11] = [
    TerminalEmulator::XTerminalEmulator,
    TerminalEmulator::GnomeTerminal,
    TerminalEmulator::Konsole,
    TerminalEmulator::Xfce4Terminal,
    TerminalEmulator::Kitty,
    TerminalEmulator::Alacritty,
    TerminalEmulator::WezTerm,
    TerminalEmulator::Xterm,
    TerminalEmulator::MacTerminal,
    TerminalEmulator::WindowsTerminal,
    TerminalEmulator::WindowsConsole,
];

#[test]
fn test_every_emulator_carries_command_and_title() {
    for emulator in ALL {
        for hold_open in [true, false] {
            let args = emulator.build_args("Native Client 2", "./client --id 2", hold_open);
            let joined = args.join(" ");
            assert!(
                joined.contains("./client --id 2"),
                "{} dropped the command: {:?}",
                emulator,
                args
            );
            assert!(
                joined.contains("Native Client 2"),
                "{} dropped the title: {:?}",
                emulator,
                args
            );
        }
    }
}

#[test]
fn test_hold_open_changes_the_invocation() {
    for emulator in ALL {
        let held = emulator.build_args("Server", "./server", true);
        let closed = emulator.build_args("Server", "./server", false);
        assert_ne!(held, closed, "{} ignores hold_open", emulator);
    }
}

#[test]
fn test_unix_emulators_run_through_sh() {
    for emulator in ALL {
        if matches!(
            emulator,
            TerminalEmulator::MacTerminal
                | TerminalEmulator::WindowsTerminal
                | TerminalEmulator::WindowsConsole
        ) {
            continue;
        }
        let args = emulator.build_args("Server", "./server", false);
        let n = args.len();
        assert!(n >= 3);
        assert_eq!(&args[n - 3..n - 1], &["sh", "-c"], "{}", emulator);
        assert!(args[n - 1].ends_with("./server"));
    }
}

#[test]
fn test_factory_respects_platform_support() {
    for emulator in ALL {
        match Platform::terminal(emulator, true) {
            Ok(terminal) => {
                assert!(emulator.supported_on_current_platform());
                assert_eq!(terminal.name(), emulator.as_str());
            }
            Err(Error::TerminalNotSupported { name, .. }) => {
                assert!(!emulator.supported_on_current_platform());
                assert_eq!(name, emulator.as_str());
            }
            Err(other) => panic!("unexpected error for {}: {}", emulator, other),
        }
    }
}

#[test]
fn test_detection_only_returns_candidates() {
    let candidates = TerminalEmulator::detection_candidates();
    for emulator in Platform::detect_terminals() {
        assert!(candidates.contains(&emulator));
    }
}

#[test]
fn test_explicit_choice_skips_detection() {
    let chosen = Platform::resolve_terminal(Some(TerminalEmulator::Alacritty)).unwrap();
    assert_eq!(chosen, TerminalEmulator::Alacritty);
}

#[cfg(unix)]
#[tokio::test]
async fn test_missing_emulator_reports_launch_failure() {
    let fs_ops = Platform::filesystem();
    let missing = TerminalEmulator::detection_candidates()
        .into_iter()
        .filter(|e| !e.is_builtin())
        .find(|e| matches!(fs_ops.find_command(e.program()), Ok(None)));

    // Every candidate installed: nothing to exercise on this host
    let Some(emulator) = missing else {
        return;
    };

    let terminal = Platform::terminal(emulator, true).unwrap();
    let err = terminal
        .open_terminal("./server", "Server")
        .await
        .unwrap_err();

    assert!(err.is_launch_failure());
    match err {
        Error::TerminalLaunchFailed { command, reason, .. } => {
            assert_eq!(command, "./server");
            assert!(reason.contains(emulator.program()));
        }
        other => panic!("unexpected error: {}", other),
    }
}
