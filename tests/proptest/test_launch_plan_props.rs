//! Property-based tests for launch plans

#[path = "../test_utils/mod.rs"]
mod test_utils;

use std::time::Duration;

use proptest::prelude::*;
use stagger::models::validate_command;
use stagger::{LaunchPlan, Launcher, ProcessKind};
use test_utils::{config_with_clients, instant_config, EventLog, MockTerminal};

proptest! {
    #[test]
    fn test_plan_has_one_step_per_process(native in 0usize..=64, script in 0usize..=64) {
        let plan = LaunchPlan::from_config(&config_with_clients(native, script));
        prop_assert_eq!(plan.len(), 1 + native + script);
        prop_assert_eq!(plan.count_of(ProcessKind::NativeClient), native);
        prop_assert_eq!(plan.count_of(ProcessKind::ScriptClient), script);
    }

    #[test]
    fn test_plan_order_is_server_native_script(native in 0usize..10, script in 0usize..10) {
        let plan = LaunchPlan::from_config(&config_with_clients(native, script));
        let kinds: Vec<ProcessKind> = plan.steps().iter().map(|s| s.spec.kind).collect();

        prop_assert_eq!(kinds[0], ProcessKind::Server);
        let mut sorted = kinds.clone();
        sorted.sort();
        prop_assert_eq!(kinds, sorted);
    }

    #[test]
    fn test_total_delay_formula(
        native in 0usize..20,
        script in 0usize..20,
        warmup_ms in 0u64..5000,
        client_delay_ms in 0u64..1000,
    ) {
        let mut config = config_with_clients(native, script);
        config.timing.warmup_ms = warmup_ms;
        config.timing.client_delay_ms = client_delay_ms;

        let plan = LaunchPlan::from_config(&config);
        let expected = warmup_ms + (native + script) as u64 * client_delay_ms;
        prop_assert_eq!(plan.total_delay(), Duration::from_millis(expected));
    }

    #[test]
    fn test_ordinals_restart_per_kind(native in 1usize..10, script in 1usize..10) {
        let plan = LaunchPlan::from_config(&config_with_clients(native, script));
        for kind in [ProcessKind::NativeClient, ProcessKind::ScriptClient] {
            let ordinals: Vec<usize> = plan
                .steps()
                .iter()
                .filter(|s| s.spec.kind == kind)
                .filter_map(|s| s.spec.ordinal)
                .collect();
            let expected: Vec<usize> = (1..=ordinals.len()).collect();
            prop_assert_eq!(ordinals, expected);
        }
    }

    #[test]
    fn test_every_launch_is_announced_first(native in 0usize..6, script in 0usize..6) {
        let log = EventLog::new();
        let plan = LaunchPlan::from_config(&instant_config(native, script));
        let mut launcher = Launcher::new(plan, Box::new(MockTerminal::new(log.clone())))
            .with_status_sink(log.status_sink());

        let session = tokio_test::block_on(launcher.launch_all()).unwrap();
        prop_assert_eq!(session.launched_count(), 1 + native + script);
        prop_assert_eq!(log.status_lines().len(), 1 + native + script);
        prop_assert_eq!(log.events().len(), 2 * (1 + native + script));
    }

    #[test]
    fn test_validate_command_doesnt_panic(s in "\\PC*") {
        let _ = validate_command(&s);
    }

    #[test]
    fn test_rejects_null_bytes(prefix in "[a-z ./]{0,20}", suffix in "[a-z ./]{0,20}") {
        let command = format!("{}\0{}", prefix, suffix);
        prop_assert!(validate_command(&command).is_err());
    }
}
