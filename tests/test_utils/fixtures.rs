//! Configuration fixtures

use stagger::Config;

/// Default configuration with `native` native clients and `script`
/// script clients
pub fn config_with_clients(native: usize, script: usize) -> Config {
    let mut config = Config::default();
    config.server.command = "./server".to_string();
    config.native_client.command = Some("./client".to_string());
    config.script_client.command = Some("node node_client.js".to_string());
    config.native_client.count = native;
    config.script_client.count = script;
    config
}

/// Same as [`config_with_clients`] but without any pauses
pub fn instant_config(native: usize, script: usize) -> Config {
    let mut config = config_with_clients(native, script);
    config.timing.warmup_ms = 0;
    config.timing.client_delay_ms = 0;
    config
}
