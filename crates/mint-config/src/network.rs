use serde::{Deserialize, Serialize};

fn default_ws_url() -> String {
    "ws://127.0.0.1:9090".to_string()
}

fn default_reconnect_delay_ms() -> u64 {
    2_000
}

/// Connection to the page relay
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ws_url: default_ws_url(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
        }
    }
}
