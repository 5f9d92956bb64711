use serde::{Deserialize, Serialize};

fn default_timeout_ms() -> u64 {
    15_000
}

fn default_offset_x() -> f64 {
    10.0
}

fn default_offset_y() -> f64 {
    20.0
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PopupConfig {
    /// Untouched popups close after this long
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Shift applied to the anchor so the popup doesn't cover the word
    #[serde(default = "default_offset_x")]
    pub offset_x: f64,
    #[serde(default = "default_offset_y")]
    pub offset_y: f64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            offset_x: default_offset_x(),
            offset_y: default_offset_y(),
        }
    }
}
