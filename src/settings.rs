use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Ambient options only; gameplay constants are fixed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed spawn sequence when set. Entropy-seeded otherwise.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Draw the lane-key hint row under the board.
    #[serde(default = "default_lane_hints")]
    pub lane_hints: bool,
}

fn default_lane_hints() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            lane_hints: true,
        }
    }
}

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lanestrike");
    path.push("settings.json");
    path
}

impl Settings {
    pub fn load() -> Self {
        match fs::read_to_string(settings_path()) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
