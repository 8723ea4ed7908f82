use std::env;

use serde::{Deserialize, Serialize};

fn default_color() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// ANSI colors in the terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        let color = env::var("UI_COLOR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_color);

        Self { color }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}
