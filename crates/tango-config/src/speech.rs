use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_program() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak".to_string()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Text-to-speech executable, the text is passed as the last argument
    #[serde(default = "default_program")]
    pub program: String,
    pub args: Vec<String>,
}

impl SpeechConfig {
    pub fn new() -> Self {
        let enabled = env::var("SPEECH_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_enabled);

        let program = env::var("SPEECH_PROGRAM").unwrap_or_else(|_| default_program());

        let args = env::var("SPEECH_ARGS")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            enabled,
            program,
            args,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            program: default_program(),
            args: vec![],
        }
    }
}
