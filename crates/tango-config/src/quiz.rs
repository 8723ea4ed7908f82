use std::env;

use serde::{Deserialize, Serialize};

pub const MIN_OPTION_COUNT: usize = 2;

fn default_option_count() -> usize {
    4
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct QuizConfig {
    /// Options shown per question, correct answer included
    #[serde(default = "default_option_count")]
    pub option_count: usize,
    /// Fixed RNG seed, random each run when unset
    pub seed: Option<u64>,
}

impl QuizConfig {
    pub fn new() -> Self {
        let option_count = env::var("QUIZ_OPTION_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_option_count);

        Self {
            option_count,
            seed: None,
        }
    }

    pub fn effective_option_count(&self) -> usize {
        self.option_count.max(MIN_OPTION_COUNT)
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            option_count: default_option_count(),
            seed: None,
        }
    }
}
