use std::env;

use serde::{Deserialize, Serialize};

/// Dictionary program used by the review screen's lookup command.
/// Without a program, lookup shows the word's own catalog entry.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct LookupConfig {
    /// Executable such as `sdcv` or `dict`, the word is passed as the last argument
    pub program: Option<String>,
    pub args: Vec<String>,
}

impl LookupConfig {
    pub fn new() -> Self {
        let program = env::var("LOOKUP_PROGRAM").ok().filter(|p| !p.trim().is_empty());

        let args = env::var("LOOKUP_ARGS")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Self { program, args }
    }
}
