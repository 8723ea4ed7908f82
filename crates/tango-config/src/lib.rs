use serde::{Deserialize, Serialize};

use self::catalog::CatalogConfig;
use self::lookup::LookupConfig;
use self::quiz::QuizConfig;
use self::speech::SpeechConfig;
use self::ui::UiConfig;

pub mod catalog;
pub mod lookup;
pub mod quiz;
pub mod speech;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub quiz: QuizConfig,
    pub speech: SpeechConfig,
    pub lookup: LookupConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        Config {
            catalog: CatalogConfig::new(),
            quiz: QuizConfig::new(),
            speech: SpeechConfig::new(),
            lookup: LookupConfig::new(),
            ui: UiConfig::new(),
        }
    }
}
