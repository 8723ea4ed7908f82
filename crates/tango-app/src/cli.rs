use std::path::PathBuf;

use clap::Parser;
use tango_config::Config;

/// Vocabulary flash-card quiz
#[derive(Parser, Debug)]
#[command(name = "tango", version, about)]
pub struct Args {
    /// Settings profile (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Word list file, overrides the profile
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Do not speak words aloud
    #[arg(long)]
    pub no_speech: bool,

    /// Seed for repeatable question order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dictionary program for looking up review words, e.g. `sdcv`
    #[arg(long)]
    pub dictionary: Option<String>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Save the resolved settings to this profile file and exit
    #[arg(long)]
    pub save_profile: Option<PathBuf>,
}

impl Args {
    pub fn apply(&self, config: &mut Config) {
        if let Some(catalog) = &self.catalog {
            config.catalog.path = Some(catalog.display().to_string());
        }
        if self.no_speech {
            config.speech.enabled = false;
        }
        if self.seed.is_some() {
            config.quiz.seed = self.seed;
        }
        if let Some(program) = &self.dictionary {
            config.lookup.program = Some(program.clone());
        }
        if self.no_color {
            config.ui.color = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "tango",
            "--catalog",
            "words.json",
            "--no-speech",
            "--seed",
            "9",
            "--no-color",
            "--dictionary",
            "sdcv",
        ])
        .unwrap();

        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.catalog.path.as_deref(), Some("words.json"));
        assert!(!config.speech.enabled);
        assert_eq!(config.quiz.seed, Some(9));
        assert!(!config.ui.color);
        assert_eq!(config.lookup.program.as_deref(), Some("sdcv"));
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::try_parse_from(["tango"]).unwrap();
        let mut config = Config::default();
        config.quiz.seed = Some(3);
        args.apply(&mut config);

        assert_eq!(config.quiz.seed, Some(3));
        assert!(config.speech.enabled);
    }
}
