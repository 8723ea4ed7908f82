use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tango_config::Config;

/// A saved settings profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load a profile file, falling back to environment defaults when no path is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No profile given, using environment defaults");
        return Ok(Config::new());
    };

    tracing::info!("Loading profile from {}", path.display());
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    tracing::info!("Loaded profile '{}'", profile.name);
    Ok(profile.value)
}

/// Write a profile holding the given config
pub fn save_profile(path: &Path, name: &str, config: &Config) -> anyhow::Result<()> {
    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Saved profile '{}' to {}", name, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trip_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.json");

        let mut config = Config::default();
        config.speech.enabled = false;
        config.catalog.path = Some("words.json".to_string());
        save_profile(&path, "main", &config).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert!(!loaded.speech.enabled);
        assert_eq!(loaded.catalog.path.as_deref(), Some("words.json"));
    }

    #[test]
    fn test_missing_profile_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.json"))).is_err());
    }
}
