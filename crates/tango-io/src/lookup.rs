use std::process::{Command, Stdio};

use tango_config::lookup::LookupConfig;
use tango_core::{Lookup, LookupError};

/// Runs an external dictionary program, e.g. `sdcv -n` or `dict`, and returns its output
pub struct CommandLookup {
    program: String,
    args: Vec<String>,
}

impl CommandLookup {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl Lookup for CommandLookup {
    fn lookup(&self, word: &str) -> Result<String, LookupError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(word)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| LookupError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(LookupError::Failed {
                program: self.program.clone(),
                status: output.status,
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(LookupError::NotFound(word.to_string()));
        }

        tracing::debug!("[LOOKUP] '{}' returned {} bytes", word, text.len());
        Ok(text)
    }
}

/// Dictionary program for the given config, if one is set
pub fn lookup_from_config(config: &LookupConfig) -> Option<Box<dyn Lookup>> {
    match &config.program {
        Some(program) => {
            tracing::info!("Dictionary lookup via '{}'", program);
            Some(Box::new(CommandLookup::new(program.clone(), config.args.clone())))
        }
        None => {
            tracing::info!("No dictionary program, lookup shows catalog entries");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let lookup = CommandLookup::new("tango-no-such-dict-program".to_string(), vec![]);
        let err = lookup.lookup("cat").unwrap_err();
        assert!(matches!(err, LookupError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_is_returned() {
        let lookup = CommandLookup::new("echo".to_string(), vec!["definition of".to_string()]);
        assert_eq!(lookup.lookup("cat").unwrap(), "definition of cat");
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_output_is_not_found() {
        let lookup = CommandLookup::new("true".to_string(), vec![]);
        assert!(matches!(lookup.lookup("cat"), Err(LookupError::NotFound(w)) if w == "cat"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program() {
        let lookup = CommandLookup::new("false".to_string(), vec![]);
        assert!(matches!(lookup.lookup("cat"), Err(LookupError::Failed { .. })));
    }

    #[test]
    fn test_config_without_program() {
        assert!(lookup_from_config(&LookupConfig::default()).is_none());

        let config = LookupConfig {
            program: Some("sdcv".to_string()),
            args: vec![],
        };
        assert!(lookup_from_config(&config).is_some());
    }
}
