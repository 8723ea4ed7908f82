use std::process::Stdio;

use tango_core::{SpeechError, Speaker};
use tokio::process::Command;

/// Runs an external text-to-speech program, e.g. `espeak` or `say`
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl Speaker for CommandSpeaker {
    /// Must be called inside a tokio runtime; the child is reaped in the background
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Ok(());
        }

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        tracing::debug!("[SPEECH] '{}' started (pid {:?})", text, child.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let speaker = CommandSpeaker::new("tango-no-such-tts-program".to_string(), vec![]);
        let err = speaker.speak("hello").unwrap_err();
        assert!(matches!(err, SpeechError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_blank_text_is_skipped() {
        let speaker = CommandSpeaker::new("tango-no-such-tts-program".to_string(), vec![]);
        assert!(speaker.speak("   ").is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_existing_program_starts() {
        let speaker = CommandSpeaker::new("true".to_string(), vec!["-v".to_string()]);
        assert!(speaker.speak("hello").is_ok());
    }
}
