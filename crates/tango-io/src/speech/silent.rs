use tango_core::{SpeechError, Speaker};

/// Logs instead of speaking
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        tracing::debug!("[SPEECH] (silent) {}", text);
        Ok(())
    }
}
