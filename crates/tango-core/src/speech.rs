#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Failed to start speech program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Text-to-speech output. Fire-and-forget: returns once speech has started.
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str) -> Result<(), SpeechError>;
}
