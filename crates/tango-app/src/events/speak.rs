use tango_core::{QuizSession, Speaker};

fn speak(speaker: &dyn Speaker, text: &str) {
    if let Err(e) = speaker.speak(text) {
        tracing::warn!("Failed to speak '{}': {}", text, e);
    }
}

pub fn speak_current(session: &QuizSession, speaker: &dyn Speaker) {
    if let Some(question) = session.current_question() {
        speak(speaker, &question.word);
    }
}

pub fn speak_mistake(session: &QuizSession, index: usize, speaker: &dyn Speaker) {
    match session.mistakes().get(index) {
        Some(entry) => speak(speaker, &entry.word),
        None => tracing::warn!("No mistake at row {}", index),
    }
}
