use serde::{Deserialize, Serialize};

/// A single vocabulary entry from the word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: i64,
    pub word: String,
    pub word_type: String,
    pub meaning: String,
}

/// One multiple-choice round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub word: String,
    pub word_type: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    pub right: u32,
    pub total: u32,
}

/// How an option is drawn on the quiz screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Normal,
    /// Correct answer revealed after a miss
    Revealed,
    Dimmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub text: String,
    pub state: OptionState,
}

/// Everything the quiz screen needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub word: String,
    pub word_type: String,
    pub options: Vec<OptionView>,
    pub score: ScoreSummary,
    pub locked: bool,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Current question, or `None` when there is nothing to ask
    ShowQuestion {
        question: Option<QuestionView>,
        score: ScoreSummary,
        /// Whether the answer that led here was right; `None` when nothing was answered
        last: Option<bool>,
    },
    ShowReview(Vec<WordEntry>),
    /// Dictionary text for a word from the review list
    ShowReference {
        word: String,
        text: String,
    },
    ShowNotice {
        title: String,
        message: String,
    },
    BackendReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectOption(usize),
    Next,
    Reset,
    Speak,
    OpenReview,
    CloseReview,
    DeleteMistake(usize),
    SpeakMistake(usize),
    LookupMistake(usize),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_entry_uses_snake_case_fields() {
        let json = r#"{"id":7,"word":"apple","word_type":"n.","meaning":"蘋果"}"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.word_type, "n.");
        assert_eq!(entry.meaning, "蘋果");
    }
}
