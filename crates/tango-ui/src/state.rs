use tango_types::{QuestionView, WordEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Quiz,
    Review,
}

/// UI-specific state (separate from the quiz session)
#[derive(Debug, Default)]
pub struct UiState {
    pub screen: Screen,
    pub question: Option<QuestionView>,
    pub review: Vec<WordEntry>,
    pub color: bool,
}

impl UiState {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn option_count(&self) -> usize {
        self.question.as_ref().map_or(0, |q| q.options.len())
    }
}
