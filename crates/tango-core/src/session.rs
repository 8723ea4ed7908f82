use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tango_types::{OptionState, OptionView, QuestionView, QuizQuestion, WordEntry};

use crate::catalog::WordCatalog;
use crate::mistakes::{MistakeError, MistakeLog};
use crate::quiz::QuizEngine;
use crate::score::ScoreTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerLock {
    #[default]
    Unlocked,
    /// Set by a wrong answer, cleared by advancing
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Scored, and a new question is already in place
    Correct,
    Incorrect { correct_answer: String },
    /// Answer is locked or the selection does not exist
    Ignored,
    NoQuestion,
}

/// One quiz run: catalog, current question, score and mistake log
pub struct QuizSession<R = StdRng> {
    catalog: WordCatalog,
    engine: QuizEngine,
    rng: R,
    score: ScoreTracker,
    mistakes: MistakeLog,
    lock: AnswerLock,
    current: Option<(WordEntry, QuizQuestion)>,
}

impl QuizSession<StdRng> {
    pub fn new(catalog: WordCatalog, engine: QuizEngine) -> Self {
        Self::with_rng(catalog, engine, StdRng::from_entropy())
    }

    pub fn seeded(catalog: WordCatalog, engine: QuizEngine, seed: u64) -> Self {
        Self::with_rng(catalog, engine, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizSession<R> {
    /// Starts with the first question already generated
    pub fn with_rng(catalog: WordCatalog, engine: QuizEngine, rng: R) -> Self {
        let mut session = Self {
            catalog,
            engine,
            rng,
            score: ScoreTracker::new(),
            mistakes: MistakeLog::new(),
            lock: AnswerLock::Unlocked,
            current: None,
        };
        session.next_question();
        session
    }

    fn next_question(&mut self) {
        self.current = self
            .engine
            .pick(&self.catalog, &mut self.rng)
            .map(|(entry, question)| (entry.clone(), question));

        match &self.current {
            Some((entry, _)) => tracing::debug!("New question: {} (id {})", entry.word, entry.id),
            None => tracing::warn!("No question available, word list is empty"),
        }
    }

    pub fn select(&mut self, selected: &str) -> SelectOutcome {
        if self.lock == AnswerLock::Locked {
            tracing::debug!("Answer locked, ignoring '{}'", selected);
            return SelectOutcome::Ignored;
        }

        let Some((entry, question)) = &self.current else {
            return SelectOutcome::NoQuestion;
        };

        if QuizEngine::evaluate(question, selected) {
            self.score.record_correct();
            self.next_question();
            SelectOutcome::Correct
        } else {
            let correct_answer = question.correct_answer.clone();
            if self.mistakes.add_if_absent(entry.clone()) {
                tracing::info!("Added '{}' to mistake log", entry.word);
            }
            self.score.record_incorrect();
            self.lock = AnswerLock::Locked;
            SelectOutcome::Incorrect { correct_answer }
        }
    }

    /// Select by position in the option list
    pub fn select_index(&mut self, index: usize) -> SelectOutcome {
        let Some(option) = self
            .current_question()
            .and_then(|q| q.options.get(index))
            .cloned()
        else {
            if self.current.is_none() {
                return SelectOutcome::NoQuestion;
            }
            tracing::warn!("Option {} does not exist", index);
            return SelectOutcome::Ignored;
        };
        self.select(&option)
    }

    /// Unlock and move to a fresh question
    pub fn advance(&mut self) {
        self.lock = AnswerLock::Unlocked;
        self.next_question();
    }

    /// Zero the score and start over, the mistake log is kept
    pub fn reset(&mut self) {
        self.score.reset();
        self.advance();
    }

    pub fn remove_mistake(&mut self, index: usize) -> Result<WordEntry, MistakeError> {
        self.mistakes.remove_at(index)
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current.as_ref().map(|(_, question)| question)
    }

    pub fn current_entry(&self) -> Option<&WordEntry> {
        self.current.as_ref().map(|(entry, _)| entry)
    }

    pub fn lock(&self) -> AnswerLock {
        self.lock
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn mistakes(&self) -> &MistakeLog {
        &self.mistakes
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    pub fn view(&self) -> Option<QuestionView> {
        let question = self.current_question()?;
        let locked = self.lock == AnswerLock::Locked;

        let options = question
            .options
            .iter()
            .map(|text| {
                let state = match (locked, *text == question.correct_answer) {
                    (false, _) => OptionState::Normal,
                    (true, true) => OptionState::Revealed,
                    (true, false) => OptionState::Dimmed,
                };
                OptionView {
                    text: text.clone(),
                    state,
                }
            })
            .collect();

        Some(QuestionView {
            word: question.word.clone(),
            word_type: question.word_type.clone(),
            options,
            score: self.score.summary(),
            locked,
        })
    }
}
