use rand::Rng;
use rand::seq::SliceRandom;
use tango_types::{QuizQuestion, WordEntry};

use crate::catalog::WordCatalog;

pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Builds multiple-choice questions from a catalog
#[derive(Debug, Clone, Copy)]
pub struct QuizEngine {
    option_count: usize,
}

impl QuizEngine {
    pub fn new(option_count: usize) -> Self {
        Self {
            option_count: option_count.max(2),
        }
    }

    pub fn option_count(&self) -> usize {
        self.option_count
    }

    /// Pick a random target word and up to `option_count - 1` distractor meanings.
    ///
    /// Distractors come from entries with a different id. A meaning equal to
    /// the correct one or to an already chosen distractor is skipped, so the
    /// options stay unique. Small catalogs give a shorter option list.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        catalog: &WordCatalog,
        rng: &mut R,
    ) -> Option<QuizQuestion> {
        self.pick(catalog, rng).map(|(_, question)| question)
    }

    /// Like [`QuizEngine::generate`], also returning the target entry
    pub fn pick<'a, R: Rng + ?Sized>(
        &self,
        catalog: &'a WordCatalog,
        rng: &mut R,
    ) -> Option<(&'a WordEntry, QuizQuestion)> {
        let target = catalog.entries().choose(rng)?;

        let mut others: Vec<&str> = catalog
            .entries()
            .iter()
            .filter(|e| e.id != target.id)
            .map(|e| e.meaning.as_str())
            .collect();
        others.shuffle(rng);

        let mut options = vec![target.meaning.clone()];
        for meaning in others {
            if options.len() == self.option_count {
                break;
            }
            if options.iter().any(|o| o == meaning) {
                continue;
            }
            options.push(meaning.to_string());
        }

        if options.len() < self.option_count {
            tracing::debug!(
                "Only {} options available for '{}'",
                options.len(),
                target.word
            );
        }

        options.shuffle(rng);

        let question = QuizQuestion {
            word: target.word.clone(),
            word_type: target.word_type.clone(),
            options,
            correct_answer: target.meaning.clone(),
        };

        Some((target, question))
    }

    pub fn evaluate(question: &QuizQuestion, selected: &str) -> bool {
        selected == question.correct_answer
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new(DEFAULT_OPTION_COUNT)
    }
}
