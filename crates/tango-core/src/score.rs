use tango_types::ScoreSummary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    right: u32,
    wrong: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_correct(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    pub fn record_incorrect(&mut self) {
        self.wrong = self.wrong.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    /// `right` out of `right + wrong`
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            right: self.right,
            total: self.right.saturating_add(self.wrong),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_correct_then_reset() {
        let mut score = ScoreTracker::new();
        for _ in 0..5 {
            score.record_correct();
        }
        assert_eq!(score.summary(), ScoreSummary { right: 5, total: 5 });

        score.reset();
        assert_eq!(score.summary(), ScoreSummary { right: 0, total: 0 });
    }

    #[test]
    fn test_mixed_answers() {
        let mut score = ScoreTracker::new();
        score.record_correct();
        score.record_incorrect();
        score.record_incorrect();

        assert_eq!(score.wrong(), 2);
        assert_eq!(score.summary(), ScoreSummary { right: 1, total: 3 });
    }
}
