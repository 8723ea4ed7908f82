use tango_types::{AppEvent, UiEvent};

use crate::render::{render_correct, render_notice, render_question, render_reference, render_review};
use crate::state::{Screen, UiState};

/// Apply an app event to the UI state, returning text to draw
pub fn handle_events(event: AppEvent, state: &mut UiState) -> Option<String> {
    match event {
        AppEvent::ShowQuestion {
            question,
            score,
            last,
        } => {
            tracing::debug!("[UI] Showing question: {:?}", question.as_ref().map(|q| &q.word));
            state.screen = Screen::Quiz;
            let mut out = String::new();
            if last == Some(true) {
                out.push_str(&render_correct(state.color));
                out.push('\n');
            }
            out.push_str(&render_question(question.as_ref(), score, state.color));
            state.question = question;
            Some(out)
        }
        AppEvent::ShowReview(entries) => {
            tracing::debug!("[UI] Showing {} mistakes", entries.len());
            state.screen = Screen::Review;
            let out = render_review(&entries, state.color);
            state.review = entries;
            Some(out)
        }
        AppEvent::ShowReference { word, text } => {
            tracing::debug!("[UI] Showing reference for {}", word);
            Some(render_reference(&word, &text, state.color))
        }
        AppEvent::ShowNotice { title, message } => Some(render_notice(&title, &message, state.color)),
        AppEvent::BackendReady => {
            tracing::debug!("[UI] Backend ready");
            None
        }
        AppEvent::UiEvent(UiEvent::Quit) => None,
        AppEvent::UiEvent(event) => {
            tracing::warn!("[UI] Unexpected UI event from app: {:?}", event);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tango_types::{ScoreSummary, WordEntry};

    use super::*;

    #[test]
    fn test_review_switches_screen() {
        let mut state = UiState::new(false);
        let entries = vec![WordEntry {
            id: 1,
            word: "cat".to_string(),
            word_type: "n.".to_string(),
            meaning: "貓".to_string(),
        }];

        let out = handle_events(AppEvent::ShowReview(entries), &mut state).unwrap();
        assert_eq!(state.screen, Screen::Review);
        assert_eq!(state.review.len(), 1);
        assert!(out.contains("cat"));

        handle_events(
            AppEvent::ShowQuestion {
                question: None,
                score: ScoreSummary::default(),
                last: None,
            },
            &mut state,
        );
        assert_eq!(state.screen, Screen::Quiz);
        assert!(state.question.is_none());
    }

    #[test]
    fn test_notice_keeps_screen() {
        let mut state = UiState::new(false);
        let out = handle_events(
            AppEvent::ShowNotice {
                title: "載入單字失敗".to_string(),
                message: "找不到單字列表檔案".to_string(),
            },
            &mut state,
        )
        .unwrap();
        assert!(out.contains("載入單字失敗"));
        assert_eq!(state.screen, Screen::Quiz);
    }

    fn show(last: Option<bool>) -> AppEvent {
        AppEvent::ShowQuestion {
            question: None,
            score: ScoreSummary { right: 1, total: 1 },
            last,
        }
    }

    #[test]
    fn test_correct_banner_only_after_right_answer() {
        let mut state = UiState::new(false);
        let out = handle_events(show(Some(true)), &mut state).unwrap();
        assert!(out.starts_with("答對了！\n[ 1/1 ]"));

        let out = handle_events(show(Some(false)), &mut state).unwrap();
        assert!(!out.contains("答對了"));

        // Re-shows after next, reset or a locked tap carry no outcome
        let out = handle_events(show(None), &mut state).unwrap();
        assert!(!out.contains("答對了"));
    }

    #[test]
    fn test_reference_keeps_review_screen() {
        let mut state = UiState {
            screen: Screen::Review,
            ..UiState::new(false)
        };
        let out = handle_events(
            AppEvent::ShowReference {
                word: "cat".to_string(),
                text: "貓".to_string(),
            },
            &mut state,
        )
        .unwrap();
        assert!(out.contains("== cat =="));
        assert_eq!(state.screen, Screen::Review);
    }
}
