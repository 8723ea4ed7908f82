use kanal::AsyncSender;
use tango_core::{QuizSession, SelectOutcome, Speaker};
use tango_types::AppEvent;

use super::show_question;
use super::speak::speak_current;

pub async fn handle_selection(
    session: &mut QuizSession,
    index: usize,
    speaker: &dyn Speaker,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let outcome = session.select_index(index);

    match &outcome {
        SelectOutcome::Correct => {
            let summary = session.score().summary();
            tracing::info!("Correct ({}/{})", summary.right, summary.total);
        }
        SelectOutcome::Incorrect { correct_answer } => {
            tracing::info!("Incorrect, answer was '{}'", correct_answer);
        }
        SelectOutcome::Ignored => {
            tracing::debug!("Selection {} ignored", index);
        }
        SelectOutcome::NoQuestion => {
            tracing::warn!("Selection with no question loaded");
        }
    }

    let last = match outcome {
        SelectOutcome::Correct => {
            speak_current(session, speaker);
            Some(true)
        }
        SelectOutcome::Incorrect { .. } => Some(false),
        SelectOutcome::Ignored | SelectOutcome::NoQuestion => None,
    };

    show_question(session, last, app_to_ui_tx).await
}
