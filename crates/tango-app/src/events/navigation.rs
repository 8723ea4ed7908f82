use kanal::AsyncSender;
use tango_core::{QuizSession, Speaker};
use tango_types::AppEvent;

use super::show_question;
use super::speak::speak_current;

pub async fn handle_next(
    session: &mut QuizSession,
    speaker: &dyn Speaker,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.advance();
    speak_current(session, speaker);
    show_question(session, None, app_to_ui_tx).await
}

pub async fn handle_reset(
    session: &mut QuizSession,
    speaker: &dyn Speaker,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Score reset");
    session.reset();
    speak_current(session, speaker);
    show_question(session, None, app_to_ui_tx).await
}

/// Back from the review screen to the question left in place
pub async fn handle_close_review(
    session: &QuizSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    show_question(session, None, app_to_ui_tx).await
}
