use kanal::AsyncSender;
use tango_core::QuizSession;
use tango_types::AppEvent;

pub async fn handle_open_review(
    session: &QuizSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    send_review(session, app_to_ui_tx).await
}

pub async fn handle_delete_mistake(
    session: &mut QuizSession,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.remove_mistake(index) {
        Ok(entry) => tracing::info!("Removed '{}' from mistake log", entry.word),
        Err(e) => tracing::error!("Failed to delete mistake: {}", e),
    }

    send_review(session, app_to_ui_tx).await
}

async fn send_review(
    session: &QuizSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ShowReview(session.mistakes().all().to_vec()))
        .await?;
    Ok(())
}
