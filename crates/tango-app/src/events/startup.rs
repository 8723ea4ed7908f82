use std::path::PathBuf;

use kanal::AsyncSender;
use tango_core::{CatalogLoader, QuizEngine, QuizSession, WordCatalog};
use tango_types::AppEvent;

use crate::state::AppState;

pub const LOAD_FAILED_TITLE: &str = "載入單字失敗";

/// Load the word list once. A failure is reported to the UI and leaves
/// the session without questions.
pub async fn load_session(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<QuizSession> {
    let (path, option_count, seed) = {
        let config = state.config.read().await;
        (
            config.catalog.path.clone().map(PathBuf::from),
            config.quiz.effective_option_count(),
            config.quiz.seed,
        )
    };

    let loaded =
        tokio::task::spawn_blocking(move || CatalogLoader::load(path.as_deref())).await?;

    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load word list: {}", e);
            app_to_ui_tx
                .send(AppEvent::ShowNotice {
                    title: LOAD_FAILED_TITLE.to_string(),
                    message: e.to_string(),
                })
                .await?;
            WordCatalog::default()
        }
    };

    let engine = QuizEngine::new(option_count);
    let session = match seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            QuizSession::seeded(catalog, engine, seed)
        }
        None => QuizSession::new(catalog, engine),
    };

    Ok(session)
}
