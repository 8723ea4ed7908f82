use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use kanal::AsyncSender;
use tango_core::{Lookup, QuizSession, entry_summary};
use tango_types::AppEvent;

/// Longest wait for the dictionary program before falling back to the catalog entry
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Show the dictionary text for a review row. Without a dictionary, or when it
/// fails, the row's catalog entry is shown instead.
pub async fn handle_lookup_mistake(
    session: &QuizSession,
    index: usize,
    lookup: Option<&Arc<dyn Lookup>>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(entry) = session.mistakes().get(index).cloned() else {
        tracing::error!(
            "Lookup index {} out of range (len {})",
            index,
            session.mistakes().len()
        );
        return Ok(());
    };

    let summary = entry_summary(&entry);
    let text = match lookup {
        Some(lookup) => match run_lookup(lookup.clone(), entry.word.clone()).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("[LOOKUP] '{}' failed: {}", entry.word, e);
                format!("{summary}\n（{e}）")
            }
        },
        None => summary,
    };

    app_to_ui_tx
        .send(AppEvent::ShowReference {
            word: entry.word,
            text,
        })
        .await?;
    Ok(())
}

async fn run_lookup(lookup: Arc<dyn Lookup>, word: String) -> anyhow::Result<String> {
    let task = tokio::task::spawn_blocking(move || lookup.lookup(&word));
    let text = tokio::time::timeout(LOOKUP_TIMEOUT, task)
        .await
        .map_err(|_| anyhow!("字典程式逾時"))???;
    Ok(text)
}
