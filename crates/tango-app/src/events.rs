use std::ops::ControlFlow;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tango_core::{Lookup, QuizSession, Speaker};
use tango_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod answer;
pub mod lookup;
pub mod navigation;
pub mod review;
pub mod speak;
pub mod startup;

use answer::handle_selection;
use lookup::handle_lookup_mistake;
use navigation::{handle_close_review, handle_next, handle_reset};
use review::{handle_delete_mistake, handle_open_review};
use speak::{speak_current, speak_mistake};
use startup::load_session;

/// App's main loop, owns the quiz session
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    speaker: Arc<dyn Speaker>,
    lookup: Option<Arc<dyn Lookup>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = load_session(&state, &app_to_ui_tx).await?;

    app_to_ui_tx.send(AppEvent::BackendReady).await?;
    speak_current(&session, speaker.as_ref());
    show_question(&session, None, &app_to_ui_tx).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
        let flow = handle_events(
            &mut session,
            speaker.as_ref(),
            lookup.as_ref(),
            &app_to_ui_tx,
            event,
        )
        .await?;
        if flow.is_break() {
            tracing::info!("[EVENT_LOOP] Quit requested");
            break;
        }
    }

    Ok(())
}

async fn handle_events(
    session: &mut QuizSession,
    speaker: &dyn Speaker,
    lookup: Option<&Arc<dyn Lookup>>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    let AppEvent::UiEvent(event) = event else {
        // App-to-UI events, nothing to do here
        return Ok(ControlFlow::Continue(()));
    };

    match event {
        UiEvent::SelectOption(index) => {
            handle_selection(session, index, speaker, app_to_ui_tx).await?;
        }
        UiEvent::Next => {
            handle_next(session, speaker, app_to_ui_tx).await?;
        }
        UiEvent::Reset => {
            handle_reset(session, speaker, app_to_ui_tx).await?;
        }
        UiEvent::Speak => speak_current(session, speaker),
        UiEvent::OpenReview => {
            handle_open_review(session, app_to_ui_tx).await?;
        }
        UiEvent::CloseReview => {
            handle_close_review(session, app_to_ui_tx).await?;
        }
        UiEvent::DeleteMistake(index) => {
            handle_delete_mistake(session, index, app_to_ui_tx).await?;
        }
        UiEvent::SpeakMistake(index) => speak_mistake(session, index, speaker),
        UiEvent::LookupMistake(index) => {
            handle_lookup_mistake(session, index, lookup, app_to_ui_tx).await?;
        }
        UiEvent::Quit => return Ok(ControlFlow::Break(())),
    }

    Ok(ControlFlow::Continue(()))
}

/// Send the current question (or its absence) with the score, and the outcome
/// of the answer that produced it if there was one
pub(crate) async fn show_question(
    session: &QuizSession,
    last: Option<bool>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ShowQuestion {
            question: session.view(),
            score: session.score().summary(),
            last,
        })
        .await?;
    Ok(())
}
