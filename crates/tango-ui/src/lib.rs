use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tango_config::Config;
use tango_types::{AppEvent, UiEvent};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

pub mod bridge;
pub mod events;
pub mod input;
pub mod render;
pub mod state;

use self::bridge::spawn_stdin_reader;
use self::events::handle_events;
use self::input::{Command, parse_command};
use self::render::{REVIEW_HELP, quiz_help};
use self::state::{Screen, UiState};

/// Terminal UI: draws app events to stdout and turns stdin lines into UI events
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let color = config.read().await.ui.color;
    let mut state = UiState::new(color);

    let lines = spawn_stdin_reader();
    let mut stdout = tokio::io::stdout();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[UI] Cancelled");
                break;
            }
            event = app_to_ui_rx.recv() => {
                let event = event?;
                if let Some(text) = handle_events(event, &mut state) {
                    stdout.write_all(text.as_bytes()).await?;
                    stdout.write_all(b"> ").await?;
                    stdout.flush().await?;
                }
            }
            line = lines.recv() => {
                let Ok(line) = line else {
                    tracing::info!("[UI] Input closed");
                    let _ = ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Quit)).await;
                    break;
                };

                match parse_command(&state, &line) {
                    Command::Send(event) => {
                        let quit = event == UiEvent::Quit;
                        ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                        if quit {
                            break;
                        }
                    }
                    Command::Help => {
                        let help = match state.screen {
                            Screen::Quiz => quiz_help(state.option_count()),
                            Screen::Review => REVIEW_HELP.to_string(),
                        };
                        stdout.write_all(format!("{help}\n> ").as_bytes()).await?;
                        stdout.flush().await?;
                    }
                    Command::Invalid(msg) => {
                        stdout.write_all(format!("{msg}\n> ").as_bytes()).await?;
                        stdout.flush().await?;
                    }
                    Command::Empty => {}
                }
            }
        }
    }

    Ok(())
}
