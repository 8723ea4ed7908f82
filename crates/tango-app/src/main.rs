use std::sync::Arc;

use clap::Parser;
use tango_core::{Lookup, Speaker};
use tokio::signal;

pub mod cli;
pub mod controller;
pub mod events;
pub mod logging;
pub mod profile;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let args = Args::parse();
    let mut config = profile::load_config(args.config.as_deref())?;
    args.apply(&mut config);

    if let Some(path) = &args.save_profile {
        profile::save_profile(path, "main", &config)?;
        return Ok(());
    }

    let speaker: Arc<dyn Speaker> = Arc::from(tango_io::speaker_from_config(&config.speech));
    let lookup: Option<Arc<dyn Lookup>> = tango_io::lookup_from_config(&config.lookup).map(Arc::from);
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(speaker, lookup);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("task failed during shutdown: {e}"),
            Err(e) => tracing::error!("task panicked during shutdown: {e}"),
        }
    }

    Ok(())
}
