use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tango_config::Config;
use tango_types::AppEvent;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tango_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config, cancel).await
}
