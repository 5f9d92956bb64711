use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use mint_core::PopupManager;
use mint_io::PageCommand;
use mint_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Keep the page bridge connected until cancelled
pub async fn bridge_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
    command_rx: AsyncReceiver<PageCommand>,
    popups: PopupManager,
) -> anyhow::Result<()> {
    let (ws_url, reconnect_delay) = {
        let config = state.config.read().await;
        (
            config.network.ws_url.clone(),
            Duration::from_millis(config.network.reconnect_delay_ms),
        )
    };

    loop {
        tracing::info!("Starting page bridge on {}", ws_url);

        tokio::select! {
            result = mint_io::start_ws_bridge(&ws_url, event_tx.clone(), command_rx.clone()) => {
                if let Err(e) = result {
                    tracing::error!("Page bridge error: {}", e);
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("Page bridge stopping");
                break;
            }
        }

        // A reconnected page starts without our popup
        popups.close();
        drain(&command_rx);

        tokio::select! {
            _ = tokio::time::sleep(reconnect_delay) => {}
            _ = cancel.cancelled() => {
                tracing::info!("Page bridge stopping");
                break;
            }
        }
    }

    Ok(())
}

/// Drop commands meant for the old connection
fn drain(command_rx: &AsyncReceiver<PageCommand>) {
    let mut dropped = 0;
    while let Ok(Some(_)) = command_rx.try_recv() {
        dropped += 1;
    }

    if dropped > 0 {
        tracing::debug!("Dropped {} stale page commands", dropped);
    }
}
