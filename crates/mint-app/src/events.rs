use kanal::AsyncReceiver;
use mint_types::AppEvent;

use crate::context::AppContext;

pub mod page_click;
pub mod selection;

use page_click::handle_page_click;
use selection::handle_selection;

/// App's main loop
pub async fn event_loop(ctx: AppContext, page_to_app_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");

    while let Ok(event) = page_to_app_rx.recv().await {
        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
        handle_event(&ctx, event);
    }

    tracing::info!("[EVENT_LOOP] Page channel closed");
    Ok(())
}

/// Never awaits: network work is spawned so gestures are not serialized
pub fn handle_event(ctx: &AppContext, event: AppEvent) {
    match event {
        AppEvent::Gesture(gesture) => handle_selection(ctx, &gesture),
        AppEvent::Click { target } => handle_page_click(ctx, &target),
    }
}
