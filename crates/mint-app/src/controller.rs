use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use mint_io::{PageCommand, WsSurface};
use mint_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::context::{AppContext, Services};
use crate::events::event_loop;
use crate::io::bridge_io;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub page_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_page: (AsyncSender<PageCommand>, AsyncReceiver<PageCommand>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            page_to_app: kanal::bounded_async(64), // gestures and clicks
            app_to_page: kanal::unbounded_async(), // popup mount/unmount, must not block
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Popups are drawn on the page through the bridge
    pub fn surface(&self) -> Arc<WsSurface> {
        Arc::new(WsSurface::new(self.channels.app_to_page.0.clone()))
    }

    pub async fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let services = {
            let config = self.state.config.read().await;
            Services::from_config(&config, self.surface())
        };
        let ctx = AppContext::new(self.state.clone(), services).await;

        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(ctx.clone(), self.channels.page_to_app.1.clone()));

        // Page bridge
        tasks.spawn(bridge_io(
            self.state.clone(),
            self.cancel_token.child_token(),
            self.channels.page_to_app.0.clone(),
            self.channels.app_to_page.1.clone(),
            ctx.popups.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
