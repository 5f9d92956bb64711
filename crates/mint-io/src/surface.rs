use kanal::AsyncSender;
use mint_core::{PopupError, PopupSurface, PopupView};
use mint_types::PopupId;
use serde::Serialize;

/// Instructions for the page relay
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageCommand {
    Mount { popup: PopupView },
    Unmount { popup: PopupId },
}

/// Popup surface that forwards to the page over the bridge
#[derive(Clone)]
pub struct WsSurface {
    tx: AsyncSender<PageCommand>,
}

impl WsSurface {
    pub fn new(tx: AsyncSender<PageCommand>) -> Self {
        Self { tx }
    }
}

impl PopupSurface for WsSurface {
    fn mount(&self, view: &PopupView) -> Result<(), PopupError> {
        let command = PageCommand::Mount {
            popup: view.clone(),
        };

        match self.tx.try_send(command) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PopupError::Render {
                id: view.id,
                reason: "page bridge is full".to_string(),
            }),
            Err(e) => Err(PopupError::Render {
                id: view.id,
                reason: e.to_string(),
            }),
        }
    }

    fn unmount(&self, id: PopupId) {
        if let Err(e) = self.tx.try_send(PageCommand::Unmount { popup: id }) {
            tracing::warn!("Failed to unmount popup {}: {}", id, e);
        }
    }
}
