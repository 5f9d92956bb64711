use std::sync::Arc;

use mint_anki::{AnkiError, FlashcardStore, NoteTemplate};
use mint_images::ImageSearch;
use tokio::task::JoinHandle;

use crate::popup::{PopupManager, SaveRequest};

/// Saves a chosen translation as a flashcard
#[derive(Clone)]
pub struct CardSaver {
    images: Arc<dyn ImageSearch>,
    store: Arc<dyn FlashcardStore>,
    popups: PopupManager,
    template: NoteTemplate,
}

impl CardSaver {
    pub fn new(
        images: Arc<dyn ImageSearch>,
        store: Arc<dyn FlashcardStore>,
        popups: PopupManager,
        template: NoteTemplate,
    ) -> Self {
        Self {
            images,
            store,
            popups,
            template,
        }
    }

    pub fn spawn(&self, request: SaveRequest) -> JoinHandle<Result<u64, AnkiError>> {
        let saver = self.clone();
        tokio::spawn(async move { saver.save(request).await })
    }

    /// On success the originating popup is closed. On failure it stays open
    /// so the user can click again.
    pub async fn save(&self, request: SaveRequest) -> Result<u64, AnkiError> {
        let image_url = self.image_for(&request.original).await;

        let payload = self.template.payload(
            &request.original,
            &request.choice.chosen,
            &request.choice.remaining,
            image_url,
        );

        match self.store.add_note(&payload).await {
            Ok(note_id) => {
                tracing::info!("Added card to Anki: note_id={}", note_id);
                self.popups.close_popup(request.popup);
                Ok(note_id)
            }
            Err(e) => {
                tracing::error!("Failed to add card to Anki: {}", e);
                Err(e)
            }
        }
    }

    async fn image_for(&self, query: &str) -> String {
        match self.images.search(query).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                tracing::debug!("No image found for '{}'", query);
                String::new()
            }
            Err(e) => {
                tracing::warn!("Image search failed: {}", e);
                String::new()
            }
        }
    }
}
