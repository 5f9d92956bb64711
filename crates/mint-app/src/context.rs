use std::sync::Arc;
use std::time::Duration;

use mint_anki::{AnkiConnectClient, FlashcardStore, NoteTemplate};
use mint_config::Config;
use mint_core::{
    CardSaver, PopupManager, PopupSettings, PopupSurface, SelectionController, SelectionSettings,
};
use mint_images::{ImageSearch, UnsplashClient};
use mint_translator::{LibreTranslator, Translator};
use mint_types::Point;

use crate::state::AppState;

/// External collaborators the core talks to
pub struct Services {
    pub translator: Arc<dyn Translator>,
    pub images: Arc<dyn ImageSearch>,
    pub store: Arc<dyn FlashcardStore>,
    pub surface: Arc<dyn PopupSurface>,
}

impl Services {
    /// HTTP clients for the configured endpoints
    pub fn from_config(config: &Config, surface: Arc<dyn PopupSurface>) -> Self {
        let translator = LibreTranslator::new(
            config.translator.api_url.clone(),
            config.translator.alternatives,
        );
        let images = UnsplashClient::new(
            config.images.api_url.clone(),
            config.images.access_key.clone(),
            config.images.orientation.clone(),
            config.images.content_filter.clone(),
        );
        let store = AnkiConnectClient::new(
            config.anki.url.clone(),
            config.anki.deck.clone(),
            config.anki.model.clone(),
            config.anki.duplicate_scope.clone(),
        );

        if config.images.access_key.is_empty() {
            tracing::warn!("UNSPLASH_ACCESS_KEY not set, cards will have no image");
        }

        tracing::debug!(
            "Translating {} -> {} via {}",
            config.translator.from_lang,
            config.translator.to_lang,
            config.translator.api_url
        );

        Self {
            translator: Arc::new(translator),
            images: Arc::new(images),
            store: Arc::new(store),
            surface,
        }
    }
}

/// Bundles what the event handlers need
#[derive(Clone)]
pub struct AppContext {
    pub state: Arc<AppState>,
    pub popups: PopupManager,
    pub selection: SelectionController,
    pub saver: CardSaver,
}

impl AppContext {
    pub async fn new(state: Arc<AppState>, services: Services) -> Self {
        let config = state.config.read().await;

        let popups = PopupManager::new(
            services.surface,
            services.store.clone(),
            PopupSettings {
                target_lang: config.translator.to_lang.clone(),
                timeout: Duration::from_millis(config.popup.timeout_ms),
            },
        );

        let selection = SelectionController::new(
            services.translator,
            popups.clone(),
            SelectionSettings {
                from_lang: config.translator.from_lang.clone(),
                to_lang: config.translator.to_lang.clone(),
                offset: Point::new(config.popup.offset_x, config.popup.offset_y),
            },
        );

        let template = NoteTemplate::new(
            config.anki.translation_label.clone(),
            config.anki.alternatives_label.clone(),
            config.anki.tags.clone(),
        );
        let saver = CardSaver::new(services.images, services.store, popups.clone(), template);

        drop(config);

        Self {
            state,
            popups,
            selection,
            saver,
        }
    }
}
