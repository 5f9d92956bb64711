//! Ownership of the single on-page popup.
//!
//! A popup is one bundle: the mounted element, its auto-close timer and its
//! outside-click listener. The bundle lives in [`PopupInstance`] and is
//! released as a whole when the instance is dropped, so every close path
//! (explicit close, outside click, timeout, superseding popup, successful
//! save) tears down the same three resources.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use mint_anki::FlashcardStore;
use mint_types::{ClickTarget, Point, PopupId, TranslationResult};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::document::{Document, ListenerGuard};
use crate::error::PopupError;
use crate::lock;
use crate::render::{Rendered, SaveChoice, render_popup};
use crate::surface::PopupSurface;

#[derive(Debug, Clone)]
pub struct PopupSettings {
    /// Shown in the title as `[lang]`
    pub target_lang: String,
    pub timeout: Duration,
}

/// A click on a save line, resolved against the popup it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub popup: PopupId,
    pub original: String,
    pub choice: SaveChoice,
}

#[derive(Clone)]
pub struct PopupManager {
    inner: Arc<Inner>,
}

struct Inner {
    surface: Arc<dyn PopupSurface>,
    store: Arc<dyn FlashcardStore>,
    document: Document,
    settings: PopupSettings,
    current: Mutex<Option<PopupInstance>>,
    generation: AtomicU64,
    anki_available: AtomicBool,
}

// Field order is teardown order: element, timer, listener.
struct PopupInstance {
    id: PopupId,
    original: String,
    actions: Vec<Option<SaveChoice>>,
    _element: MountedElement,
    _timer: DropGuard,
    _outside_click: ListenerGuard,
}

impl PopupInstance {
    fn save_request(&self, line: usize) -> Option<SaveRequest> {
        let choice = self.actions.get(line)?.clone()?;

        Some(SaveRequest {
            popup: self.id,
            original: self.original.clone(),
            choice,
        })
    }
}

struct MountedElement {
    surface: Arc<dyn PopupSurface>,
    id: PopupId,
}

impl MountedElement {
    fn mount(surface: Arc<dyn PopupSurface>, rendered: &Rendered) -> Result<Self, PopupError> {
        surface.mount(&rendered.view)?;

        Ok(Self {
            surface,
            id: rendered.view.id,
        })
    }
}

impl Drop for MountedElement {
    fn drop(&mut self) {
        self.surface.unmount(self.id);
    }
}

impl PopupManager {
    pub fn new(
        surface: Arc<dyn PopupSurface>,
        store: Arc<dyn FlashcardStore>,
        settings: PopupSettings,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                surface,
                store,
                document: Document::new(),
                settings,
                current: Mutex::new(None),
                generation: AtomicU64::new(0),
                anki_available: AtomicBool::new(false),
            }),
        }
    }

    /// Replace whatever is showing with a popup for `translation` at `position`
    pub async fn open(
        &self,
        original: &str,
        translation: &TranslationResult,
        position: Point,
    ) -> Result<PopupId, PopupError> {
        self.close();

        let anki_available = self.probe_anki().await;

        let id = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let rendered = render_popup(
            id,
            translation,
            &self.inner.settings.target_lang,
            position,
            anki_available,
        );

        // Another open may have finished while we were probing. Teardown and
        // mount happen under one lock with no await in between.
        let mut current = lock(&self.inner.current);
        if let Some(previous) = current.take() {
            tracing::debug!("Popup {} superseded by {}", previous.id, id);
        }

        let element = MountedElement::mount(self.inner.surface.clone(), &rendered)?;
        let timer = self.arm_timeout(id);
        let outside_click = self.listen_outside_clicks(id);

        *current = Some(PopupInstance {
            id,
            original: original.to_string(),
            actions: rendered.actions,
            _element: element,
            _timer: timer,
            _outside_click: outside_click,
        });

        tracing::debug!("Popup {} opened (anki: {})", id, anki_available);
        Ok(id)
    }

    /// Tear down the current popup, if any
    pub fn close(&self) {
        let previous = lock(&self.inner.current).take();

        if let Some(popup) = previous {
            tracing::debug!("Closing popup {}", popup.id);
        }
    }

    /// Close `id` only if it is still the current popup
    pub fn close_popup(&self, id: PopupId) -> bool {
        let previous = {
            let mut current = lock(&self.inner.current);
            match current.as_ref() {
                Some(popup) if popup.id == id => current.take(),
                _ => None,
            }
        };

        previous.is_some()
    }

    /// Route a page click: resolve a save action on the current popup, then
    /// run the document listeners
    pub fn click(&self, target: &ClickTarget) -> Option<SaveRequest> {
        let request = match *target {
            ClickTarget::Popup {
                popup,
                line: Some(line),
            } => {
                let current = lock(&self.inner.current);
                current
                    .as_ref()
                    .filter(|instance| instance.id == popup)
                    .and_then(|instance| instance.save_request(line))
            }
            _ => None,
        };

        self.inner.document.dispatch_click(target);
        request
    }

    pub fn current_id(&self) -> Option<PopupId> {
        lock(&self.inner.current).as_ref().map(|popup| popup.id)
    }

    pub fn is_open(&self) -> bool {
        self.current_id().is_some()
    }

    /// Result of the last liveness probe
    pub fn anki_available(&self) -> bool {
        self.inner.anki_available.load(Ordering::SeqCst)
    }

    pub fn document(&self) -> &Document {
        &self.inner.document
    }

    async fn probe_anki(&self) -> bool {
        let available = match self.inner.store.check_connection().await {
            Ok(version) => version > 0,
            Err(e) => {
                tracing::warn!("AnkiConnect not available: {}", e);
                false
            }
        };

        self.inner.anki_available.store(available, Ordering::SeqCst);
        available
    }

    fn arm_timeout(&self, id: PopupId) -> DropGuard {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let manager = Arc::downgrade(&self.inner);
        let timeout = self.inner.settings.timeout;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(timeout) => {
                    tracing::debug!("Popup {} timed out", id);
                    close_from(&manager, id);
                }
            }
        });

        token.drop_guard()
    }

    fn listen_outside_clicks(&self, id: PopupId) -> ListenerGuard {
        let manager = Arc::downgrade(&self.inner);

        self.inner.document.add_click_listener(move |target| {
            if !target.is_inside(id) {
                tracing::debug!("Click outside popup {}", id);
                close_from(&manager, id);
            }
        })
    }
}

/// Closers only ever act on the popup that armed them
fn close_from(manager: &Weak<Inner>, id: PopupId) {
    if let Some(inner) = manager.upgrade() {
        PopupManager { inner }.close_popup(id);
    }
}
