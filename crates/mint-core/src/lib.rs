use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod document;
pub mod error;
pub mod flashcard;
pub mod popup;
pub mod preprocess;
pub mod render;
pub mod selection;
pub mod style;
pub mod surface;

#[cfg(test)]
mod tests;

pub use document::{Document, ListenerGuard};
pub use error::PopupError;
pub use flashcard::CardSaver;
pub use popup::{PopupManager, PopupSettings, SaveRequest};
pub use render::{LineKind, PopupLine, PopupView, SaveChoice};
pub use selection::{SelectionController, SelectionSettings};
pub use surface::PopupSurface;

/// Nothing we guard can be left half-updated by a panic, so poisoning is ignored
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
