use std::sync::Arc;

use mint_translator::{LanguageCode, REQUEST_FAILED, Translator};
use mint_types::{GestureKind, PageGesture, Point, SelectionEvent, TranslationResult, TriggerKind};
use tokio::task::JoinHandle;

use crate::popup::PopupManager;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

#[derive(Debug, Clone)]
pub struct SelectionSettings {
    pub from_lang: LanguageCode,
    pub to_lang: LanguageCode,
    /// Added to the anchor so the popup doesn't cover the selection
    pub offset: Point,
}

/// Turn a raw gesture into a selection event, `None` when nothing should happen
pub fn selection_event(
    gesture: &PageGesture,
    offset: Point,
    preprocessor: &impl Preprocessor,
) -> Option<SelectionEvent> {
    let text = preprocessor.process(&gesture.selection);
    if text.is_empty() {
        return None;
    }

    let (anchor, trigger) = match gesture.kind {
        GestureKind::DoubleClick => (gesture.pointer, TriggerKind::DoubleClick),
        GestureKind::MouseUp if gesture.alt_key => {
            (gesture.selection_rect?, TriggerKind::ModifierClick)
        }
        GestureKind::MouseUp => return None,
    };

    Some(SelectionEvent {
        text,
        anchor: anchor.offset(offset),
        trigger,
    })
}

/// Gesture → translation → popup pipeline
///
/// Gestures are not serialized: two translations in flight race and the one
/// that resolves last owns the popup.
#[derive(Clone)]
pub struct SelectionController {
    translator: Arc<dyn Translator>,
    popups: PopupManager,
    settings: SelectionSettings,
}

impl SelectionController {
    pub fn new(
        translator: Arc<dyn Translator>,
        popups: PopupManager,
        settings: SelectionSettings,
    ) -> Self {
        Self {
            translator,
            popups,
            settings,
        }
    }

    /// Start the pipeline in the background, returns immediately
    pub fn handle_gesture(&self, gesture: &PageGesture) -> Option<JoinHandle<()>> {
        let event = selection_event(gesture, self.settings.offset, &DefaultPreprocessor)?;
        tracing::debug!(
            "Selection via {:?}: {} chars at ({}, {})",
            event.trigger,
            event.text.len(),
            event.anchor.x,
            event.anchor.y
        );

        let controller = self.clone();
        Some(tokio::spawn(async move { controller.show(event).await }))
    }

    pub async fn show(&self, event: SelectionEvent) {
        let translation = self.translate(&event.text).await;

        if let Err(e) = self
            .popups
            .open(&event.text, &translation, event.anchor)
            .await
        {
            tracing::warn!("Popup not shown: {}", e);
        }
    }

    /// Never fails: transport errors become a fixed fallback line
    pub async fn translate(&self, text: &str) -> TranslationResult {
        let from = self.settings.from_lang.clone();
        let to = self.settings.to_lang.clone();

        match self.translator.translate(text, from, to).await {
            Ok(translation) => TranslationResult::new(translation.text, translation.alternatives),
            Err(e) => {
                tracing::warn!("Translation failed: {}", e);
                TranslationResult::new(REQUEST_FAILED, vec![])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSET: Point = Point { x: 10.0, y: 20.0 };

    fn gesture(kind: GestureKind, alt_key: bool, selection: &str) -> PageGesture {
        PageGesture {
            kind,
            pointer: Point::new(100.0, 200.0),
            alt_key,
            selection: selection.to_string(),
            selection_rect: Some(Point::new(40.0, 60.0)),
        }
    }

    #[test]
    fn double_click_anchors_at_pointer() {
        let event =
            selection_event(&gesture(GestureKind::DoubleClick, false, " word "), OFFSET, &DefaultPreprocessor)
                .unwrap();

        assert_eq!(event.text, "word");
        assert_eq!(event.anchor, Point::new(110.0, 220.0));
        assert_eq!(event.trigger, TriggerKind::DoubleClick);
    }

    #[test]
    fn alt_mouse_up_anchors_at_selection_rect() {
        let event =
            selection_event(&gesture(GestureKind::MouseUp, true, "word"), OFFSET, &DefaultPreprocessor)
                .unwrap();

        assert_eq!(event.anchor, Point::new(50.0, 80.0));
        assert_eq!(event.trigger, TriggerKind::ModifierClick);
    }

    #[test]
    fn plain_mouse_up_is_ignored() {
        let g = gesture(GestureKind::MouseUp, false, "word");
        assert!(selection_event(&g, OFFSET, &DefaultPreprocessor).is_none());
    }

    #[test]
    fn alt_mouse_up_without_range_is_ignored() {
        let mut g = gesture(GestureKind::MouseUp, true, "word");
        g.selection_rect = None;

        assert!(selection_event(&g, OFFSET, &DefaultPreprocessor).is_none());
    }

    #[test]
    fn blank_selection_is_ignored() {
        for text in ["", "   ", "\n\t "] {
            let g = gesture(GestureKind::DoubleClick, false, text);
            assert!(selection_event(&g, OFFSET, &DefaultPreprocessor).is_none());
        }
    }
}
