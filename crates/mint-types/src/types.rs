use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Events reported by the page relay
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    Gesture(PageGesture),
    Click { target: ClickTarget },
}

/// Page coordinates (scroll offset included)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    DoubleClick,
    MouseUp,
}

/// A raw browser gesture together with a snapshot of the selection at that moment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGesture {
    pub kind: GestureKind,
    pub pointer: Point,
    #[serde(default)]
    pub alt_key: bool,
    #[serde(default)]
    pub selection: String,
    /// Top-left of the selection range's bounding rect, `None` without a range
    #[serde(default)]
    pub selection_rect: Option<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    DoubleClick,
    ModifierClick,
}

/// A gesture that passed the empty-selection check and has an anchor
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    pub text: String,
    pub anchor: Point,
    pub trigger: TriggerKind,
}

/// Popup generation number, unique per `open`
pub type PopupId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickTarget {
    /// Anywhere on the host page outside our popup
    Page,
    Popup {
        popup: PopupId,
        #[serde(default)]
        line: Option<usize>,
    },
}

impl ClickTarget {
    pub fn is_inside(&self, id: PopupId) -> bool {
        matches!(self, ClickTarget::Popup { popup, .. } if *popup == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub primary: String,
    pub alternatives: Vec<String>,
}

impl TranslationResult {
    pub fn new(primary: impl Into<String>, alternatives: Vec<String>) -> Self {
        Self {
            primary: primary.into(),
            alternatives,
        }
    }
}

/// Note content handed to the flashcard store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardPayload {
    pub front: String,
    pub back: String,
    /// Raw rendered alternatives list, empty when there are none
    pub description: String,
    pub image_url: String,
    pub tags: BTreeSet<String>,
}
