use std::collections::BTreeSet;

use mint_types::FlashcardPayload;
use serde::{Deserialize, Serialize};

/// How a chosen translation is laid out on the back of a card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteTemplate {
    pub translation_label: String,
    pub alternatives_label: String,
    pub tags: Vec<String>,
}

impl NoteTemplate {
    pub fn new(translation_label: String, alternatives_label: String, tags: Vec<String>) -> Self {
        Self {
            translation_label,
            alternatives_label,
            tags,
        }
    }

    /// Rendered list of the remaining alternatives, empty when there are none
    pub fn format_alternatives(&self, alternatives: &[String]) -> String {
        if alternatives.is_empty() {
            return String::new();
        }

        let items: String = alternatives
            .iter()
            .map(|alt| format!("<li>{}</li>", alt))
            .collect();

        format!("<br>{}:<br><ul>{}</ul>", self.alternatives_label, items)
    }

    /// Format the back of the card
    pub fn format_back(&self, chosen: &str, alternatives: &[String]) -> String {
        format!(
            "{}: <strong>{}</strong>{}",
            self.translation_label,
            chosen,
            self.format_alternatives(alternatives)
        )
    }

    pub fn payload(
        &self,
        original: &str,
        chosen: &str,
        alternatives: &[String],
        image_url: String,
    ) -> FlashcardPayload {
        FlashcardPayload {
            front: original.to_string(),
            back: self.format_back(chosen, alternatives),
            description: self.format_alternatives(alternatives),
            image_url,
            tags: self.tags.iter().cloned().collect::<BTreeSet<_>>(),
        }
    }
}

impl Default for NoteTemplate {
    fn default() -> Self {
        Self {
            translation_label: "Превод".to_string(),
            alternatives_label: "Альтернативы".to_string(),
            tags: vec!["min-translator".to_string()],
        }
    }
}
