use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://127.0.0.1:8765".to_string()
}

fn default_deck() -> String {
    "Default".to_string()
}

fn default_model() -> String {
    "Basic".to_string()
}

fn default_tags() -> Vec<String> {
    vec!["min-translator".to_string()]
}

fn default_duplicate_scope() -> String {
    "deck".to_string()
}

fn default_translation_label() -> String {
    "Превод".to_string()
}

fn default_alternatives_label() -> String {
    "Альтернативы".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AnkiConfig {
    /// AnkiConnect URL
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_deck")]
    pub deck: String,
    /// Note type, must have Front/Back/Description/IMGurl fields
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    /// Where AnkiConnect looks for duplicates
    #[serde(default = "default_duplicate_scope")]
    pub duplicate_scope: String,
    #[serde(default = "default_translation_label")]
    pub translation_label: String,
    #[serde(default = "default_alternatives_label")]
    pub alternatives_label: String,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            deck: default_deck(),
            model: default_model(),
            tags: default_tags(),
            duplicate_scope: default_duplicate_scope(),
            translation_label: default_translation_label(),
            alternatives_label: default_alternatives_label(),
        }
    }
}
