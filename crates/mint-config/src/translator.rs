use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "http://127.0.0.1:5000/translate".to_string()
}

fn default_from_lang() -> String {
    "auto".to_string()
}

fn default_to_lang() -> String {
    "ru".to_string()
}

fn default_alternatives() -> u32 {
    4
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranslatorConfig {
    /// LibreTranslate-compatible `/translate` endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    /// Number of alternative renderings to ask for
    #[serde(default = "default_alternatives")]
    pub alternatives: u32,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            alternatives: default_alternatives(),
        }
    }
}
