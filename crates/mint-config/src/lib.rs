use std::env;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::images::ImageSearchConfig;
use self::network::NetworkConfig;
use self::popup::PopupConfig;
use self::translator::TranslatorConfig;

pub mod anki;
pub mod images;
pub mod network;
pub mod popup;
pub mod translator;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,
    pub images: ImageSearchConfig,
    pub anki: AnkiConfig,
    pub popup: PopupConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(url) = lookup("MINT_TRANSLATE_URL") {
            config.translator.api_url = url;
        }
        if let Some(lang) = lookup("MINT_TARGET_LANG") {
            config.translator.to_lang = lang;
        }
        if let Some(url) = lookup("MINT_ANKI_URL") {
            config.anki.url = url;
        }
        if let Some(url) = lookup("MINT_UNSPLASH_URL") {
            config.images.api_url = url;
        }
        if let Some(key) = lookup("UNSPLASH_ACCESS_KEY") {
            config.images.access_key = key;
        }
        if let Some(url) = lookup("MINT_WS_URL") {
            config.network.ws_url = url;
        }
        if let Some(timeout) = lookup("MINT_POPUP_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            config.popup.timeout_ms = timeout;
        }

        config
    }
}
