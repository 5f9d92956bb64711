use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_orientation() -> String {
    "squarish".to_string()
}

fn default_content_filter() -> String {
    "high".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ImageSearchConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Unsplash access key, sent as `client_id`
    #[serde(default)]
    pub access_key: String,
    #[serde(default = "default_orientation")]
    pub orientation: String,
    #[serde(default = "default_content_filter")]
    pub content_filter: String,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            access_key: String::new(),
            orientation: default_orientation(),
            content_filter: default_content_filter(),
        }
    }
}
