use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{LanguageCode, MISSING_TRANSLATION, TranslateError, Translation, Translator};

/// Client for a LibreTranslate `/translate` endpoint
#[derive(Clone)]
pub struct LibreTranslator {
    client: reqwest::Client,
    api_url: String,
    alternatives: u32,
}

impl LibreTranslator {
    pub fn new(api_url: String, alternatives: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            alternatives,
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    alternatives: u32,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: Option<String>,
    /// Some servers send `null` instead of omitting the field
    #[serde(default)]
    alternatives: Option<Vec<String>>,
}

impl TranslateResponse {
    fn into_translation(self) -> Translation {
        let text = match self.translated_text {
            Some(text) if !text.is_empty() => text,
            _ => {
                tracing::warn!("Translation response had no translatedText");
                MISSING_TRANSLATION.to_string()
            }
        };

        Translation {
            text,
            alternatives: self.alternatives.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let request = TranslateRequest {
            q: text,
            source: &from,
            target: &to,
            format: "text",
            alternatives: self.alternatives,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: TranslateResponse = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Ok(body.into_translation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Translation {
        let body: TranslateResponse = serde_json::from_str(raw).unwrap();
        body.into_translation()
    }

    #[test]
    fn reads_text_and_alternatives() {
        let t = parse(r#"{"translatedText":"привет","alternatives":["здравствуй","хай"]}"#);

        assert_eq!(t.text, "привет");
        assert_eq!(t.alternatives, vec!["здравствуй", "хай"]);
    }

    #[test]
    fn missing_text_becomes_sentinel() {
        let t = parse(r#"{"detectedLanguage":{"confidence":90,"language":"en"}}"#);

        assert_eq!(t.text, MISSING_TRANSLATION);
        assert!(t.alternatives.is_empty());
    }

    #[test]
    fn null_alternatives_is_empty() {
        let t = parse(r#"{"translatedText":"привет","alternatives":null}"#);

        assert_eq!(t.text, "привет");
        assert!(t.alternatives.is_empty());
    }

    #[test]
    fn request_body_shape() {
        let request = TranslateRequest {
            q: "hello",
            source: "auto",
            target: "ru",
            format: "text",
            alternatives: 4,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "q": "hello",
                "source": "auto",
                "target": "ru",
                "format": "text",
                "alternatives": 4
            })
        );
    }
}
