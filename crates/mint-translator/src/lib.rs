mod libre;

pub use libre::LibreTranslator;

pub type LanguageCode = String;

/// Shown when the service answered but had no translated text
pub const MISSING_TRANSLATION: &str = "Translation error";
/// Shown when the request itself failed
pub const REQUEST_FAILED: &str = "Translation request error";

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub alternatives: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
