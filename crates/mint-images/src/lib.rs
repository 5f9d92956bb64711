mod unsplash;

pub use unsplash::UnsplashClient;

/// Illustrative image lookup
#[async_trait::async_trait]
pub trait ImageSearch: Send + Sync {
    /// URL of the best match for `query`, `None` when nothing was found
    async fn search(&self, query: &str) -> Result<Option<String>, ImageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}
