mod client;
mod template;

pub use client::AnkiConnectClient;
pub use template::NoteTemplate;

use mint_types::FlashcardPayload;

/// Flashcard backend the popup saves into
#[async_trait::async_trait]
pub trait FlashcardStore: Send + Sync {
    /// Liveness probe, returns the API version
    async fn check_connection(&self) -> Result<u32, AnkiError>;

    /// Create one note, returns its id
    async fn add_note(&self, payload: &FlashcardPayload) -> Result<u64, AnkiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnkiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("AnkiConnect error: {0}")]
    Rejected(String),

    #[error("AnkiConnect returned null result")]
    EmptyResult,
}
