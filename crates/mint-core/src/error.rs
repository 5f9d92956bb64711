use mint_types::PopupId;

#[derive(Debug, thiserror::Error)]
pub enum PopupError {
    #[error("Failed to render popup {id}: {reason}")]
    Render { id: PopupId, reason: String },
}
