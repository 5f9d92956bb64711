use mint_types::PopupId;

use crate::error::PopupError;
use crate::render::PopupView;

/// Where popups are drawn
pub trait PopupSurface: Send + Sync {
    /// Attach the popup element; on error nothing may remain attached
    fn mount(&self, view: &PopupView) -> Result<(), PopupError>;

    /// Remove the popup element, unknown ids are ignored
    fn unmount(&self, id: PopupId);
}
