use mint_types::PageGesture;

use crate::context::AppContext;

pub fn handle_selection(ctx: &AppContext, gesture: &PageGesture) {
    if ctx.selection.handle_gesture(gesture).is_none() {
        tracing::trace!("Gesture ignored: {:?}", gesture.kind);
    }
}
