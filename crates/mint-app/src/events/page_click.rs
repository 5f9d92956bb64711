use mint_types::ClickTarget;

use crate::context::AppContext;

pub fn handle_page_click(ctx: &AppContext, target: &ClickTarget) {
    let Some(request) = ctx.popups.click(target) else {
        return;
    };

    tracing::info!(
        "Saving '{}' -> '{}' ({} alternatives)",
        request.original,
        request.choice.chosen,
        request.choice.remaining.len()
    );

    ctx.saver.spawn(request);
}
