use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;

/// Handle `boxd whoami`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = match ctx.service.current_user() {
        Some(user) => serde_json::json!({
            "user_id": user.user_id,
            "email": user.email,
            "synced": ctx.service.is_synced_replica(),
        }),
        None => serde_json::json!({
            "user_id": null,
            "email": null,
            "synced": ctx.service.is_synced_replica(),
        }),
    };
    output::output(&response, flags.format)
}
