use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;

/// Handle `boxd sync`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.service.is_synced_replica() {
        bail!("not a synced replica: configure [turso] url and auth_token first");
    }
    ctx.service.sync().await?;
    output::output(&serde_json::json!({ "synced": true }), flags.format)
}
