use anyhow::Context;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use boxd_core::responses::ProfileResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AvatarCommands, ProfileCommands};
use crate::context::AppContext;
use crate::output;

/// Handle `boxd profile`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => {
            let profile = ctx.service.get_or_create_profile().await?;
            output::output(&ProfileResponse { profile }, flags.format)
        }
        ProfileCommands::Username { name } => {
            let profile = ctx.service.set_username(name).await?;
            output::output(&ProfileResponse { profile }, flags.format)
        }
        ProfileCommands::Theme { color } => {
            let profile = ctx.service.set_theme_color(color).await?;
            output::output(&ProfileResponse { profile }, flags.format)
        }
        ProfileCommands::Avatar { action } => handle_avatar(action, ctx, flags).await,
    }
}

async fn handle_avatar(
    action: &AvatarCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AvatarCommands::Set { file } => {
            let bytes = std::fs::read(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let mime = mime_for_extension(file.extension().and_then(|e| e.to_str()));
            let data = format!("data:{mime};base64,{}", STANDARD.encode(&bytes));
            let profile = ctx.service.set_avatar(&data).await?;
            output::output(&ProfileResponse { profile }, flags.format)
        }
        AvatarCommands::Clear => {
            let profile = ctx.service.clear_avatar().await?;
            output::output(&ProfileResponse { profile }, flags.format)
        }
        AvatarCommands::Export { out } => {
            let profile = ctx.service.get_or_create_profile().await?;
            std::fs::write(out, &profile.avatar)
                .with_context(|| format!("failed to write {}", out.display()))?;
            output::output(
                &serde_json::json!({ "exported": profile.avatar.len(), "file": out }),
                flags.format,
            )
        }
    }
}

fn mime_for_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::mime_for_extension;

    #[test]
    fn extension_mapping() {
        assert_eq!(mime_for_extension(Some("png")), "image/png");
        assert_eq!(mime_for_extension(Some("jpg")), "image/jpeg");
        assert_eq!(mime_for_extension(None), "image/jpeg");
    }
}
