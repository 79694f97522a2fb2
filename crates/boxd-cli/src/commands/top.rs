use anyhow::Context;

use boxd_core::entities::TopEntry;
use boxd_core::responses::TopListResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{TopCommands, TopListCommands};
use crate::commands::shared;
use crate::context::AppContext;
use crate::output;

/// Handle `boxd top`.
pub async fn handle(
    action: &TopCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TopCommands::Albums { action } => handle_kind(action, "albums", ctx, flags).await,
        TopCommands::Songs { action } => handle_kind(action, "songs", ctx, flags).await,
    }
}

async fn handle_kind(
    action: &TopListCommands,
    kind: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TopListCommands::Show => {
            let entries = show(ctx, kind).await;
            respond(kind, entries, flags)
        }
        TopListCommands::Set { entries } => {
            let parsed: Vec<TopEntry> = entries.iter().map(|e| shared::parse_top_entry(e)).collect();
            let entries = set(ctx, kind, parsed).await?;
            respond(kind, entries, flags)
        }
        TopListCommands::Clear => {
            let entries = set(ctx, kind, Vec::new()).await?;
            respond(kind, entries, flags)
        }
        TopListCommands::Export { out } => {
            let entries = show(ctx, kind).await;
            let json = serde_json::to_string_pretty(&entries)?;
            std::fs::write(out, json)
                .with_context(|| format!("failed to write {}", out.display()))?;
            output::output(
                &serde_json::json!({ "exported": entries.len(), "file": out }),
                flags.format,
            )
        }
        TopListCommands::Import { file } => {
            let data = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let parsed: Vec<TopEntry> = serde_json::from_str(&data)
                .with_context(|| format!("invalid top-list JSON in {}", file.display()))?;
            let entries = set(ctx, kind, parsed).await?;
            respond(kind, entries, flags)
        }
    }
}

async fn show(ctx: &AppContext, kind: &str) -> Vec<TopEntry> {
    if kind == "albums" {
        ctx.service.top_albums().await
    } else {
        ctx.service.top_songs().await
    }
}

async fn set(ctx: &AppContext, kind: &str, entries: Vec<TopEntry>) -> anyhow::Result<Vec<TopEntry>> {
    let saved = if kind == "albums" {
        ctx.service.set_top_albums(entries).await?
    } else {
        ctx.service.set_top_songs(entries).await?
    };
    Ok(saved)
}

fn respond(kind: &str, entries: Vec<TopEntry>, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output(
        &TopListResponse {
            kind: kind.to_string(),
            entries,
        },
        flags.format,
    )
}
