use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use boxd_core::enums::TargetKind;
use boxd_core::responses::{LikeStatusResponse, ReviewListResponse, ReviewResponse};
use boxd_db::updates::ReviewUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewCommands;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output;

/// Shape accepted by `boxd review import`: the creation fields of a
/// review, with IDs, counts, and timestamps ignored.
#[derive(Debug, Deserialize)]
struct ReviewImport {
    #[serde(default)]
    target_kind: TargetKind,
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    rating: u8,
}

/// Handle `boxd review`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReviewCommands::Create {
            title,
            artist,
            body,
            rating,
            kind,
        } => {
            let kind = shared::parse_target_kind(kind)?;
            let review = ctx
                .service
                .create_review(kind, title, artist, body, *rating)
                .await?;
            output::output(&ReviewResponse { review }, flags.format)
        }
        ReviewCommands::Get { id } => {
            let review = ctx.service.get_review(id).await?;
            output::output(&ReviewResponse { review }, flags.format)
        }
        ReviewCommands::List { mine, limit } => {
            let limit = shared::effective_limit(*limit, flags, ctx);
            let reviews = if *mine {
                ctx.service.list_my_reviews(limit).await?
            } else {
                ctx.service.list_reviews(limit).await?
            };
            let total = u32::try_from(reviews.len()).unwrap_or(u32::MAX);
            output::output(&ReviewListResponse { reviews, total }, flags.format)
        }
        ReviewCommands::Update {
            id,
            title,
            artist,
            body,
            rating,
            kind,
        } => {
            let mut builder = ReviewUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(artist) = artist {
                builder = builder.artist(artist);
            }
            if let Some(body) = body {
                builder = builder.body(body);
            }
            if let Some(rating) = rating {
                builder = builder.rating(*rating);
            }
            if let Some(kind) = kind {
                builder = builder.target_kind(shared::parse_target_kind(kind)?);
            }
            let review = ctx.service.update_review(id, builder.build()).await?;
            output::output(&ReviewResponse { review }, flags.format)
        }
        ReviewCommands::Delete { id } => {
            ctx.service.delete_review(id).await?;
            output::output(
                &serde_json::json!({ "deleted": id }),
                flags.format,
            )
        }
        ReviewCommands::Like { id } => {
            let like_count = ctx.service.like_review(id).await?;
            output::output(
                &LikeStatusResponse {
                    review_id: id.clone(),
                    liked: true,
                    like_count,
                },
                flags.format,
            )
        }
        ReviewCommands::Unlike { id } => {
            let like_count = ctx.service.unlike_review(id).await?;
            output::output(
                &LikeStatusResponse {
                    review_id: id.clone(),
                    liked: false,
                    like_count,
                },
                flags.format,
            )
        }
        ReviewCommands::Likes { id } => {
            let liked = ctx.service.has_liked(id).await;
            let like_count = ctx.service.like_count(id).await;
            output::output(
                &LikeStatusResponse {
                    review_id: id.clone(),
                    liked,
                    like_count,
                },
                flags.format,
            )
        }
        ReviewCommands::Export { out, mine } => {
            let limit = shared::effective_limit(None, flags, ctx);
            let reviews = if *mine {
                ctx.service.list_my_reviews(limit).await?
            } else {
                ctx.service.list_reviews(limit).await?
            };
            write_json(out, &reviews)?;
            output::output(
                &serde_json::json!({ "exported": reviews.len(), "file": out }),
                flags.format,
            )
        }
        ReviewCommands::Import { file } => {
            let data = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let imports: Vec<ReviewImport> = serde_json::from_str(&data)
                .with_context(|| format!("invalid review JSON in {}", file.display()))?;

            let mut created = 0usize;
            for item in imports {
                ctx.service
                    .create_review(
                        item.target_kind,
                        &item.title,
                        &item.artist,
                        &item.body,
                        item.rating,
                    )
                    .await
                    .with_context(|| format!("failed to import review '{}'", item.title))?;
                created += 1;
            }
            output::output(&serde_json::json!({ "imported": created }), flags.format)
        }
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
