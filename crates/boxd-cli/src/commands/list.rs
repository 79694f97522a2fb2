use boxd_core::responses::ListsResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ListCommands;
use crate::context::AppContext;
use crate::output;

/// Handle `boxd list`.
pub async fn handle(
    action: &ListCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ListCommands::Create { name } => {
            let list = ctx.service.create_list(name).await?;
            output::output(&ListsResponse { lists: vec![list] }, flags.format)
        }
        ListCommands::Show { name } => {
            let lists = match name {
                Some(name) => vec![ctx.service.get_list(name).await?],
                None => ctx.service.my_lists().await?,
            };
            output::output(&ListsResponse { lists }, flags.format)
        }
        ListCommands::AddAlbum { name, title } => {
            let list = ctx.service.add_album_to_list(name, title).await?;
            output::output(&ListsResponse { lists: vec![list] }, flags.format)
        }
        ListCommands::AddSong { name, title } => {
            let list = ctx.service.add_song_to_list(name, title).await?;
            output::output(&ListsResponse { lists: vec![list] }, flags.format)
        }
        ListCommands::RemoveAlbum { name, title } => {
            let list = ctx.service.remove_album_from_list(name, title).await?;
            output::output(&ListsResponse { lists: vec![list] }, flags.format)
        }
        ListCommands::RemoveSong { name, title } => {
            let list = ctx.service.remove_song_from_list(name, title).await?;
            output::output(&ListsResponse { lists: vec![list] }, flags.format)
        }
        ListCommands::Delete { name } => {
            ctx.service.delete_list(name).await?;
            output::output(&serde_json::json!({ "deleted": name }), flags.format)
        }
    }
}
