use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Review { action } => commands::review::handle(&action, ctx, flags).await,
        Commands::Top { action } => commands::top::handle(&action, ctx, flags).await,
        Commands::List { action } => commands::list::handle(&action, ctx, flags).await,
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags).await,
        Commands::Whoami => commands::whoami::handle(ctx, flags),
        Commands::Sync => commands::sync::handle(ctx, flags).await,
    }
}
