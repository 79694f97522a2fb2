use clap::Subcommand;

use super::subcommands::{ListCommands, ProfileCommands, ReviewCommands, TopCommands};

/// All `boxd` subcommand families.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create, browse, and like reviews.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Manage the profile's top-5 album and song lists.
    Top {
        #[command(subcommand)]
        action: TopCommands,
    },
    /// Manage named lists of albums and songs.
    List {
        #[command(subcommand)]
        action: ListCommands,
    },
    /// Show and edit the profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Show the configured session identity.
    Whoami,
    /// Sync the embedded replica with the remote store.
    Sync,
}
