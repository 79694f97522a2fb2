use std::path::PathBuf;

use clap::Subcommand;

/// Profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the profile, creating it on first access.
    Show,
    /// Change the display name.
    Username { name: String },
    /// Change the theme color (e.g., "#1a1a1a").
    Theme { color: String },
    /// Avatar operations.
    Avatar {
        #[command(subcommand)]
        action: AvatarCommands,
    },
}

/// Avatar image operations.
#[derive(Clone, Debug, Subcommand)]
pub enum AvatarCommands {
    /// Store an image file as the avatar (base64, size-capped).
    Set { file: PathBuf },
    /// Remove the avatar.
    Clear,
    /// Write the stored avatar data string to a file.
    Export {
        #[arg(long)]
        out: PathBuf,
    },
}
