use clap::Subcommand;

/// Named list commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ListCommands {
    /// Create an empty list.
    Create { name: String },
    /// Show one list by name, or all lists.
    Show { name: Option<String> },
    /// Add an album title to a list, creating the list if needed.
    AddAlbum { name: String, title: String },
    /// Add a song title to a list, creating the list if needed.
    AddSong { name: String, title: String },
    /// Remove an album title from a list.
    RemoveAlbum { name: String, title: String },
    /// Remove a song title from a list.
    RemoveSong { name: String, title: String },
    /// Delete a list.
    Delete { name: String },
}
