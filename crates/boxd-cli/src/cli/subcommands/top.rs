use std::path::PathBuf;

use clap::Subcommand;

/// Top-5 list commands, split by kind.
#[derive(Clone, Debug, Subcommand)]
pub enum TopCommands {
    /// Top albums.
    Albums {
        #[command(subcommand)]
        action: TopListCommands,
    },
    /// Top songs.
    Songs {
        #[command(subcommand)]
        action: TopListCommands,
    },
}

/// Operations shared by both top lists.
#[derive(Clone, Debug, Subcommand)]
pub enum TopListCommands {
    /// Show the list.
    Show,
    /// Replace the list. Repeat --entry "Title|Artist"; at most five
    /// entries are kept.
    Set {
        #[arg(long = "entry")]
        entries: Vec<String>,
    },
    /// Empty the list.
    Clear,
    /// Export the list to a JSON file.
    Export {
        #[arg(long)]
        out: PathBuf,
    },
    /// Import the list from a JSON file (truncated to five entries).
    Import { file: PathBuf },
}
