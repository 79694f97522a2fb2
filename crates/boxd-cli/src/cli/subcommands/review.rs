use std::path::PathBuf;

use clap::Subcommand;

/// Review entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// Create a review.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        artist: String,
        #[arg(long, default_value = "")]
        body: String,
        /// Star rating, 0 (unrated) through 5.
        #[arg(long, default_value_t = 0)]
        rating: u8,
        /// Review target: album or song.
        #[arg(long, default_value = "album")]
        kind: String,
    },
    /// Get a review by ID.
    Get { id: String },
    /// List reviews, newest first.
    List {
        /// Only the current user's reviews.
        #[arg(long)]
        mine: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update fields of an owned review.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        rating: Option<u8>,
        #[arg(long)]
        kind: Option<String>,
    },
    /// Delete an owned review and its likes.
    Delete { id: String },
    /// Like a review.
    Like { id: String },
    /// Remove a like from a review.
    Unlike { id: String },
    /// Show like status and count for a review.
    Likes { id: String },
    /// Export reviews to a JSON file.
    Export {
        #[arg(long)]
        out: PathBuf,
        /// Only the current user's reviews.
        #[arg(long)]
        mine: bool,
    },
    /// Import reviews from a JSON file, creating them one by one.
    Import { file: PathBuf },
}
