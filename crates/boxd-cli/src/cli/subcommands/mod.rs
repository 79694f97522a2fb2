mod list;
mod profile;
mod review;
mod top;

pub use list::ListCommands;
pub use profile::{AvatarCommands, ProfileCommands};
pub use review::ReviewCommands;
pub use top::{TopCommands, TopListCommands};
