//! Entity structs for all boxd domain objects.

mod like;
mod list;
mod profile;
mod review;

pub use like::Like;
pub use list::MusicList;
pub use profile::{Profile, TopEntry};
pub use review::Review;
