//! Repository modules implementing store operations for all boxd entities.
//!
//! Each module adds methods to `BoxdService` via `impl BoxdService` blocks.

pub mod like;
pub mod list;
pub mod profile;
pub mod review;
