//! # boxd-core
//!
//! Core types shared across all boxd crates:
//! - Entity structs for the catalog domain (profiles, reviews, likes, lists)
//! - Target-kind enum for album/song reviews
//! - ID prefix constants
//! - The current-user identity passed from config into the service layer
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod identity;
pub mod ids;
pub mod responses;
