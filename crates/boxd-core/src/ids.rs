//! Entity ID prefixes.
//!
//! IDs are `{prefix}-{8 hex chars}`, generated SQL-side by
//! `BoxdDb::generate_id` in boxd-db.

pub const PREFIX_PROFILE: &str = "prf";
pub const PREFIX_REVIEW: &str = "rev";
pub const PREFIX_LIKE: &str = "lik";
pub const PREFIX_LIST: &str = "lst";

/// All known prefixes, for exhaustive generation tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_PROFILE, PREFIX_REVIEW, PREFIX_LIKE, PREFIX_LIST];
