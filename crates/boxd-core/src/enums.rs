//! Domain enums.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a review is about. The original UI offers the same two choices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Album,
    Song,
}

impl TargetKind {
    /// Stable string form used in SQL columns and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Song => "song",
        }
    }
}

impl Default for TargetKind {
    fn default() -> Self {
        Self::Album
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TargetKind::Album).unwrap(),
            "\"album\""
        );
        assert_eq!(serde_json::to_string(&TargetKind::Song).unwrap(), "\"song\"");
    }

    #[test]
    fn as_str_matches_serde_form() {
        for kind in [TargetKind::Album, TargetKind::Song] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json.trim_matches('"'), kind.as_str());
        }
    }
}
