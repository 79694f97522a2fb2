//! Parsing and flag helpers shared by command handlers.

use anyhow::bail;

use boxd_core::entities::TopEntry;
use boxd_core::enums::TargetKind;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Parse a `--kind` value into a review target kind.
pub fn parse_target_kind(value: &str) -> anyhow::Result<TargetKind> {
    match value {
        "album" => Ok(TargetKind::Album),
        "song" => Ok(TargetKind::Song),
        other => bail!("invalid kind '{other}': expected album or song"),
    }
}

/// Parse a `--entry "Title|Artist"` value. The artist part may be
/// omitted.
pub fn parse_top_entry(value: &str) -> TopEntry {
    match value.split_once('|') {
        Some((title, artist)) => TopEntry {
            title: title.trim().to_string(),
            artist: artist.trim().to_string(),
        },
        None => TopEntry {
            title: value.trim().to_string(),
            artist: String::new(),
        },
    }
}

/// Effective result limit: per-command flag, then global flag, then the
/// configured default.
pub fn effective_limit(sub: Option<u32>, flags: &GlobalFlags, ctx: &AppContext) -> u32 {
    sub.or(flags.limit).unwrap_or(ctx.config.general.default_limit)
}

#[cfg(test)]
mod tests {
    use boxd_core::enums::TargetKind;

    use super::{parse_target_kind, parse_top_entry};

    #[test]
    fn target_kind_parsing() {
        assert_eq!(parse_target_kind("album").unwrap(), TargetKind::Album);
        assert_eq!(parse_target_kind("song").unwrap(), TargetKind::Song);
        assert!(parse_target_kind("mixtape").is_err());
    }

    #[test]
    fn top_entry_parsing() {
        let entry = parse_top_entry("Blue | Joni Mitchell");
        assert_eq!(entry.title, "Blue");
        assert_eq!(entry.artist, "Joni Mitchell");

        let entry = parse_top_entry("Blue");
        assert_eq!(entry.title, "Blue");
        assert!(entry.artist.is_empty());
    }
}
