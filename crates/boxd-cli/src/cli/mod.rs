use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `boxd` binary.
#[derive(Debug, Parser)]
#[command(name = "boxd", version, about = "boxd - music catalog reviews and lists")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "boxd", "--format", "raw", "--limit", "10", "--verbose", "whoami",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Whoami));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["boxd", "whoami", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Whoami));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["boxd", "--format", "xml", "whoami"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn review_create_parses() {
        let cli = Cli::try_parse_from([
            "boxd", "review", "create", "--title", "Blue", "--artist", "Joni Mitchell",
            "--rating", "5",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Review { .. }));
    }

    #[test]
    fn top_set_takes_repeated_entries() {
        let cli = Cli::try_parse_from([
            "boxd", "top", "albums", "set", "--entry", "Blue|Joni Mitchell", "--entry",
            "Harvest|Neil Young",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Top { .. }));
    }
}
