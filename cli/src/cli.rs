use std::path::PathBuf;

/// Territory claim checker
#[derive(clap::Parser, Debug)]
#[command(name = "claimcheck", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Report factions whose claims are not one connected region
    Check(CheckArgs),

    /// List overlapping claims and claims touching a rival
    Conflicts(ConflictsArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat { #[default] Text, Json }

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Claims file, one `faction x1 y1 x2 y2` record per line
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub claims: PathBuf,

    /// Also fail on overlapping claims and rival claims without a buffer
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct ConflictsArgs {
    /// Claims file, one `faction x1 y1 x2 y2` record per line
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub claims: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn schema_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_flags() {
        let cli = Cli::parse_from(["claimcheck", "-vv", "check", "claims.txt", "--strict", "--format", "json"]);
        assert_eq!(cli.verbose, 2);
        let Commands::Check(args) = cli.command else { panic!("expected check") };
        assert_eq!(args.claims, PathBuf::from("claims.txt"));
        assert!(args.strict);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn format_defaults_to_text() {
        let cli = Cli::parse_from(["claimcheck", "conflicts", "claims.txt"]);
        let Commands::Conflicts(args) = cli.command else { panic!("expected conflicts") };
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn claims_path_is_required() {
        assert!(Cli::try_parse_from(["claimcheck", "check"]).is_err());
    }
}
