use std::io::{self, Write};

use anyhow::Result;
use claimcheck::{Report, load_validator};

use crate::cli::{Cli, ConflictsArgs, OutputFormat};
use crate::output;

/// Returns `Ok(false)` when any conflict is found.
pub fn run(_cli: &Cli, args: &ConflictsArgs) -> Result<bool> {
    let validator = load_validator(&args.claims)?;
    let conflicts = Report::build(&validator, true).conflicts;

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => output::write_conflicts(&mut out, &conflicts)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&conflicts)?)?,
    }

    Ok(conflicts.is_empty())
}
