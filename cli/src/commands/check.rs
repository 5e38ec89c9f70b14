use std::io::{self, Write};

use anyhow::Result;
use claimcheck::{Report, load_validator};
use tracing::info;

use crate::cli::{CheckArgs, Cli, OutputFormat};
use crate::output;

/// With `-v`, text output also breaks each split faction into its regions.
/// Returns `Ok(false)` when a faction is split (or, with `--strict`, on any conflict).
pub fn run(cli: &Cli, args: &CheckArgs) -> Result<bool> {
    let validator = load_validator(&args.claims)?;
    let report = Report::build(&validator, args.strict);

    info!(
        factions = report.factions.len(),
        disconnected = report.disconnected().count(),
        conflicts = report.conflicts.len(),
        "checked claims"
    );

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => {
            output::write_report(&mut out, &report)?;
            if cli.verbose > 0 { output::write_components(&mut out, &validator, &report)? }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
    }

    Ok(report.is_clean(args.strict))
}
