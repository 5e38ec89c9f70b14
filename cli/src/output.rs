use std::io::{self, Write};

use claimcheck::{ConflictKind, ConflictReport, Report, Validator};

/// Write the disconnection diagnosis for every split faction, then any conflicts.
/// Connected factions produce no output.
pub fn write_report(out: &mut impl Write, report: &Report) -> io::Result<()> {
    for faction in report.disconnected() {
        writeln!(out, "Faction {} has disconnected claims. The claims", faction.faction)?;
        for claim in &faction.unreached { writeln!(out, " {claim}")? }
        writeln!(out, "are not connected to")?;
        for claim in &faction.reached { writeln!(out, " {claim}")? }
    }
    write_conflicts(out, &report.conflicts)
}

/// Write the component breakdown of every split faction, largest region first.
pub fn write_components(out: &mut impl Write, validator: &Validator, report: &Report) -> io::Result<()> {
    for faction in report.disconnected() {
        let mut sizes = validator.components(&faction.faction).iter().map(Vec::len).collect::<Vec<_>>();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        let listed = sizes.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        writeln!(out, "Faction {} splits into {} regions of {} claims", faction.faction, sizes.len(), listed)?;
    }
    Ok(())
}

/// Write one line per conflicting pair.
pub fn write_conflicts(out: &mut impl Write, conflicts: &[ConflictReport]) -> io::Result<()> {
    for conflict in conflicts {
        let verb = match conflict.kind {
            ConflictKind::Overlap => "overlaps",
            ConflictKind::RivalTouch => "touches rival",
        };
        writeln!(out, "Claim {} {} {}", conflict.a, verb, conflict.b)?;
    }
    Ok(())
}
