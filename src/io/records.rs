use std::{fs, path::Path};

use anyhow::{Context, Result, ensure};
use tracing::info;

use crate::claim::Claim;
use crate::validator::Validator;

/// One parsed input line, before geometric validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub faction: String,
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Record {
    /// Turn the record into a claim, failing on degenerate rectangles.
    pub fn into_claim(self) -> Result<Claim> {
        Ok(Claim::new(self.faction, self.x1, self.y1, self.x2, self.y2)?)
    }
}

/// Parse a single `faction x1 y1 x2 y2` line.
pub fn parse_record(line: &str) -> Result<Record> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    ensure!(fields.len() == 5, "[io::records] expected 5 fields (faction x1 y1 x2 y2), found {}", fields.len());

    let coord = |i: usize, name: &str| -> Result<i64> {
        fields[i].parse::<i64>()
            .with_context(|| format!("[io::records] {name} is not an integer: {:?}", fields[i]))
    };

    Ok(Record {
        faction: fields[0].to_owned(),
        x1: coord(1, "x1")?,
        y1: coord(2, "y1")?,
        x2: coord(3, "x2")?,
        y2: coord(4, "y2")?,
    })
}

/// Read every claim from a string, in input order.
pub fn read_claims_str(text: &str) -> Result<Vec<Claim>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| { let line = line.trim(); !line.is_empty() && !line.starts_with('#') })
        .map(|(i, line)| {
            parse_record(line)
                .and_then(Record::into_claim)
                .with_context(|| format!("[io::records] invalid record on line {}", i + 1))
        })
        .collect()
}

/// Read every claim from the file at `path`, in input order.
pub fn read_claims(path: &Path) -> Result<Vec<Claim>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::records] Failed to open claims file: {}", path.display()))?;
    read_claims_str(&text)
        .with_context(|| format!("[io::records] Failed to read claims from {}", path.display()))
}

/// Build a validator from the claims in `path`, added in input order.
pub fn load_validator(path: &Path) -> Result<Validator> {
    let mut validator = Validator::new();
    for claim in read_claims(path)? {
        validator.add_claim(claim);
    }
    info!(path = %path.display(), claims = validator.len(), factions = validator.factions().count(), "loaded claims");
    Ok(validator)
}
