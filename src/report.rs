use serde::Serialize;

use crate::claim::{Claim, ClaimId};
use crate::validator::{ConflictKind, Validator};

/// Connectivity verdict for one faction, with claims resolved for display.
#[derive(Clone, Debug, Serialize)]
pub struct FactionReport {
    pub faction: String,
    pub connected: bool,
    pub unreached: Vec<Claim>,
    pub reached: Vec<Claim>,
}

/// A conflicting pair, with claims resolved for display.
#[derive(Clone, Debug, Serialize)]
pub struct ConflictReport {
    pub kind: ConflictKind,
    pub a: Claim,
    pub b: Claim,
}

/// Everything a presenter needs to render the outcome of a validation run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub factions: Vec<FactionReport>,
    pub conflicts: Vec<ConflictReport>,
}

impl Report {
    /// Query every faction of `validator`, and optionally scan for conflicts.
    pub fn build(validator: &Validator, include_conflicts: bool) -> Self {
        let resolve = |ids: &[ClaimId]| ids.iter().map(|&id| validator.claim(id).clone()).collect::<Vec<_>>();

        let factions = validator.factions()
            .map(|faction| {
                let result = validator.check_claims(faction);
                FactionReport {
                    faction: faction.to_owned(),
                    connected: result.connected,
                    unreached: resolve(&result.unreached),
                    reached: resolve(&result.reached),
                }
            })
            .collect();

        let conflicts = if include_conflicts {
            validator.conflicts().into_iter()
                .map(|c| ConflictReport {
                    kind: c.kind,
                    a: validator.claim(c.a).clone(),
                    b: validator.claim(c.b).clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self { factions, conflicts }
    }

    /// Iterate over the factions whose claims are split.
    pub fn disconnected(&self) -> impl Iterator<Item = &FactionReport> + '_ {
        self.factions.iter().filter(|f| !f.connected)
    }

    /// Check if every faction is connected and, when `strict`, no conflicts were found.
    pub fn is_clean(&self, strict: bool) -> bool {
        self.disconnected().next().is_none() && !(strict && !self.conflicts.is_empty())
    }
}
