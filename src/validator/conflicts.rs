use rstar::{AABB, Envelope, RTreeObject, SelectionFunction};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::claim::{Claim, ClaimId};
use crate::validator::Validator;
use crate::validator::validator::ClaimBox;

/// Why two claims cannot coexist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The claims share area (any faction).
    Overlap,
    /// Claims of different factions share a border.
    RivalTouch,
}

impl ConflictKind {
    /// Classify a pair of claims, or `None` if they are valid neighbours.
    pub fn between(a: &Claim, b: &Claim) -> Option<Self> {
        if a.valid_neighbour(b) { None }
        else if a.overlaps(b) { Some(Self::Overlap) }
        else { Some(Self::RivalTouch) }
    }
}

/// A pair of registered claims failing `valid_neighbour`, with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub a: ClaimId,
    pub b: ClaimId,
}

/// Rejection from `Validator::try_add_claim`.
#[derive(Debug, Error)]
pub enum ConflictError {
    /// The candidate overlaps or touches a rival; it was not added.
    #[error("claim {claim} conflicts with {} existing claim(s)", conflicts.len())]
    Rejected { claim: Claim, conflicts: Vec<(ClaimId, ConflictKind)> },
}

/// Selects index entries whose envelope meets a claim grown by one unit on
/// every side, so that touching claims are candidates too.
struct Near(AABB<[f64; 2]>);

impl Near {
    fn new(claim: &Claim) -> Self {
        Self(AABB::from_corners(
            [claim.x1().saturating_sub(1) as f64, claim.y1().saturating_sub(1) as f64],
            [claim.x2().saturating_add(1) as f64, claim.y2().saturating_add(1) as f64],
        ))
    }
}

impl SelectionFunction<ClaimBox> for Near {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        envelope.intersects(&self.0)
    }

    fn should_unpack_leaf(&self, leaf: &ClaimBox) -> bool {
        leaf.envelope().intersects(&self.0)
    }
}

impl Validator {
    /// Find registered claims that `claim` could not coexist with.
    ///
    /// The candidate itself is not registered. Results are sorted by id.
    pub fn conflicts_with(&self, claim: &Claim) -> Vec<(ClaimId, ConflictKind)> {
        let mut found = self.rtree.locate_with_selection_function(Near::new(claim))
            .filter_map(|cand| ConflictKind::between(claim, self.claim(cand.id)).map(|kind| (cand.id, kind)))
            .collect::<Vec<_>>();
        found.sort_unstable_by_key(|&(id, _)| id);
        found
    }

    /// Find every unordered pair of registered claims that fail `valid_neighbour`.
    ///
    /// Each pair is reported once, sorted by `(a, b)`.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        for (a, claim) in self.claims() {
            for cand in self.rtree.locate_with_selection_function(Near::new(claim)) {
                if cand.id <= a { continue } // check each unordered pair once
                if let Some(kind) = ConflictKind::between(claim, self.claim(cand.id)) {
                    conflicts.push(Conflict { kind, a, b: cand.id });
                }
            }
        }
        conflicts.sort_unstable_by_key(|c| (c.a, c.b));
        debug!(claims = self.len(), conflicts = conflicts.len(), "scanned for conflicts");
        conflicts
    }

    /// Register `claim` only if it conflicts with no existing claim.
    pub fn try_add_claim(&mut self, claim: Claim) -> Result<ClaimId, ConflictError> {
        let conflicts = self.conflicts_with(&claim);
        if !conflicts.is_empty() {
            warn!(claim = %claim, conflicts = conflicts.len(), "rejected conflicting claim");
            return Err(ConflictError::Rejected { claim, conflicts });
        }
        Ok(self.add_claim(claim))
    }
}
