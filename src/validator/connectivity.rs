use std::collections::VecDeque;

use ahash::AHashSet;
use tracing::debug;

use crate::claim::ClaimId;
use crate::validator::Validator;

/// Result of a per-faction connectivity query.
///
/// `reached` holds every claim reachable from the seed (the faction's first
/// claim) and `unreached` the rest of the faction. Only set membership is
/// meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connectivity {
    pub connected: bool,
    pub unreached: Vec<ClaimId>,
    pub reached: Vec<ClaimId>,
}

impl Validator {
    /// Breadth-first search from `seed`, returning visited claims in discovery order.
    fn reach(&self, seed: ClaimId, visited: &mut AHashSet<ClaimId>) -> Vec<ClaimId> {
        let mut component = Vec::new();
        let mut queue = VecDeque::from([seed]);
        visited.insert(seed);
        while let Some(u) = queue.pop_front() {
            component.push(u);
            for &v in self.neighbours(u) {
                if visited.insert(v) { queue.push_back(v) }
            }
        }
        component
    }

    /// Check whether the claims of `faction` form a single connected region.
    ///
    /// A faction with no claims is trivially connected.
    pub fn check_claims(&self, faction: &str) -> Connectivity {
        let claims = self.faction_claims(faction);
        let Some(&seed) = claims.first() else {
            return Connectivity { connected: true, unreached: vec![], reached: vec![] };
        };

        // Edges never leave the faction, so the search and its visited set
        // stay bounded by the faction's size.
        let mut visited = AHashSet::with_capacity(claims.len());
        let reached = self.reach(seed, &mut visited);
        let unreached = claims.iter()
            .copied()
            .filter(|id| !visited.contains(id))
            .collect::<Vec<_>>();

        debug!(faction, reached = reached.len(), unreached = unreached.len(), "checked faction");

        Connectivity { connected: reached.len() == claims.len(), unreached, reached }
    }

    /// Check whether `faction` is connected, without collecting the split.
    pub fn is_connected(&self, faction: &str) -> bool {
        self.check_claims(faction).connected
    }

    /// Find all connected components (as claim lists) of `faction`.
    pub fn components(&self, faction: &str) -> Vec<Vec<ClaimId>> {
        let claims = self.faction_claims(faction);
        let mut visited = AHashSet::with_capacity(claims.len());
        let mut components = Vec::new();
        for &id in claims {
            if !visited.contains(&id) {
                components.push(self.reach(id, &mut visited));
            }
        }
        components
    }
}
