use ahash::AHashMap;
use rstar::{RTree, RTreeObject, AABB};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::claim::{Claim, ClaimId};

/// Spatial index entry: the envelope of one claim in the arena.
#[derive(Debug, Clone)]
pub(super) struct ClaimBox {
    pub(super) id: ClaimId,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for ClaimBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope { self.envelope }
}

/// Accumulates claims and maintains the same-faction adjacency graph.
///
/// Claims live in an arena indexed by `ClaimId`. The adjacency graph only
/// ever connects claims of the same faction that touch, and every edge is
/// stored in both endpoints' rows. Claims cannot be removed.
#[derive(Debug, Clone)]
pub struct Validator {
    claims: Vec<Claim>,
    faction_index: AHashMap<String, usize>,   // Faction name -> slot in `factions`
    factions: Vec<(String, Vec<ClaimId>)>,    // Per-faction claims, in first-seen order
    neighbours: Vec<SmallVec<[ClaimId; 4]>>,  // Adjacency rows, indexed by ClaimId
    pub(super) rtree: RTree<ClaimBox>,        // Envelopes of every claim, any faction
    edge_count: usize,
}

impl Default for Validator {
    fn default() -> Self { Self::new() }
}

impl Validator {
    /// Construct an empty validator.
    pub fn new() -> Self {
        Self {
            claims: Vec::new(),
            faction_index: AHashMap::new(),
            factions: Vec::new(),
            neighbours: Vec::new(),
            rtree: RTree::new(),
            edge_count: 0,
        }
    }

    /// Register a claim, linking it to every touching claim of its faction.
    ///
    /// Overlaps and rival contact are not checked here; see `conflicts_with`
    /// and `try_add_claim`.
    ///
    /// # Panics
    ///
    /// Panics if the validator already holds `u32::MAX` claims, the most a
    /// `ClaimId` can address.
    pub fn add_claim(&mut self, claim: Claim) -> ClaimId {
        assert!(self.claims.len() < u32::MAX as usize, "claim arena is full");
        let id = ClaimId(self.claims.len() as u32);

        let slot = match self.faction_index.get(claim.faction()) {
            Some(&slot) => slot,
            None => {
                let slot = self.factions.len();
                self.faction_index.insert(claim.faction().to_owned(), slot);
                self.factions.push((claim.faction().to_owned(), Vec::new()));
                slot
            }
        };

        // O(k) in the size of the faction.
        let mut row = SmallVec::new();
        for &other in &self.factions[slot].1 {
            if claim.touches(&self.claims[other.index()]) {
                trace!(claim = %id, neighbour = %other, faction = claim.faction(), "adjacency edge");
                self.neighbours[other.index()].push(id);
                row.push(other);
            }
        }
        self.edge_count += row.len();

        debug!(claim = %id, bounds = %claim, edges = row.len(), "added claim");

        self.rtree.insert(ClaimBox { id, envelope: claim.envelope() });
        self.neighbours.push(row);
        self.factions[slot].1.push(id);
        self.claims.push(claim);
        id
    }

    /// Get the number of claims added so far.
    #[inline] pub fn len(&self) -> usize { self.claims.len() }

    /// Check if no claims have been added.
    #[inline] pub fn is_empty(&self) -> bool { self.claims.is_empty() }

    /// Get the number of undirected adjacency edges.
    #[inline] pub fn edge_count(&self) -> usize { self.edge_count }

    /// Get a claim by id.
    #[inline] pub fn claim(&self, id: ClaimId) -> &Claim { &self.claims[id.index()] }

    /// Iterate over all claims with their ids, in insertion order.
    pub fn claims(&self) -> impl Iterator<Item = (ClaimId, &Claim)> + '_ {
        self.claims.iter().enumerate().map(|(i, claim)| (ClaimId(i as u32), claim))
    }

    /// Get the same-faction claims that touch `id`.
    #[inline] pub fn neighbours(&self, id: ClaimId) -> &[ClaimId] { &self.neighbours[id.index()] }

    /// Get the claims registered for `faction`, empty if the faction is unknown.
    pub fn faction_claims(&self, faction: &str) -> &[ClaimId] {
        self.faction_index.get(faction)
            .map(|&slot| self.factions[slot].1.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over the distinct factions seen so far.
    pub fn factions(&self) -> impl Iterator<Item = &str> + '_ {
        self.factions.iter().map(|(faction, _)| faction.as_str())
    }
}
