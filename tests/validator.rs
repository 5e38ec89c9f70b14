// Integration tests for Validator: adjacency graph, connectivity and conflicts
// over randomized claim layouts.

use std::collections::BTreeSet;

use claimcheck::{Claim, ClaimId, Conflict, ConflictKind, Validator};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

const FACTIONS: [&str; 3] = ["red", "green", "blue"];

/// Random small rectangles on a crowded grid, so that overlaps and contact are common.
fn random_claims(rng: &mut StdRng, count: usize) -> Vec<Claim> {
    (0..count).map(|_| {
        let x1 = rng.random_range(-20..20);
        let y1 = rng.random_range(-20..20);
        let faction = FACTIONS[rng.random_range(0..FACTIONS.len())];
        Claim::new(faction, x1, y1, x1 + rng.random_range(1..5), y1 + rng.random_range(1..5)).unwrap()
    }).collect()
}

fn build(claims: &[Claim]) -> Validator {
    let mut validator = Validator::new();
    for claim in claims { validator.add_claim(claim.clone()); }
    validator
}

/// Membership of every component of `faction`, by bounds, independent of ids and order.
fn component_shapes(validator: &Validator, faction: &str) -> BTreeSet<BTreeSet<String>> {
    validator.components(faction).into_iter()
        .map(|component| component.into_iter().map(|id| validator.claim(id).to_string()).collect())
        .collect()
}

#[test]
fn predicates_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    let claims = random_claims(&mut rng, 80);
    for a in &claims {
        for b in &claims {
            assert_eq!(a.overlaps(b), b.overlaps(a), "{a} {b}");
            assert_eq!(a.touches(b), b.touches(a), "{a} {b}");
            assert_eq!(a.valid_neighbour(b), b.valid_neighbour(a), "{a} {b}");
            assert!(!(a.touches(b) && a.overlaps(b)), "{a} {b} both touch and overlap");
        }
    }
}

#[test]
fn graph_matches_brute_force_adjacency() {
    let mut rng = StdRng::seed_from_u64(11);
    let validator = build(&random_claims(&mut rng, 120));

    for (a, claim_a) in validator.claims() {
        let expected = validator.claims()
            .filter(|&(b, claim_b)| b != a && claim_a.faction() == claim_b.faction() && claim_a.touches(claim_b))
            .map(|(b, _)| b)
            .collect::<BTreeSet<ClaimId>>();
        let actual = validator.neighbours(a).iter().copied().collect::<BTreeSet<_>>();
        assert_eq!(actual, expected, "neighbours of {a}");
    }
}

#[test]
fn check_claims_splits_the_faction() {
    let mut rng = StdRng::seed_from_u64(13);
    let validator = build(&random_claims(&mut rng, 60));

    for faction in FACTIONS {
        let result = validator.check_claims(faction);
        let reached = result.reached.iter().copied().collect::<BTreeSet<_>>();
        let unreached = result.unreached.iter().copied().collect::<BTreeSet<_>>();
        let all = validator.faction_claims(faction).iter().copied().collect::<BTreeSet<_>>();

        assert!(reached.is_disjoint(&unreached));
        assert_eq!(reached.union(&unreached).copied().collect::<BTreeSet<_>>(), all);
        assert_eq!(result.connected, unreached.is_empty());
        assert_eq!(result.connected, validator.components(faction).len() <= 1);
    }
}

#[test]
fn verdict_is_independent_of_insertion_order() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut claims = random_claims(&mut rng, 50);
    let reference = build(&claims);

    for _ in 0..10 {
        claims.shuffle(&mut rng);
        let shuffled = build(&claims);
        assert_eq!(shuffled.edge_count(), reference.edge_count());
        for faction in FACTIONS {
            assert_eq!(shuffled.is_connected(faction), reference.is_connected(faction), "{faction}");
            assert_eq!(component_shapes(&shuffled, faction), component_shapes(&reference, faction), "{faction}");
        }
    }
}

#[test]
fn conflicts_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(19);
    let validator = build(&random_claims(&mut rng, 100));

    let mut expected = Vec::new();
    for (a, claim_a) in validator.claims() {
        for (b, claim_b) in validator.claims().filter(|&(b, _)| b > a) {
            if !claim_a.valid_neighbour(claim_b) {
                let kind = if claim_a.overlaps(claim_b) { ConflictKind::Overlap } else { ConflictKind::RivalTouch };
                expected.push(Conflict { kind, a, b });
            }
        }
    }
    assert!(!expected.is_empty());
    assert_eq!(validator.conflicts(), expected);
}

#[test]
fn strict_insertion_leaves_no_conflicts() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut validator = Validator::new();
    let mut rejected = 0;
    for claim in random_claims(&mut rng, 100) {
        if validator.try_add_claim(claim).is_err() { rejected += 1 }
    }
    assert!(rejected > 0);
    assert_eq!(validator.len() + rejected, 100);
    assert!(validator.conflicts().is_empty());
}

#[test]
fn interleaved_queries_see_later_claims() {
    let mut validator = Validator::new();
    validator.add_claim(Claim::new("red", 0, 0, 2, 2).unwrap());
    validator.add_claim(Claim::new("red", 0, 6, 2, 8).unwrap());
    let before = validator.check_claims("red");
    assert!(!before.connected);
    assert_eq!(before, validator.check_claims("red"));

    validator.add_claim(Claim::new("red", 0, 3, 2, 5).unwrap());
    let after = validator.check_claims("red");
    assert!(after.connected);
    assert_eq!(after.reached.len(), 3);
}

#[test]
fn report_over_many_single_claim_factions() {
    let mut validator = Validator::new();
    let count = 20_000;
    for i in 0..count {
        // Neighbouring claims touch, but each belongs to its own faction.
        validator.add_claim(Claim::new(format!("f{i}"), i * 3, 0, i * 3 + 2, 2).unwrap());
    }
    assert_eq!(validator.edge_count(), 0);

    let report = claimcheck::Report::build(&validator, false);
    assert_eq!(report.factions.len(), count as usize);
    assert!(report.factions.iter().all(|f| f.connected && f.reached.len() == 1 && f.unreached.is_empty()));
    assert!(report.is_clean(false));

    let last = format!("f{}", count - 1);
    assert_eq!(validator.components(&last).len(), 1);
}
