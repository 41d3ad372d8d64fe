//! Statistical behavior of the computer opponent.

use portal_draft::cards::{CharacterRecord, Combatant};
use portal_draft::core::{DraftRng, TEAM_SIZE};
use portal_draft::opponent::{OpponentStrategy, ThirdPick, WeakBiasStrategist};
use portal_draft::roster::Roster;
use proptest::prelude::*;

const TRIALS: usize = 10_000;

fn roster(ids: &[u32]) -> Roster {
    ids.iter()
        .map(|&id| Combatant::generate(CharacterRecord::new(id, format!("C{id}"), "")))
        .collect()
}

/// Three weak (1, 2, 3) and two strong (5, 9).
fn mixed_roster() -> Roster {
    roster(&[5, 1, 2, 9, 3])
}

// =============================================================================
// Distribution
// =============================================================================

/// Ten thousand drafts from a mixed roster never repeat a member.
#[test]
fn test_no_duplicates_with_mixed_roster() {
    let strategist = WeakBiasStrategist::default();
    let r = mixed_roster();
    let mut rng = DraftRng::new(2024);

    let duplicates = (0..TRIALS)
        .filter(|_| strategist.draft(&r, &mut rng).has_duplicates())
        .count();
    assert_eq!(duplicates, 0);
}

/// With three weak members the third pick is strong about one time in five.
#[test]
fn test_strong_third_rate_near_twenty_percent() {
    let strategist = WeakBiasStrategist::default();
    let r = mixed_roster();
    let mut rng = DraftRng::new(7);

    let strong_third = (0..TRIALS)
        .filter(|_| {
            let team = strategist.draft(&r, &mut rng);
            team.members()[2].total >= 300
        })
        .count();

    let rate = strong_third as f64 / TRIALS as f64;
    assert!((0.17..0.23).contains(&rate), "strong third rate {rate}");
}

// =============================================================================
// Pick Order
// =============================================================================

/// The first two picks come from the weak pool whenever it has two members.
#[test]
fn test_first_two_always_weak_with_enough_weak() {
    let strategist = WeakBiasStrategist::default();
    let r = mixed_roster();
    let mut rng = DraftRng::new(11);
    for _ in 0..1_000 {
        let team = strategist.draft(&r, &mut rng);
        assert!(team.members()[..2].iter().all(|m| m.total < 300));
    }
}

/// Both orderings of the weak pair show up across seeds.
#[test]
fn test_weak_pair_is_shuffled() {
    let strategist = WeakBiasStrategist::default();
    let r = mixed_roster();
    let mut rng = DraftRng::new(5);

    let mut first_ids = std::collections::BTreeSet::new();
    for _ in 0..500 {
        first_ids.insert(strategist.draft(&r, &mut rng).members()[0].id());
    }
    assert_eq!(first_ids.len(), 3);
}

/// The weak third pick is the first unpicked weak member in roster order.
#[test]
fn test_remaining_weak_is_first_in_roster_order() {
    let strategist = WeakBiasStrategist::new(300, 1.0);
    let r = mixed_roster();
    let mut rng = DraftRng::new(9);

    for _ in 0..500 {
        let (team, third) = strategist.draft_traced(&r, &mut rng);
        assert_eq!(third, ThirdPick::RemainingWeak);
        let picked = team.ids();
        let expected = r
            .iter()
            .filter(|m| m.total < 300)
            .map(|m| m.id())
            .find(|id| !picked[..2].contains(id))
            .unwrap();
        assert_eq!(picked[2], expected);
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Any roster yields exactly three members drawn from it.
    #[test]
    fn prop_always_three_members_from_roster(
        ids in proptest::sample::subsequence((0u32..60).collect::<Vec<_>>(), 5),
        seed in any::<u64>(),
        bias in 0.0f64..=1.0,
    ) {
        let r = roster(&ids);
        let strategist = WeakBiasStrategist::new(300, bias);
        let team = strategist.draft(&r, &mut DraftRng::new(seed));

        prop_assert_eq!(team.len(), TEAM_SIZE);
        prop_assert!(team.iter().all(|m| r.contains(m.id())));
    }

    /// Repeats only occur when the roster lacks distinct candidates.
    #[test]
    fn prop_duplicates_only_without_enough_candidates(
        ids in proptest::sample::subsequence((0u32..60).collect::<Vec<_>>(), 5),
        seed in any::<u64>(),
    ) {
        // With the default bias the third pick only repeats when the roster
        // has no strong members and the random fallback lands on a pick.
        let r = roster(&ids);
        let has_strong = r.iter().any(|m| m.total >= 300);
        let team = WeakBiasStrategist::default().draft(&r, &mut DraftRng::new(seed));
        if has_strong {
            prop_assert!(!team.has_duplicates());
        }
    }
}
