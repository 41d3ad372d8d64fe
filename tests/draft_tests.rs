//! Player draft invariants.

use portal_draft::cards::{CharacterRecord, Combatant};
use portal_draft::core::{CharacterId, TEAM_SIZE};
use portal_draft::draft::{DraftController, DraftStep};
use portal_draft::roster::Roster;
use proptest::prelude::*;

fn roster(ids: &[u32]) -> Roster {
    ids.iter()
        .map(|&id| Combatant::generate(CharacterRecord::new(id, format!("C{id}"), "")))
        .collect()
}

#[derive(Clone, Debug)]
enum Click {
    Select(u32),
    Deselect(u32),
}

fn click() -> impl Strategy<Value = Click> {
    prop_oneof![
        (0u32..8).prop_map(Click::Select),
        (0u32..8).prop_map(Click::Deselect),
    ]
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Any three distinct roster picks fill the team on the third.
    #[test]
    fn prop_three_distinct_picks_fill_team(
        picks in proptest::sample::subsequence(vec![1u32, 2, 3, 4, 5], 3),
    ) {
        let roster = roster(&[1, 2, 3, 4, 5]);
        let mut draft = DraftController::new();

        let steps: Vec<_> = picks
            .iter()
            .map(|&id| draft.select(&roster, CharacterId(id)))
            .collect();
        prop_assert_eq!(steps, vec![DraftStep::Added, DraftStep::Added, DraftStep::Completed]);
        prop_assert_eq!(draft.team().len(), TEAM_SIZE);
        prop_assert!(!draft.team().has_duplicates());
    }

    /// Arbitrary click sequences never overfill, duplicate, or leave the roster.
    #[test]
    fn prop_random_clicks_keep_invariants(clicks in proptest::collection::vec(click(), 0..40)) {
        let roster = roster(&[1, 2, 3, 4, 5]);
        let mut draft = DraftController::new();

        for c in clicks {
            match c {
                Click::Select(id) => { draft.select(&roster, CharacterId(id)); }
                Click::Deselect(id) => { draft.deselect(CharacterId(id)); }
            }
            let team = draft.team();
            prop_assert!(team.len() <= TEAM_SIZE);
            prop_assert!(!team.has_duplicates());
            prop_assert!(team.iter().all(|m| roster.contains(m.id())));
        }
    }
}

// =============================================================================
// Selection Values
// =============================================================================

/// A selected member is the roster entry itself, stats included.
#[test]
fn test_selected_member_is_roster_value() {
    let roster = roster(&[10, 20, 30, 40, 50]);
    let mut draft = DraftController::new();
    draft.select(&roster, CharacterId(30));
    assert_eq!(&draft.team().members()[0], roster.get(CharacterId(30)).unwrap());
}
