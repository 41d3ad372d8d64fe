//! Stat generation and ability lookup properties.

use portal_draft::cards::{AbilityTable, CharacterRecord, Combatant, Stats, MAX_TOTAL, MIN_TOTAL};
use portal_draft::core::CharacterId;
use proptest::prelude::*;

fn record(id: u32, name: &str) -> CharacterRecord {
    CharacterRecord::new(id, name, format!("https://example.test/{id}.jpeg"))
}

// =============================================================================
// Stat Generation Properties
// =============================================================================

proptest! {
    /// Totals stay within the documented bounds for every id.
    #[test]
    fn prop_total_in_range(id in any::<u32>()) {
        let stats = Stats::for_id(CharacterId(id));
        prop_assert!(stats.total >= MIN_TOTAL);
        prop_assert!(stats.total <= MAX_TOTAL);
        prop_assert_eq!(stats.total, stats.hp + stats.attack + stats.defense);
    }

    /// Each stat stays within its own band.
    #[test]
    fn prop_stat_components_in_range(id in any::<u32>()) {
        let stats = Stats::for_id(CharacterId(id));
        prop_assert!((100..250).contains(&stats.hp));
        prop_assert!((50..150).contains(&stats.attack));
        prop_assert!((30..100).contains(&stats.defense));
    }

    /// Generating twice from the same record gives the same combatant.
    #[test]
    fn prop_generation_is_referentially_stable(id in any::<u32>(), name in "[A-Za-z .]{0,24}") {
        let a = Combatant::generate(record(id, &name));
        let b = Combatant::generate(record(id, &name));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.stats(), Stats::for_id(CharacterId(id)));
    }

    /// Stats depend on the id alone.
    #[test]
    fn prop_stats_ignore_name(id in any::<u32>(), a in "[a-z]{1,10}", b in "[a-z]{1,10}") {
        let x = Combatant::generate(record(id, &a));
        let y = Combatant::generate(record(id, &b));
        prop_assert_eq!(x.stats(), y.stats());
    }

    /// Unlisted characters get the generic ability for `id % 5`.
    #[test]
    fn prop_generic_ability_is_one_of_five(id in any::<u32>()) {
        let ability = AbilityTable::standard().lookup(&record(id, "Unlisted Person"));
        let generic = [
            "Dimensional Shout",
            "Senseless Dance",
            "Questionable Existence",
            "Toxic Burp",
            "Existential Crisis",
        ];
        prop_assert_eq!(ability.name.as_str(), generic[(id % 5) as usize]);
    }
}

// =============================================================================
// Reference Values and Abilities
// =============================================================================

/// Values computed by hand from the stat formulas.
#[test]
fn test_reference_values() {
    let cases = [
        (0, 100, 50, 30, 180),
        (1, 107, 61, 43, 211),
        (4, 128, 94, 82, 304),
        (11, 177, 71, 33, 281),
        (16, 212, 126, 98, 436),
    ];
    for (id, hp, attack, defense, total) in cases {
        let stats = Stats::for_id(CharacterId(id));
        assert_eq!(stats, Stats { hp, attack, defense, total }, "id {id}");
    }
}

/// Every signature character maps to its own ability.
#[test]
fn test_signature_characters() {
    let table = AbilityTable::standard();
    let expected = [
        ("Rick Sanchez", "Drunken Portal"),
        ("Morty Smith", "Extreme Anxiety"),
        ("Summer Smith", "Instagram Influencer"),
        ("Beth Smith", "Horse Surgery"),
        ("Jerry Smith", "Being Pathetic"),
        ("Birdperson", "Majestic Flight"),
        ("Squanchy", "Squanchify"),
        ("Mr. Poopybutthole", "Ooh-wee!"),
        ("Evil Morty", "Manipulation"),
        ("Mr. Meeseeks", "Look at Me!"),
    ];
    for (name, ability) in expected {
        assert_eq!(table.lookup(&record(1, name)).name, ability, "{name}");
    }
}
