//! Roster acquisition.
//!
//! Pick a random catalog page, shuffle it, keep the first `ROSTER_SIZE`
//! distinct characters and turn each into a `Combatant`. This is the only
//! asynchronous step of a session.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::cards::{AbilityTable, CharacterRecord, Combatant};
use crate::core::{DraftConfig, DraftRng, ROSTER_SIZE};
use crate::error::AcquisitionError;

use super::catalog::CatalogSource;
use super::pool::Roster;

/// Builds rosters from catalog pages.
#[derive(Clone, Debug)]
pub struct RosterAcquirer {
    page_count: u32,
    abilities: AbilityTable,
}

impl RosterAcquirer {
    /// Acquirer drawing from pages `1..=page_count`.
    pub fn new(page_count: u32) -> Self {
        Self {
            page_count: page_count.max(1),
            abilities: AbilityTable::standard(),
        }
    }

    pub fn from_config(config: &DraftConfig) -> Self {
        Self::new(config.page_count)
    }

    /// Replace the ability table used for generated combatants.
    #[must_use]
    pub fn with_abilities(mut self, abilities: AbilityTable) -> Self {
        self.abilities = abilities;
        self
    }

    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Uniform page in `1..=page_count`.
    pub fn pick_page(&self, rng: &mut DraftRng) -> u32 {
        rng.gen_range_inclusive(1..=self.page_count)
    }

    /// Fetch a random page and build a roster from it.
    ///
    /// Fails without retrying; the caller decides whether to try again.
    pub async fn acquire<C>(
        &self,
        catalog: &C,
        rng: &mut DraftRng,
    ) -> Result<Roster, AcquisitionError>
    where
        C: CatalogSource + ?Sized,
    {
        let page = self.pick_page(rng);
        let records = catalog.fetch_page(page).await.map_err(|e| {
            warn!(page, error = %e, "catalog fetch failed");
            AcquisitionError::from(e)
        })?;
        self.build(page, records, rng)
    }

    /// Shuffle a fetched page and keep the first `ROSTER_SIZE` distinct records.
    pub fn build(
        &self,
        page: u32,
        records: Vec<CharacterRecord>,
        rng: &mut DraftRng,
    ) -> Result<Roster, AcquisitionError> {
        let mut seen = FxHashSet::default();
        let mut distinct: Vec<CharacterRecord> =
            records.into_iter().filter(|r| seen.insert(r.id)).collect();

        if distinct.len() < ROSTER_SIZE {
            warn!(page, found = distinct.len(), "page too small for a roster");
            return Err(AcquisitionError::InsufficientRoster {
                page,
                found: distinct.len(),
                needed: ROSTER_SIZE,
            });
        }

        rng.shuffle(&mut distinct);
        distinct.truncate(ROSTER_SIZE);

        let roster: Roster = distinct
            .into_iter()
            .map(|record| Combatant::generate_with(record, &self.abilities))
            .collect();

        debug!(page, ids = ?roster.ids(), "roster acquired");
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CharacterId;

    fn records(ids: impl IntoIterator<Item = u32>) -> Vec<CharacterRecord> {
        ids.into_iter()
            .map(|id| CharacterRecord::new(id, format!("Character {id}"), ""))
            .collect()
    }

    #[test]
    fn test_build_takes_five_from_page() {
        let acquirer = RosterAcquirer::new(42);
        let mut rng = DraftRng::new(1);

        let roster = acquirer.build(3, records(41..=60), &mut rng).unwrap();
        assert_eq!(roster.len(), ROSTER_SIZE);

        let ids = roster.ids();
        assert!(ids.iter().all(|id| (41..=60).contains(&id.raw())));
        let unique: FxHashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ROSTER_SIZE);
    }

    #[test]
    fn test_build_shuffles() {
        let acquirer = RosterAcquirer::new(1);
        let mut rng = DraftRng::new(99);
        let orders: FxHashSet<Vec<CharacterId>> = (0..20)
            .map(|_| acquirer.build(1, records(1..=20), &mut rng).unwrap().ids())
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_build_rejects_short_page() {
        let acquirer = RosterAcquirer::new(42);
        let mut rng = DraftRng::new(1);
        let err = acquirer.build(42, records(1..=4), &mut rng).unwrap_err();
        assert_eq!(
            err,
            AcquisitionError::InsufficientRoster { page: 42, found: 4, needed: 5 }
        );
    }

    #[test]
    fn test_build_counts_distinct_only() {
        let acquirer = RosterAcquirer::new(1);
        let mut rng = DraftRng::new(1);
        let err = acquirer
            .build(1, records([1, 2, 2, 3, 3, 4]), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            AcquisitionError::InsufficientRoster { page: 1, found: 4, needed: 5 }
        );

        let roster = acquirer.build(1, records([1, 1, 2, 3, 4, 5]), &mut rng).unwrap();
        let mut ids = roster.ids();
        ids.sort();
        assert_eq!(ids, (1..=5).map(CharacterId).collect::<Vec<_>>());
    }

    #[test]
    fn test_pick_page_range() {
        let acquirer = RosterAcquirer::new(42);
        let mut rng = DraftRng::new(5);
        for _ in 0..1_000 {
            let page = acquirer.pick_page(&mut rng);
            assert!((1..=42).contains(&page));
        }
    }

    #[test]
    fn test_zero_page_count_clamped() {
        assert_eq!(RosterAcquirer::new(0).page_count(), 1);
    }
}
