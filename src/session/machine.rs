//! The session state machine.
//!
//! `Session` owns everything about one game: roster, both teams, outcome,
//! phase. It is synchronous; the asynchronous parts (fetching a roster,
//! waiting out the result delay) are driven from outside with tickets, and
//! every ticket is checked against the current `Generation` before it is
//! applied. A replay bumps the generation, so anything still in flight
//! from the previous game lands as a no-op.

use tracing::{debug, info, warn};

use crate::battle::{BattleResolver, MatchOutcome};
use crate::core::{CharacterId, DraftConfig, DraftRng, ROSTER_SIZE};
use crate::draft::{DraftController, DraftStep, IgnoreReason, Team};
use crate::error::{AcquisitionError, ConfigError};
use crate::opponent::{OpponentStrategy, WeakBiasStrategist};
use crate::roster::Roster;

use super::phase::{AcquisitionTicket, Generation, ResolutionTicket, SessionPhase};
use super::snapshot::{Scores, SessionSnapshot};

/// One game, from roster to result.
pub struct Session {
    config: DraftConfig,
    rng: DraftRng,
    strategist: Box<dyn OpponentStrategy>,
    resolver: BattleResolver,
    generation: Generation,
    phase: SessionPhase,
    roster: Roster,
    draft: DraftController,
    computer_team: Team,
    outcome: Option<MatchOutcome>,
    last_error: Option<AcquisitionError>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("generation", &self.generation)
            .field("phase", &self.phase)
            .field("roster", &self.roster.ids())
            .field("player_team", &self.draft.team().ids())
            .field("computer_team", &self.computer_team.ids())
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// New session in `Loading`, waiting for its first acquisition.
    pub fn new(config: DraftConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => DraftRng::new(seed),
            None => DraftRng::from_entropy(),
        };

        Ok(Self {
            strategist: Box::new(WeakBiasStrategist::from_config(&config)),
            resolver: BattleResolver::from_config(&config),
            rng,
            config,
            generation: Generation::default(),
            phase: SessionPhase::Loading,
            roster: Roster::default(),
            draft: DraftController::new(),
            computer_team: Team::new(),
            outcome: None,
            last_error: None,
        })
    }

    /// Replace the opponent.
    #[must_use]
    pub fn with_strategy(mut self, strategist: Box<dyn OpponentStrategy>) -> Self {
        self.strategist = strategist;
        self
    }

    #[must_use]
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn player_team(&self) -> &Team {
        self.draft.team()
    }

    #[must_use]
    pub fn computer_team(&self) -> &Team {
        &self.computer_team
    }

    /// Scores once the battle has started.
    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&AcquisitionError> {
        self.last_error.as_ref()
    }

    /// Start (or restart) the game: back to `Loading` with everything cleared.
    ///
    /// Legal from any phase. Tickets from earlier generations become stale.
    pub fn begin_acquisition(&mut self) -> AcquisitionTicket {
        self.generation = self.generation.next();
        self.phase = SessionPhase::Loading;
        self.roster = Roster::default();
        self.draft.reset();
        self.computer_team = Team::new();
        self.outcome = None;
        self.last_error = None;

        info!(generation = %self.generation, "session loading");
        AcquisitionTicket {
            generation: self.generation,
            rng: self.rng.fork(),
        }
    }

    /// Same as `begin_acquisition`.
    pub fn replay(&mut self) -> AcquisitionTicket {
        self.begin_acquisition()
    }

    /// Apply the result of an acquisition.
    ///
    /// Returns `false` when the ticket is stale and nothing changed. A
    /// failure keeps the session in `Loading` and records the error. A
    /// roster that is not exactly `ROSTER_SIZE` long counts as a failure.
    pub fn install_roster(
        &mut self,
        generation: Generation,
        result: Result<Roster, AcquisitionError>,
    ) -> bool {
        if generation != self.generation || self.phase != SessionPhase::Loading {
            warn!(%generation, current = %self.generation, "discarding stale roster");
            return false;
        }

        let result = result.and_then(|roster| {
            if roster.len() == ROSTER_SIZE {
                Ok(roster)
            } else {
                Err(AcquisitionError::RosterSize {
                    found: roster.len(),
                    needed: ROSTER_SIZE,
                })
            }
        });

        match result {
            Ok(roster) => {
                self.roster = roster;
                self.phase = SessionPhase::Selecting;
                info!(
                    generation = %self.generation,
                    ids = ?self.roster.ids(),
                    "session selecting"
                );
            }
            Err(e) => {
                warn!(generation = %self.generation, error = %e, "roster acquisition failed");
                self.last_error = Some(e);
            }
        }
        true
    }

    /// Player picks a roster member. Completing the team starts the battle.
    pub fn select(&mut self, id: CharacterId) -> DraftStep {
        if self.phase != SessionPhase::Selecting {
            debug!(%id, phase = %self.phase, "pick outside selection");
            return DraftStep::Ignored(IgnoreReason::NotSelecting);
        }

        let step = self.draft.select(&self.roster, id);
        if step == DraftStep::Completed {
            self.start_battle();
        }
        step
    }

    /// Player drops a pick. Only while `Selecting`.
    pub fn deselect(&mut self, id: CharacterId) -> bool {
        if self.phase != SessionPhase::Selecting {
            return false;
        }
        self.draft.deselect(id)
    }

    fn start_battle(&mut self) {
        self.computer_team = self.strategist.draft(&self.roster, &mut self.rng);
        let outcome = self
            .resolver
            .resolve(self.draft.team(), &self.computer_team, &mut self.rng);
        self.outcome = Some(outcome);
        self.phase = SessionPhase::Battle;
        info!(
            generation = %self.generation,
            player = ?self.draft.team().ids(),
            computer = ?self.computer_team.ids(),
            "session battle"
        );
    }

    /// Ticket for the pending `Battle -> Result` transition, if in `Battle`.
    #[must_use]
    pub fn resolution_ticket(&self) -> Option<ResolutionTicket> {
        (self.phase == SessionPhase::Battle).then_some(ResolutionTicket {
            generation: self.generation,
            delay: self.config.resolution_delay,
        })
    }

    /// Reveal the result. Returns `false` for a stale or misplaced ticket.
    pub fn complete_battle(&mut self, ticket: ResolutionTicket) -> bool {
        if ticket.generation != self.generation || self.phase != SessionPhase::Battle {
            warn!(
                ticket = %ticket.generation,
                current = %self.generation,
                "ignoring stale resolution"
            );
            return false;
        }
        self.phase = SessionPhase::Result;
        if let Some(outcome) = &self.outcome {
            info!(generation = %self.generation, winner = ?outcome.winner, "session result");
        }
        true
    }

    /// Current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let scores = self.outcome.as_ref().map(|o| Scores {
            player_total: o.player_total,
            computer_total: o.computer_total,
        });

        SessionSnapshot {
            generation: self.generation,
            phase: self.phase,
            roster: self.roster.clone(),
            player_team: self.draft.team().clone(),
            computer_team: self.computer_team.clone(),
            team_counter: self.draft.team().counter_label(),
            scores,
            outcome: if self.phase == SessionPhase::Result {
                self.outcome
            } else {
                None
            },
            last_error: self.last_error.as_ref().map(ToString::to_string),
        }
    }
}
