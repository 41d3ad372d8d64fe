//! Async driver for a `Session`.
//!
//! `GameSession` wires a session to a catalog and to tokio: it awaits the
//! roster fetch, runs the result delay as a spawned timer, and publishes a
//! `SessionSnapshot` on a watch channel after every change. The session
//! lock is never held across the catalog request.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::{CharacterId, DraftConfig};
use crate::draft::DraftStep;
use crate::error::{AcquisitionError, ConfigError};
use crate::roster::{CatalogSource, RosterAcquirer};

use super::machine::Session;
use super::phase::{AcquisitionTicket, ResolutionTicket};
use super::snapshot::SessionSnapshot;

/// A playable session backed by a catalog.
pub struct GameSession<C: CatalogSource + 'static> {
    session: Arc<Mutex<Session>>,
    catalog: Arc<C>,
    acquirer: RosterAcquirer,
    updates: Arc<watch::Sender<SessionSnapshot>>,
    pending: Option<JoinHandle<()>>,
}

impl<C: CatalogSource + 'static> GameSession<C> {
    pub fn new(config: DraftConfig, catalog: C) -> Result<Self, ConfigError> {
        let acquirer = RosterAcquirer::from_config(&config);
        let session = Session::new(config)?;
        Ok(Self::with_parts(session, Arc::new(catalog), acquirer))
    }

    /// Assemble from an existing session and acquirer.
    pub fn with_parts(session: Session, catalog: Arc<C>, acquirer: RosterAcquirer) -> Self {
        let (updates, _) = watch::channel(session.snapshot());
        Self {
            session: Arc::new(Mutex::new(session)),
            catalog,
            acquirer,
            updates: Arc::new(updates),
            pending: None,
        }
    }

    /// Receive a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    /// Acquire the first roster.
    pub async fn start(&mut self) -> Result<(), AcquisitionError> {
        self.replay().await
    }

    /// Throw away the current game and acquire a fresh roster.
    ///
    /// Cancels any pending result timer. On failure the session stays in
    /// `Loading` and the error is both returned and published.
    pub async fn replay(&mut self) -> Result<(), AcquisitionError> {
        self.cancel_pending();

        let AcquisitionTicket { generation, mut rng } = {
            let mut session = self.session.lock().await;
            let ticket = session.begin_acquisition();
            self.publish(&session);
            ticket
        };

        let result = self
            .acquirer
            .acquire(self.catalog.as_ref(), &mut rng)
            .await;

        let mut session = self.session.lock().await;
        let reported = result.as_ref().map(|_| ()).map_err(|e| e.clone());
        if session.install_roster(generation, result) {
            self.publish(&session);
        }
        reported
    }

    /// Player picks a roster member; the third pick schedules the result.
    pub async fn select(&mut self, id: CharacterId) -> DraftStep {
        let (step, ticket) = {
            let mut session = self.session.lock().await;
            let step = session.select(id);
            if !step.is_ignored() {
                self.publish(&session);
            }
            (step, session.resolution_ticket())
        };

        if step == DraftStep::Completed {
            if let Some(ticket) = ticket {
                self.schedule_resolution(ticket);
            }
        }
        step
    }

    /// Player drops a pick.
    pub async fn deselect(&mut self, id: CharacterId) -> bool {
        let mut session = self.session.lock().await;
        let removed = session.deselect(id);
        if removed {
            self.publish(&session);
        }
        removed
    }

    /// Whether a result timer is still outstanding.
    #[must_use]
    pub fn has_pending_resolution(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn schedule_resolution(&mut self, ticket: ResolutionTicket) {
        self.cancel_pending();

        let session = Arc::clone(&self.session);
        let updates = Arc::clone(&self.updates);
        debug!(
            generation = %ticket.generation,
            delay_ms = ticket.delay.as_millis() as u64,
            "result scheduled"
        );

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(ticket.delay).await;
            let mut session = session.lock().await;
            if session.complete_battle(ticket) {
                updates.send_replace(session.snapshot());
            }
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn publish(&self, session: &Session) {
        self.updates.send_replace(session.snapshot());
    }
}

impl<C: CatalogSource + 'static> Drop for GameSession<C> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
