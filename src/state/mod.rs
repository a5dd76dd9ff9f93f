// State management module
//
// This module provides the StateManager, which turns the repository's two
// fetch operations into observable state slots for a presentation layer.
// Slots are tokio watch channels: each holds exactly one current value,
// reads are idempotent, and every publish atomically replaces the value.

use crate::metrics::Metrics;
use crate::models::{LoadState, PokemonDetail};
use crate::services::CatalogRepository;
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Current value of the catalog list slot.
pub type ListState = LoadState<Vec<String>>;

/// Current value of the detail slot. `None` until the first request.
pub type DetailState = Option<LoadState<PokemonDetail>>;

/// Orchestrates the two independent load streams and owns their slots.
///
/// # List stream
///
/// Started exactly once, at construction: the slot is created holding
/// [`LoadState::Loading`], so the first value any observer sees is
/// `Loading`, and a background task then publishes the single terminal
/// value. Because [`CatalogRepository::pokemon_names`] cannot fail, the
/// terminal value is `Ready` on every documented path; `Error` is reached
/// only if the fetch task itself dies (a panic in the transport stack).
/// The stream is not restartable and the resolved list is kept for the
/// manager's lifetime.
///
/// # Detail stream
///
/// Restarted on every [`request_detail`](Self::request_detail) call: the
/// slot moves to `Loading` synchronously, then to `Ready` or `Error` when
/// the fetch lands. Each request carries a sequence number; a result whose
/// sequence is no longer the latest is discarded, so the slot always
/// reflects the most recent request even when an older fetch finishes
/// later.
///
/// # Sharing
///
/// Both slots are written only by the manager's own tasks; observers read
/// through [`watch::Receiver`]s. The sequence counter is guarded by a
/// mutex held across check-and-publish, never across an await.
pub struct StateManager {
    repository: CatalogRepository,

    /// Runtime handle used to spawn fetch tasks.
    handle: Handle,

    list_tx: Arc<watch::Sender<ListState>>,
    detail_tx: Arc<watch::Sender<DetailState>>,

    /// Sequence number of the latest issued detail request.
    detail_seq: Arc<Mutex<u64>>,

    metrics: Arc<Metrics>,
}

impl StateManager {
    /// Create a manager and immediately start the list load.
    pub fn new(repository: CatalogRepository, handle: Handle) -> Self {
        let (list_tx, _) = watch::channel(LoadState::Loading);
        let (detail_tx, _) = watch::channel(None);

        let manager = Self {
            repository,
            handle,
            list_tx: Arc::new(list_tx),
            detail_tx: Arc::new(detail_tx),
            detail_seq: Arc::new(Mutex::new(0)),
            metrics: Arc::new(Metrics::new()),
        };

        manager.spawn_list_load();
        manager
    }

    /// Observe the list slot. The receiver's current value is always
    /// meaningful; no fetch happens on read.
    pub fn subscribe_list(&self) -> watch::Receiver<ListState> {
        self.list_tx.subscribe()
    }

    /// Observe the detail slot.
    pub fn subscribe_detail(&self) -> watch::Receiver<DetailState> {
        self.detail_tx.subscribe()
    }

    /// Snapshot of the list slot.
    pub fn list_state(&self) -> ListState {
        self.list_tx.borrow().clone()
    }

    /// Snapshot of the detail slot.
    pub fn detail_state(&self) -> DetailState {
        self.detail_tx.borrow().clone()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Fire-and-forget detail load for one catalog name.
    ///
    /// The detail slot is reset to `Loading` before this returns, replacing
    /// any previous value. Completion publishes `Ready(detail)` or, when
    /// the repository reports absence, `Error` with a cause message. If a
    /// newer request was issued in the meantime the completion is dropped.
    pub fn request_detail(&self, name: &str) {
        let name = name.to_string();

        // Bump the sequence and reset the slot under the same lock so a
        // concurrent completion cannot slip between the two.
        let seq = {
            let mut latest = self.detail_seq.lock().unwrap();
            *latest += 1;
            self.detail_tx.send_replace(Some(LoadState::Loading));
            *latest
        };

        self.metrics.record_detail_request();
        self.metrics.record_state_publish();
        tracing::debug!("detail request #{seq} issued for {name}");

        let repository = self.repository.clone();
        let detail_tx = Arc::clone(&self.detail_tx);
        let detail_seq = Arc::clone(&self.detail_seq);
        let metrics = Arc::clone(&self.metrics);

        self.handle.spawn(async move {
            let next = match repository.pokemon_detail(&name).await {
                Some(detail) => LoadState::Ready(detail),
                None => LoadState::Error(format!("no data for {name}")),
            };

            let latest = detail_seq.lock().unwrap();
            if *latest == seq {
                detail_tx.send_replace(Some(next));
                metrics.record_state_publish();
                metrics.record_detail_applied();
            } else {
                tracing::debug!(
                    "discarding stale detail result #{seq} for {name} (latest is #{})",
                    *latest
                );
                metrics.record_stale_discard();
            }
        });
    }

    /// Start the one-shot list load.
    fn spawn_list_load(&self) {
        let repository = self.repository.clone();
        let list_tx = Arc::clone(&self.list_tx);
        let metrics = Arc::clone(&self.metrics);

        self.handle.spawn(async move {
            metrics.record_list_fetch();

            // Run the fetch in its own task so that a panic below the
            // repository contract still resolves the stream instead of
            // leaving it on Loading forever.
            let outcome = tokio::spawn(async move { repository.pokemon_names().await }).await;

            let next = match outcome {
                Ok(names) => {
                    tracing::info!("catalog list resolved with {} entries", names.len());
                    LoadState::Ready(names)
                }
                Err(err) => {
                    tracing::error!("catalog list task failed: {err}");
                    LoadState::Error(err.to_string())
                }
            };

            list_tx.send_replace(next);
            metrics.record_state_publish();
        });
    }
}

// Clones share the same slots and sequence counter.
impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            handle: self.handle.clone(),
            list_tx: Arc::clone(&self.list_tx),
            detail_tx: Arc::clone(&self.detail_tx),
            detail_seq: Arc::clone(&self.detail_seq),
            metrics: Arc::clone(&self.metrics),
        }
    }
}
