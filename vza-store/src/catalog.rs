//! Observable holder of the station overview list.

use log::{debug, info};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

use crate::refresh::RefreshSeq;
use crate::signal::ChangeSignal;
use vza_client::error::FetchError;
use vza_client::source::StationSource;
use vza_model::catalog::{CatalogSection, StationCatalog};
use vza_model::station::Station;

/// Everything a refresh touches, guarded as one unit so readers never see
/// a half-applied outcome.
struct CatalogState {
    catalog: StationCatalog,
    loading: bool,
    error: Option<String>,
}

/// Station list store.
///
/// `refresh` replaces the whole catalog from a [`StationSource`]; reads
/// hand out owned snapshots so the lock is never held across a caller's
/// work. Failed refreshes keep the previous list and surface a message
/// through [`error`](Self::error).
pub struct CatalogStore {
    state: RwLock<CatalogState>,
    seq: RefreshSeq,
    signal: ChangeSignal,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState {
                catalog: StationCatalog::new(Vec::new()),
                loading: false,
                error: None,
            }),
            seq: RefreshSeq::new(),
            signal: ChangeSignal::new(),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the station list from `source`. Stale outcomes, overtaken
    /// by a newer refresh, are discarded without touching any state.
    pub async fn refresh<S: StationSource>(&self, source: &S) -> Result<(), FetchError> {
        // Ticket and loading flag move together under the lock, so ticket
        // order matches flag-write order.
        let ticket = {
            let mut state = self.write_state();
            state.loading = true;
            self.seq.claim()
        };
        self.signal.mark();

        let outcome = source.stations().await;

        let mut state = self.write_state();
        if !self.seq.is_current(ticket) {
            debug!("discarding stale catalog refresh (ticket {ticket})");
            return Ok(());
        }
        state.loading = false;
        match outcome {
            Ok(stations) => {
                info!("catalog refresh applied: {} stations", stations.len());
                state.catalog = StationCatalog::new(stations);
                state.error = None;
                drop(state);
                self.signal.mark();
                Ok(())
            }
            Err(error) => {
                state.error = Some(error.to_string());
                drop(state);
                self.signal.mark();
                Err(error)
            }
        }
    }

    /// Filtered waterflow sections, see [`StationCatalog::filtered_sections`].
    pub fn sections(&self, search: &str) -> Vec<CatalogSection> {
        self.read_state().catalog.filtered_sections(search)
    }

    pub fn station(&self, id: &str) -> Option<Station> {
        self.read_state().catalog.station_by_id(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read_state().catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_state().catalog.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    /// Message from the last applied failure, cleared by the next success.
    pub fn error(&self) -> Option<String> {
        self.read_state().error.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.signal.subscribe()
    }

    pub fn revision(&self) -> u64 {
        self.signal.revision()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
