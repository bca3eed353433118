//! Observable holder of one station's descriptive facts.

use log::{debug, info};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

use crate::refresh::RefreshSeq;
use crate::signal::ChangeSignal;
use vza_client::error::FetchError;
use vza_client::source::DescriptionSource;
use vza_model::station::StationDescription;

struct DescriptionState {
    entries: Vec<StationDescription>,
    loading: bool,
    error: Option<String>,
}

/// Description rows for one station and waterflow pair, kept sorted by id.
/// The backend is asked for id order but the ingest sort does not rely on
/// it. Refresh behaves exactly like the other fetching stores.
pub struct DescriptionStore {
    gauging_station: String,
    waterflow: String,
    state: RwLock<DescriptionState>,
    seq: RefreshSeq,
    signal: ChangeSignal,
}

impl DescriptionStore {
    pub fn new(gauging_station: impl Into<String>, waterflow: impl Into<String>) -> Self {
        Self {
            gauging_station: gauging_station.into(),
            waterflow: waterflow.into(),
            state: RwLock::new(DescriptionState {
                entries: Vec::new(),
                loading: false,
                error: None,
            }),
            seq: RefreshSeq::new(),
            signal: ChangeSignal::new(),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, DescriptionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, DescriptionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub async fn refresh<S: DescriptionSource>(&self, source: &S) -> Result<(), FetchError> {
        // Ticket and loading flag move together under the lock, so ticket
        // order matches flag-write order.
        let ticket = {
            let mut state = self.write_state();
            state.loading = true;
            self.seq.claim()
        };
        self.signal.mark();

        let outcome = source
            .descriptions(&self.gauging_station, &self.waterflow)
            .await;

        let mut state = self.write_state();
        if !self.seq.is_current(ticket) {
            debug!(
                "discarding stale description refresh for {} (ticket {ticket})",
                self.gauging_station
            );
            return Ok(());
        }
        state.loading = false;
        match outcome {
            Ok(mut entries) => {
                info!(
                    "description refresh applied for {}: {} rows",
                    self.gauging_station,
                    entries.len()
                );
                entries.sort_by_key(|entry| entry.id);
                state.entries = entries;
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

    /// All rows ordered by id.
    pub fn entries(&self) -> Vec<StationDescription> {
        self.read_state().entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.read_state().entries.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read_state().error.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.signal.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::DescriptionStore;
    use vza_client::error::{FetchError, Result};
    use vza_client::source::DescriptionSource;
    use vza_model::station::StationDescription;

    fn entry(id: i64, name: &str, value: &str) -> StationDescription {
        StationDescription {
            id,
            gauging_station: "Budapest".to_string(),
            waterflow: "Duna".to_string(),
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    struct FixedSource(Vec<StationDescription>);

    impl DescriptionSource for FixedSource {
        async fn descriptions(
            &self,
            _gauging_station: &str,
            _waterflow: &str,
        ) -> Result<Vec<StationDescription>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl DescriptionSource for FailingSource {
        async fn descriptions(
            &self,
            _gauging_station: &str,
            _waterflow: &str,
        ) -> Result<Vec<StationDescription>> {
            Err(FetchError::Config("backend unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn entries_come_back_sorted_by_id() {
        let store = DescriptionStore::new("Budapest", "Duna");
        let source = FixedSource(vec![
            entry(3, "Alert level I", "620 cm"),
            entry(1, "River km", "1646.5"),
            entry(2, "Catchment", "184767 km2"),
        ]);
        store.refresh(&source).await.unwrap();

        let ids: Vec<_> = store.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.entries()[0].name, "River km");
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn failed_refresh_preserves_previous_entries() {
        let store = DescriptionStore::new("Budapest", "Duna");
        let seed = FixedSource(vec![
            entry(1, "River km", "1646.5"),
            entry(2, "Catchment", "184767 km2"),
        ]);
        store.refresh(&seed).await.unwrap();
        assert_eq!(store.entries().len(), 2);

        let result = store.refresh(&FailingSource).await;
        assert!(result.is_err());
        assert_eq!(store.entries().len(), 2, "failure must not clear loaded rows");
        assert!(store.error().unwrap().contains("backend unreachable"));
        assert!(!store.is_loading());

        // The next success clears the sticky error.
        store.refresh(&seed).await.unwrap();
        assert!(store.error().is_none());
    }
}
