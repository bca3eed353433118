//! Observable holder of one station's hourly series.

use chrono::{DateTime, Utc};
use log::{debug, info};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

use crate::refresh::RefreshSeq;
use crate::signal::ChangeSignal;
use vza_client::error::FetchError;
use vza_client::source::HourlySource;
use vza_model::annotate::{self, LabelPosition};
use vza_model::reading::HourlyReading;
use vza_model::series::HourlySeries;

struct SeriesState {
    series: HourlySeries,
    loading: bool,
    error: Option<String>,
}

/// Hourly readings store for a single station id.
///
/// Same refresh discipline as the catalog store: wholesale replace on
/// success, keep data and record a message on failure, drop stale
/// outcomes. Reads delegate to [`HourlySeries`] so every derived number
/// comes from one sorted snapshot.
pub struct SeriesStore {
    station_id: String,
    state: RwLock<SeriesState>,
    seq: RefreshSeq,
    signal: ChangeSignal,
}

impl SeriesStore {
    pub fn new(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            state: RwLock::new(SeriesState {
                series: HourlySeries::default(),
                loading: false,
                error: None,
            }),
            seq: RefreshSeq::new(),
            signal: ChangeSignal::new(),
        }
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SeriesState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SeriesState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the series from `source`.
    pub async fn refresh<S: HourlySource>(&self, source: &S) -> Result<(), FetchError> {
        // Ticket and loading flag move together under the lock, so ticket
        // order matches flag-write order.
        let ticket = {
            let mut state = self.write_state();
            state.loading = true;
            self.seq.claim()
        };
        self.signal.mark();

        let outcome = source.hourly(&self.station_id).await;

        let mut state = self.write_state();
        if !self.seq.is_current(ticket) {
            debug!(
                "discarding stale series refresh for {} (ticket {ticket})",
                self.station_id
            );
            return Ok(());
        }
        state.loading = false;
        match outcome {
            Ok(readings) => {
                info!(
                    "series refresh applied for {}: {} readings",
                    self.station_id,
                    readings.len()
                );
                state.series = HourlySeries::new(readings);
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

    pub fn latest(&self) -> Option<HourlyReading> {
        self.read_state().series.latest().cloned()
    }

    pub fn nearest_to(&self, target: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.read_state().series.nearest_to(target)
    }

    pub fn reading_at(&self, measure_date: DateTime<Utc>) -> Option<HourlyReading> {
        self.read_state().series.reading_at(measure_date).cloned()
    }

    pub fn water_level_percentile(&self, percentile: u8) -> Option<f32> {
        self.read_state().series.water_level_percentile(percentile)
    }

    /// Readings strictly newer than `cutoff`, newest first.
    pub fn readings_since(&self, cutoff: DateTime<Utc>) -> Vec<HourlyReading> {
        self.read_state().series.readings_since(cutoff).to_vec()
    }

    /// Callout position for `reading` against the current distribution.
    /// None when the reading has no level or the series has no levels to
    /// take quartiles from.
    pub fn label_position(
        &self,
        reading: &HourlyReading,
        half_time: DateTime<Utc>,
    ) -> Option<LabelPosition> {
        let value = reading.water_level?;
        let state = self.read_state();
        let p25 = state.series.water_level_percentile(25)?;
        let p75 = state.series.water_level_percentile(75)?;
        Some(annotate::place(
            reading.measure_date,
            value,
            half_time,
            p25,
            p75,
        ))
    }

    pub fn len(&self) -> usize {
        self.read_state().series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_state().series.is_empty()
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

    pub fn revision(&self) -> u64 {
        self.signal.revision()
    }
}
