//! Hourly time series for a single station.

use chrono::{DateTime, Utc};

use crate::reading::HourlyReading;

/// Hourly readings for one station, newest first.
///
/// The backend is asked for descending order but the ingest sort makes that
/// a hint rather than a contract: readings are re-sorted descending by
/// measure date (stable, so equal timestamps keep their fetch order). That
/// gives `latest` a fixed home at index 0 and every lookup one stable order
/// to break ties against.
#[derive(Debug, Clone, Default)]
pub struct HourlySeries {
    readings: Vec<HourlyReading>,
}

impl HourlySeries {
    pub fn new(mut readings: Vec<HourlyReading>) -> Self {
        readings.sort_by(|a, b| b.measure_date.cmp(&a.measure_date));
        Self { readings }
    }

    pub fn readings(&self) -> &[HourlyReading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The most recent reading, if any.
    pub fn latest(&self) -> Option<&HourlyReading> {
        self.readings.first()
    }

    /// Measure date closest in absolute distance to `target`. Ties go to
    /// the first occurrence in stored order, i.e. the later timestamp.
    pub fn nearest_to(&self, target: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.readings
            .iter()
            .min_by_key(|reading| (reading.measure_date - target).abs())
            .map(|reading| reading.measure_date)
    }

    /// First stored reading carrying exactly this measure date.
    pub fn reading_at(&self, measure_date: DateTime<Utc>) -> Option<&HourlyReading> {
        self.readings
            .iter()
            .find(|reading| reading.measure_date == measure_date)
    }

    /// Order-statistic percentile over one optional field: the non-null
    /// values are sorted ascending and the value at index
    /// `count * p / 100` (clamped to the last index) is returned as-is,
    /// with no interpolation. None when no non-null values exist.
    pub fn percentile_by<F>(&self, percentile: u8, field: F) -> Option<f32>
    where
        F: Fn(&HourlyReading) -> Option<f32>,
    {
        let mut values: Vec<f32> = self.readings.iter().filter_map(field).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f32::total_cmp);
        let index = (values.len() * percentile as usize / 100).min(values.len() - 1);
        Some(values[index])
    }

    /// [`Self::percentile_by`] over the water level.
    pub fn water_level_percentile(&self, percentile: u8) -> Option<f32> {
        self.percentile_by(percentile, |reading| reading.water_level)
    }

    /// Readings strictly newer than `cutoff`, newest first.
    pub fn readings_since(&self, cutoff: DateTime<Utc>) -> &[HourlyReading] {
        let end = self
            .readings
            .partition_point(|reading| reading.measure_date > cutoff);
        &self.readings[..end]
    }
}
