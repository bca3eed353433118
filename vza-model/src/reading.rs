use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire;

/// One timestamped sensor sample for a station (`hourly_data`).
///
/// Any of the three measurements can be absent independently; a row with a
/// null water level is still kept because discharge or temperature may be
/// present. The station and waterflow names are denormalized into the rows
/// for labeling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyReading {
    pub id: String,
    pub gauging_station: String,
    pub waterflow: String,
    /// Foreign key to [`crate::station::Station::id`].
    pub gauging_station_id: String,
    #[serde(deserialize_with = "wire::de_datetime_utc")]
    pub measure_date: DateTime<Utc>,
    /// Water level in centimeters.
    #[serde(default, deserialize_with = "wire::de_opt_f32_from_any")]
    pub water_level: Option<f32>,
    /// Discharge in cubic meters per second.
    #[serde(default, deserialize_with = "wire::de_opt_f32_from_any")]
    pub water_discharge: Option<f32>,
    /// Water temperature in degrees Celsius.
    #[serde(default, deserialize_with = "wire::de_opt_f32_from_any")]
    pub water_temp: Option<f32>,
}
