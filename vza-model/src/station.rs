use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire;

/// One row of the station overview view (`gauging_stations_v`).
///
/// The id is assigned by the backend from the station and waterflow names
/// ("Budapest-Duna") and is the key the hourly rows and favorites refer to.
/// The whole list is replaced on every catalog refresh; rows are never
/// patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    /// Station (settlement) display name.
    pub gauging_station: String,
    /// River the station measures; the grouping key for list sections.
    pub waterflow: String,
    /// Latest water level in centimeters, absent when the sensor is down.
    #[serde(default, deserialize_with = "wire::de_opt_f32_from_any")]
    pub water_level: Option<f32>,
    /// Difference against the average level of the previous week.
    #[serde(default, deserialize_with = "wire::de_opt_f32_from_any")]
    pub diff_last_week_avg_water_level: Option<f32>,
    #[serde(deserialize_with = "wire::de_datetime_utc")]
    pub measurement_date: DateTime<Utc>,
}

/// One descriptive fact about a station (`gauging_station_desc`), such as
/// the river kilometer or the flood alert levels. Displayed ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDescription {
    pub id: i64,
    pub gauging_station: String,
    pub waterflow: String,
    pub name: String,
    pub value: String,
}
