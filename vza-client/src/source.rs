//! Source seams between the state containers and the concrete client.
//!
//! Stores depend on these traits instead of [`RestClient`] directly, so
//! tests drive them with in-memory doubles and a future host could plug in
//! a cache layer without the stores noticing.

use std::future::Future;

use crate::error::Result;
use crate::queries;
use crate::rest::RestClient;
use vza_model::reading::HourlyReading;
use vza_model::station::{Station, StationDescription};

/// Supplies the full station overview list.
pub trait StationSource {
    fn stations(&self) -> impl Future<Output = Result<Vec<Station>>> + Send;
}

/// Supplies hourly readings for one station.
pub trait HourlySource {
    fn hourly(&self, station_id: &str) -> impl Future<Output = Result<Vec<HourlyReading>>> + Send;
}

/// Supplies description rows for one station.
pub trait DescriptionSource {
    fn descriptions(
        &self,
        gauging_station: &str,
        waterflow: &str,
    ) -> impl Future<Output = Result<Vec<StationDescription>>> + Send;
}

impl StationSource for RestClient {
    async fn stations(&self) -> Result<Vec<Station>> {
        queries::fetch_stations(self).await
    }
}

impl HourlySource for RestClient {
    async fn hourly(&self, station_id: &str) -> Result<Vec<HourlyReading>> {
        queries::fetch_hourly(self, station_id).await
    }
}

impl DescriptionSource for RestClient {
    async fn descriptions(
        &self,
        gauging_station: &str,
        waterflow: &str,
    ) -> Result<Vec<StationDescription>> {
        queries::fetch_descriptions(self, gauging_station, waterflow).await
    }
}
