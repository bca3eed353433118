//! Domain model for Hungarian river gauging stations: wire row types,
//! the sectioned station catalog, hourly time series math, and chart
//! callout placement. No I/O lives here; fetching is the client crate's
//! job and state holding is the store crate's.

pub mod annotate;
pub mod catalog;
pub mod matcher;
pub mod reading;
pub mod series;
pub mod station;
pub mod timeframe;
mod wire;
