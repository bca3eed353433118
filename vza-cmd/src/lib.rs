//! Command implementations for the vizallas CLI.
//!
//! The CLI drives the same catalog, series and favorites stores the app
//! shell uses, printing their views instead of rendering them.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use vza_client::config::ClientConfig;
use vza_client::rest::RestClient;
use vza_model::timeframe::TimeFrame;

pub mod favorites;
pub mod station;
pub mod stations;

/// Default favorites file, next to wherever the tool runs.
pub const DEFAULT_FAVORITES_FILE: &str = "vizallas-favorites.json";

/// Key under which the favorite list is persisted.
pub(crate) const FAVORITES_KEY: &str = "favorites";

/// Backend connection flags, with environment fallbacks.
#[derive(Args)]
pub struct ApiOptions {
    /// Backend base URL (falls back to $VIZALLAS_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Backend API key (falls back to $VIZALLAS_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,
}

impl ApiOptions {
    pub fn client(&self) -> anyhow::Result<RestClient> {
        let base_url = self
            .api_url
            .clone()
            .or_else(|| std::env::var("VIZALLAS_API_URL").ok())
            .ok_or_else(|| anyhow::anyhow!("no backend URL: pass --api-url or set VIZALLAS_API_URL"))?;
        let api_key = self
            .api_key
            .clone()
            .or_else(|| std::env::var("VIZALLAS_API_KEY").ok())
            .ok_or_else(|| anyhow::anyhow!("no API key: pass --api-key or set VIZALLAS_API_KEY"))?;
        Ok(RestClient::new(ClientConfig::new(base_url, api_key))?)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List stations grouped by waterflow, favorites first
    Stations {
        /// Keep only stations whose name or waterflow matches (diacritic
        /// and case insensitive)
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Favorites file to read pinned stations from
        #[arg(long, default_value = DEFAULT_FAVORITES_FILE)]
        file: PathBuf,
    },

    /// Show details and series statistics for one station
    Station {
        /// Station id, e.g. "Budapest-Duna"
        id: String,

        /// Chart window: week, month or year
        #[arg(short, long, default_value = "week")]
        timeframe: TimeFrame,

        /// Also print the reading nearest to this RFC 3339 timestamp
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// Manage pinned stations
    Favorites {
        #[command(subcommand)]
        action: favorites::FavoritesAction,

        /// Favorites file
        #[arg(long, default_value = DEFAULT_FAVORITES_FILE)]
        file: PathBuf,
    },
}

pub async fn run(api: ApiOptions, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stations { filter, file } => stations::run_stations(&api, &filter, &file).await,
        Command::Station { id, timeframe, at } => {
            station::run_station(&api, &id, timeframe, at).await
        }
        Command::Favorites { action, file } => favorites::run_favorites(action, &file),
    }
}
