//! Station list command.

use log::info;
use std::path::Path;

use crate::{ApiOptions, FAVORITES_KEY};
use vza_model::station::Station;
use vza_store::catalog::CatalogStore;
use vza_store::favorites::FavoritesStore;
use vza_store::kv::JsonFileStore;

/// Refresh the catalog and print it the way the app's list screen shows
/// it: a favorites block first, then one block per waterflow. Favorite ids
/// missing from the catalog print as placeholders, not errors.
pub async fn run_stations(api: &ApiOptions, filter: &str, favorites_file: &Path) -> anyhow::Result<()> {
    let client = api.client()?;
    let store = CatalogStore::new();
    store.refresh(&client).await?;
    info!("catalog loaded: {} stations", store.len());

    let favorites = FavoritesStore::load(JsonFileStore::new(favorites_file), FAVORITES_KEY);
    let pinned = favorites.list();
    if !pinned.is_empty() {
        println!("Favorites");
        for id in &pinned {
            match store.station(id) {
                Some(station) => println!("  {}", station_line(&station)),
                None => println!("  {id} (not loaded)"),
            }
        }
        println!();
    }

    let sections = store.sections(filter);
    if sections.is_empty() {
        println!("No stations match {filter:?}");
        return Ok(());
    }
    for section in sections {
        println!("{}", section.title);
        for station in &section.stations {
            println!("  {}", station_line(station));
        }
        println!();
    }
    Ok(())
}

fn station_line(station: &Station) -> String {
    let level = station
        .water_level
        .map_or("n/a".to_string(), |value| format!("{value:.0} cm"));
    let diff = station
        .diff_last_week_avg_water_level
        .map_or(String::new(), |value| format!(" ({value:+.0} vs weekly avg)"));
    format!("{}: {}{}", station.gauging_station, level, diff)
}

#[cfg(test)]
mod tests {
    use super::station_line;
    use chrono::{TimeZone, Utc};
    use vza_model::station::Station;

    fn station(water_level: Option<f32>, diff: Option<f32>) -> Station {
        Station {
            id: "Budapest-Duna".to_string(),
            gauging_station: "Budapest".to_string(),
            waterflow: "Duna".to_string(),
            water_level,
            diff_last_week_avg_water_level: diff,
            measurement_date: Utc.with_ymd_and_hms(2023, 7, 18, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn formats_levels_and_diffs() {
        assert_eq!(
            station_line(&station(Some(250.0), Some(10.0))),
            "Budapest: 250 cm (+10 vs weekly avg)"
        );
        assert_eq!(
            station_line(&station(Some(250.0), Some(-3.4))),
            "Budapest: 250 cm (-3 vs weekly avg)"
        );
        assert_eq!(station_line(&station(None, None)), "Budapest: n/a");
    }
}
