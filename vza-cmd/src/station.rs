//! Single station detail command.

use chrono::{DateTime, Utc};

use crate::ApiOptions;
use vza_model::reading::HourlyReading;
use vza_model::timeframe::TimeFrame;
use vza_store::catalog::CatalogStore;
use vza_store::descriptions::DescriptionStore;
use vza_store::series::SeriesStore;

/// Print what the app's detail screen derives for one station: the latest
/// reading, the level quartiles, the reading count inside the chart
/// window, the callout position the chart would pick, optionally the
/// reading nearest a requested timestamp, and the descriptive facts.
pub async fn run_station(
    api: &ApiOptions,
    id: &str,
    timeframe: TimeFrame,
    at: Option<DateTime<Utc>>,
) -> anyhow::Result<()> {
    let client = api.client()?;
    let catalog = CatalogStore::new();
    catalog.refresh(&client).await?;
    let station = catalog
        .station(id)
        .ok_or_else(|| anyhow::anyhow!("unknown station id: {id}"))?;

    let series = SeriesStore::new(id);
    let descriptions = DescriptionStore::new(&station.gauging_station, &station.waterflow);
    // The detail screen loads both row sets at once.
    tokio::try_join!(series.refresh(&client), descriptions.refresh(&client))?;

    let now = Utc::now();
    println!("{} ({})", station.gauging_station, station.waterflow);

    match series.latest() {
        Some(reading) => println!("Latest: {} at {}", reading_line(&reading), reading.measure_date),
        None => println!("No readings loaded"),
    }

    match (
        series.water_level_percentile(25),
        series.water_level_percentile(75),
    ) {
        (Some(p25), Some(p75)) => println!("Level quartiles: p25 {p25:.0} cm, p75 {p75:.0} cm"),
        _ => println!("Level quartiles: n/a"),
    }

    let in_frame = series.readings_since(timeframe.start(now)).len();
    println!("{}: {} readings", timeframe.label(), in_frame);

    if let Some(latest) = series.latest() {
        if let Some(position) = series.label_position(&latest, timeframe.half_time(now)) {
            println!("Callout for latest: {position:?}");
        }
    }

    if let Some(target) = at {
        match series.nearest_to(target) {
            Some(nearest) => {
                println!("Nearest to {target}: {nearest}");
                if let Some(reading) = series.reading_at(nearest) {
                    println!("  {}", reading_line(&reading));
                }
            }
            None => println!("Nearest to {target}: no readings"),
        }
    }

    let entries = descriptions.entries();
    if !entries.is_empty() {
        println!();
        println!("Station info");
        for entry in entries {
            println!("  {}: {}", entry.name, entry.value);
        }
    }
    Ok(())
}

fn reading_line(reading: &HourlyReading) -> String {
    let level = reading
        .water_level
        .map_or("n/a".to_string(), |value| format!("{value:.0} cm"));
    let mut extras = Vec::new();
    if let Some(discharge) = reading.water_discharge {
        extras.push(format!("{discharge:.1} m3/s"));
    }
    if let Some(temp) = reading.water_temp {
        extras.push(format!("{temp:.1} C"));
    }
    if extras.is_empty() {
        level
    } else {
        format!("{} ({})", level, extras.join(", "))
    }
}
