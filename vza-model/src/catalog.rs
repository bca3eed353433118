//! Sectioned station list with text filtering.

use itertools::Itertools;
use std::collections::HashMap;

use crate::matcher;
use crate::station::Station;

/// One display section: a waterflow title plus its stations in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub title: String,
    pub stations: Vec<Station>,
}

/// The full station list, indexed by id and grouped by waterflow on demand.
///
/// Section titles come out in code point order, which is deterministic
/// across platforms. Stations inside a section sort by the folded form of
/// their name so accented names land next to their unaccented neighbors,
/// with the raw name as tie-break.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    stations: Vec<Station>,
    by_id: HashMap<String, usize>,
}

impl StationCatalog {
    pub fn new(stations: Vec<Station>) -> Self {
        let by_id = stations
            .iter()
            .enumerate()
            .map(|(index, station)| (station.id.clone(), index))
            .collect();
        Self { stations, by_id }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Direct lookup by station id.
    pub fn station_by_id(&self, id: &str) -> Option<&Station> {
        self.by_id.get(id).map(|&index| &self.stations[index])
    }

    /// Stations whose name or waterflow matches `search`, grouped into
    /// waterflow sections. An empty search keeps everything.
    pub fn filtered_sections(&self, search: &str) -> Vec<CatalogSection> {
        let mut matched: Vec<&Station> = self
            .stations
            .iter()
            .filter(|station| {
                search.is_empty()
                    || matcher::matches(&station.gauging_station, search)
                    || matcher::matches(&station.waterflow, search)
            })
            .collect();

        matched.sort_by_cached_key(|station| {
            (
                station.waterflow.clone(),
                matcher::fold(&station.gauging_station),
                station.gauging_station.clone(),
            )
        });

        let mut sections = Vec::new();
        for (title, group) in &matched
            .into_iter()
            .chunk_by(|station| station.waterflow.clone())
        {
            sections.push(CatalogSection {
                title,
                stations: group.cloned().collect(),
            });
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::StationCatalog;
    use crate::station::Station;
    use chrono::{TimeZone, Utc};

    fn station(name: &str, waterflow: &str) -> Station {
        Station {
            id: format!("{name}-{waterflow}"),
            gauging_station: name.to_string(),
            waterflow: waterflow.to_string(),
            water_level: Some(100.0),
            diff_last_week_avg_water_level: None,
            measurement_date: Utc.with_ymd_and_hms(2023, 7, 18, 10, 0, 0).unwrap(),
        }
    }

    fn sample_catalog() -> StationCatalog {
        StationCatalog::new(vec![
            station("Zeta", "Duna"),
            station("Alpha", "Duna"),
            station("Beta", "Tisza"),
        ])
    }

    #[test]
    fn groups_by_waterflow_and_sorts() {
        let sections = sample_catalog().filtered_sections("");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Duna");
        assert_eq!(sections[1].title, "Tisza");

        let duna_names: Vec<_> = sections[0]
            .stations
            .iter()
            .map(|s| s.gauging_station.as_str())
            .collect();
        assert_eq!(duna_names, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn empty_search_keeps_every_station() {
        let sections = sample_catalog().filtered_sections("");
        let total: usize = sections.iter().map(|s| s.stations.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn filters_by_station_name() {
        let sections = sample_catalog().filtered_sections("alp");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Duna");
        assert_eq!(sections[0].stations.len(), 1);
        assert_eq!(sections[0].stations[0].gauging_station, "Alpha");
    }

    #[test]
    fn filters_by_waterflow_name() {
        let sections = sample_catalog().filtered_sections("tisza");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Tisza");
        assert_eq!(sections[0].stations[0].gauging_station, "Beta");
    }

    #[test]
    fn filter_is_diacritic_insensitive() {
        let catalog = StationCatalog::new(vec![station("Göd", "Duna")]);
        let sections = catalog.filtered_sections("god");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].stations[0].gauging_station, "Göd");

        assert!(catalog.filtered_sections("szeged").is_empty());
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let catalog = StationCatalog::new(vec![
            station("Esztergom", "Duna"),
            station("Érd", "Duna"),
            station("Eger", "Duna"),
        ]);
        let sections = catalog.filtered_sections("");
        let names: Vec<_> = sections[0]
            .stations
            .iter()
            .map(|s| s.gauging_station.as_str())
            .collect();
        // Code point order would push "Érd" after "Esztergom"; folded order
        // keeps it between the plain E names.
        assert_eq!(names, vec!["Eger", "Érd", "Esztergom"]);
    }

    #[test]
    fn station_by_id_lookup() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.station_by_id("Alpha-Duna").map(|s| s.gauging_station.as_str()),
            Some("Alpha")
        );
        assert!(catalog.station_by_id("Missing-Duna").is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = StationCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.filtered_sections("").is_empty());
    }
}
