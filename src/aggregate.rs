// Folding district observations into per-province yearly series.
use crate::policy::LAST_YEAR;
use crate::types::{RawObservation, YearlySeries};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Per-province series built from one ingestion pass.
///
/// Provinces are keyed by name in a `BTreeMap`, so every downstream walk
/// over them is in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSeries {
    pub series: BTreeMap<String, YearlySeries>,
}

impl RegionSeries {
    /// Sum planted area per (province, year). Observations with an empty
    /// parent region are dropped.
    pub fn from_observations(data: &[RawObservation]) -> Self {
        let mut series: BTreeMap<String, YearlySeries> = BTreeMap::new();
        let mut districts: BTreeSet<(&str, &str)> = BTreeSet::new();
        let mut skipped = 0usize;
        for obs in data {
            if obs.parent_region.is_empty() {
                skipped += 1;
                continue;
            }
            districts.insert((obs.parent_region_id.as_str(), obs.region_id.as_str()));
            *series
                .entry(obs.parent_region.clone())
                .or_default()
                .entry(obs.year)
                .or_insert(0.0) += obs.planted_area;
        }
        debug!(
            regions = series.len(),
            districts = districts.len(),
            skipped,
            "yearly series aggregated"
        );
        Self { series }
    }

    /// Sum of every province's area for `year` (missing years count as 0).
    pub fn national_total(&self, year: i32) -> f64 {
        self.series.values().map(|s| area_in(s, year)).sum()
    }

    /// Market-share denominator.
    pub fn national_total_2022(&self) -> f64 {
        self.national_total(LAST_YEAR)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Area for `year`, 0 when the year is absent.
pub fn area_in(series: &YearlySeries, year: i32) -> f64 {
    series.get(&year).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(year: i32, parent: &str, area: f64) -> RawObservation {
        RawObservation {
            year,
            region: format!("{parent}-district"),
            region_id: String::new(),
            parent_region: parent.to_string(),
            parent_region_id: String::new(),
            planted_area: area,
        }
    }

    #[test]
    fn sums_districts_into_provinces() {
        let data = vec![
            obs(2003, "RIAU", 10.0),
            obs(2003, "RIAU", 15.0),
            obs(2022, "RIAU", 40.0),
            obs(2022, "JAMBI", 60.0),
        ];
        let agg = RegionSeries::from_observations(&data);
        assert_eq!(agg.len(), 2);
        assert_eq!(area_in(&agg.series["RIAU"], 2003), 25.0);
        assert_eq!(area_in(&agg.series["RIAU"], 2010), 0.0);
        assert_eq!(agg.national_total_2022(), 100.0);
    }

    #[test]
    fn empty_parent_region_is_dropped() {
        let data = vec![obs(2022, "", 99.0), obs(2022, "ACEH", 1.0)];
        let agg = RegionSeries::from_observations(&data);
        assert_eq!(agg.series.keys().collect::<Vec<_>>(), vec!["ACEH"]);
        assert_eq!(agg.national_total_2022(), 1.0);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut data = vec![
            obs(2004, "ACEH", 3.0),
            obs(2003, "RIAU", 1.0),
            obs(2004, "RIAU", 2.0),
        ];
        let forward = RegionSeries::from_observations(&data);
        data.reverse();
        assert_eq!(forward, RegionSeries::from_observations(&data));
    }
}
