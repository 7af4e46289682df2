// National year-by-year totals and the two-decade comparison.
use crate::aggregate::{area_in, RegionSeries};
use crate::policy::{
    DecadeWindow, DECADE_WINDOWS, DEFAULT_EVENT, EMERGING_GROWTH_PCT, EMERGING_SHARE_PCT,
    FIRST_YEAR, LAST_YEAR, UNKNOWN_REGION,
};
use crate::types::{DecadalSummary, NationalTrendPoint, RegionProfile};
use crate::util::pct_change;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DECADE_EVENTS: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            "2003-2012",
            vec![
                "Rapid oil palm expansion",
                "Rising global demand",
                "New land clearing",
            ],
        ),
        (
            "2013-2022",
            vec![
                "Sustainability focus",
                "ISPO/RSPO certification",
                "Global environmental pressure",
                "Productivity improvement",
            ],
        ),
    ])
});

/// One point per year from 2003 to 2022, ascending.
pub fn national_trends(regions: &RegionSeries) -> Vec<NationalTrendPoint> {
    let mut points: Vec<NationalTrendPoint> = Vec::new();
    for year in FIRST_YEAR..=LAST_YEAR {
        let total_area = regions.national_total(year);
        let (top_region, top_region_area) = top_region(regions, year);
        let (growth_rate, annual_change) = match points.last() {
            Some(prev) if prev.total_area > 0.0 => (
                pct_change(prev.total_area, total_area),
                total_area - prev.total_area,
            ),
            _ => (0.0, 0.0),
        };
        points.push(NationalTrendPoint {
            year,
            total_area,
            growth_rate,
            top_region,
            top_region_area,
            annual_change,
        });
    }
    points
}

/// Largest province for `year`. Provinces are visited in name order and only
/// a strictly larger area takes the lead, so ties go to the first name.
/// `Unknown` with area 0 when no province has positive area.
fn top_region(regions: &RegionSeries, year: i32) -> (String, f64) {
    let mut top: Option<(&str, f64)> = None;
    for (name, series) in &regions.series {
        let area = area_in(series, year);
        if area > top.map_or(0.0, |(_, a)| a) {
            top = Some((name.as_str(), area));
        }
    }
    top.map(|(n, a)| (n.to_string(), a))
        .unwrap_or_else(|| (UNKNOWN_REGION.to_string(), 0.0))
}

/// Summaries for the fixed decade windows, chronological.
///
/// `profiles` must already be ranked. The leading region is the overall
/// 2022 leader for both decades.
pub fn decadal_summaries(
    regions: &RegionSeries,
    profiles: &[RegionProfile],
) -> Vec<DecadalSummary> {
    DECADE_WINDOWS
        .iter()
        .map(|w| decadal_summary(regions, profiles, w))
        .collect()
}

fn decadal_summary(
    regions: &RegionSeries,
    profiles: &[RegionProfile],
    window: &DecadeWindow,
) -> DecadalSummary {
    let total_growth = pct_change(
        regions.national_total(window.start),
        regions.national_total(window.end),
    );
    DecadalSummary {
        decade: window.label.to_string(),
        total_growth,
        average_annual: total_growth / (window.end - window.start) as f64,
        leading_region: leading_region(profiles),
        emerging_regions: emerging_regions(profiles),
        key_events: key_events(window.label),
    }
}

pub fn leading_region(profiles: &[RegionProfile]) -> String {
    profiles
        .iter()
        .find(|p| p.rank_2022 == 1)
        .map(|p| p.region.clone())
        .unwrap_or_else(|| UNKNOWN_REGION.to_string())
}

/// Fast growers that still hold a small share, in rank order.
pub fn emerging_regions(profiles: &[RegionProfile]) -> Vec<String> {
    profiles
        .iter()
        .filter(|p| {
            p.growth_rate_20y > EMERGING_GROWTH_PCT && p.market_share_2022 < EMERGING_SHARE_PCT
        })
        .map(|p| p.region.clone())
        .collect()
}

pub fn key_events(decade: &str) -> Vec<String> {
    match DECADE_EVENTS.get(decade) {
        Some(events) => events.iter().map(|e| e.to_string()).collect(),
        None => vec![DEFAULT_EVENT.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{build_profile, build_profiles};
    use crate::types::YearlySeries;
    use approx::assert_relative_eq;

    fn regions(entries: &[(&str, &[(i32, f64)])]) -> RegionSeries {
        RegionSeries {
            series: entries
                .iter()
                .map(|(n, pts)| (n.to_string(), pts.iter().copied().collect::<YearlySeries>()))
                .collect(),
        }
    }

    #[test]
    fn one_point_per_year_with_first_year_flat() {
        let agg = regions(&[("RIAU", &[(2003, 100.0), (2004, 150.0), (2022, 300.0)])]);
        let trends = national_trends(&agg);
        assert_eq!(trends.len(), 20);
        assert_eq!(trends.first().map(|t| t.year), Some(2003));
        assert_eq!(trends.last().map(|t| t.year), Some(2022));
        assert_eq!(trends[0].growth_rate, 0.0);
        assert_eq!(trends[0].annual_change, 0.0);
        assert_relative_eq!(trends[1].growth_rate, 50.0);
        assert_eq!(trends[1].annual_change, 50.0);
        // 2005 drops to zero, 2006 follows a zero total
        assert_relative_eq!(trends[2].growth_rate, -100.0);
        assert_eq!(trends[3].growth_rate, 0.0);
        assert_eq!(trends[3].annual_change, 0.0);
    }

    #[test]
    fn top_region_per_year_with_name_tiebreak() {
        let agg = regions(&[
            ("SUMUT", &[(2003, 50.0), (2004, 80.0)]),
            ("ACEH", &[(2003, 50.0), (2004, 10.0)]),
        ]);
        let trends = national_trends(&agg);
        assert_eq!(trends[0].top_region, "ACEH");
        assert_eq!(trends[0].top_region_area, 50.0);
        assert_eq!(trends[1].top_region, "SUMUT");
        assert_eq!(trends[2].top_region, UNKNOWN_REGION);
        assert_eq!(trends[2].top_region_area, 0.0);
    }

    #[test]
    fn national_total_matches_region_sum() {
        let agg = regions(&[
            ("A", &[(2010, 1.5), (2022, 2.0)]),
            ("B", &[(2010, 3.0), (2022, 0.0)]),
        ]);
        let trends = national_trends(&agg);
        let y2010 = trends.iter().find(|t| t.year == 2010).unwrap();
        assert_eq!(y2010.total_area, 4.5);
    }

    #[test]
    fn each_decade_uses_its_own_endpoints() {
        let agg = regions(&[(
            "RIAU",
            &[(2003, 1_000_000.0), (2012, 2_000_000.0), (2013, 4_000_000.0), (2022, 5_000_000.0)],
        )]);
        let profiles = build_profiles(&agg);
        let decades = decadal_summaries(&agg, &profiles);
        assert_eq!(decades.len(), 2);
        assert_eq!(decades[0].decade, "2003-2012");
        assert_relative_eq!(decades[0].total_growth, 100.0);
        assert_relative_eq!(decades[0].average_annual, 100.0 / 9.0);
        assert_eq!(decades[1].decade, "2013-2022");
        assert_relative_eq!(decades[1].total_growth, 25.0);
        assert_relative_eq!(decades[1].average_annual, 25.0 / 9.0);
    }

    #[test]
    fn decade_without_start_total_has_zero_growth() {
        let agg = regions(&[("RIAU", &[(2012, 10.0), (2013, 10.0), (2022, 20.0)])]);
        let decades = decadal_summaries(&agg, &build_profiles(&agg));
        assert_eq!(decades[0].total_growth, 0.0);
        assert_eq!(decades[0].average_annual, 0.0);
        assert_relative_eq!(decades[1].total_growth, 100.0);
    }

    #[test]
    fn leader_and_emerging_are_shared_across_decades() {
        let agg = regions(&[
            ("RIAU", &[(2003, 1_000.0), (2022, 10_000.0)]),
            ("PAPUA", &[(2003, 10.0), (2022, 100.0)]),
            ("JAMBI", &[(2003, 1_000.0), (2022, 2_000.0)]),
        ]);
        let profiles = build_profiles(&agg);
        let decades = decadal_summaries(&agg, &profiles);
        for d in &decades {
            assert_eq!(d.leading_region, "RIAU");
            assert_eq!(d.emerging_regions, vec!["PAPUA".to_string()]);
        }
        assert_eq!(decades[0].key_events.len(), 3);
        assert_eq!(decades[1].key_events.len(), 4);
    }

    #[test]
    fn emerging_bounds_are_exclusive() {
        let cases = [
            (300.0, 1.0, false),
            (300.1, 1.0, true),
            (400.0, 5.0, false),
            (400.0, 4.99, true),
            (300.0, 5.0, false),
        ];
        for (growth, share, expected) in cases {
            let mut p = build_profile("X", &YearlySeries::new(), 0.0);
            p.growth_rate_20y = growth;
            p.market_share_2022 = share;
            assert_eq!(
                !emerging_regions(&[p]).is_empty(),
                expected,
                "growth {growth} share {share}"
            );
        }
    }

    #[test]
    fn empty_profiles_lead_with_unknown() {
        assert_eq!(leading_region(&[]), UNKNOWN_REGION);
    }

    #[test]
    fn unknown_decade_gets_default_event() {
        assert_eq!(key_events("1990-1999"), vec![DEFAULT_EVENT.to_string()]);
    }
}
