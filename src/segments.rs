// Performance segments and the executive summary built on ranked profiles.
use crate::policy::*;
use crate::trends::leading_region;
use crate::types::{NationalTrendPoint, RegionProfile, Segment, SegmentGroup, SummaryStats};
use crate::util::{average, pct_change};

pub const SEGMENT_ORDER: [Segment; 5] = [
    Segment::Prime,
    Segment::Growth,
    Segment::Emerging,
    Segment::Stable,
    Segment::Mature,
];

pub fn in_segment(p: &RegionProfile, segment: Segment) -> bool {
    let (area, growth) = (p.area_2022, p.growth_rate_20y);
    match segment {
        Segment::Prime => area > PRIME_AREA_HA && growth > PRIME_GROWTH_PCT,
        Segment::Growth => growth > GROWTH_SEGMENT_PCT,
        Segment::Emerging => area < EMERGING_AREA_HA && growth > EMERGING_SEGMENT_PCT,
        Segment::Stable => {
            area > ESTABLISHED_AREA_HA && (STABLE_MIN_PCT..=STABLE_MAX_PCT).contains(&growth)
        }
        Segment::Mature => area > ESTABLISHED_AREA_HA && growth < MATURE_MAX_PCT,
    }
}

/// Every segment in fixed order, members in profile (rank) order.
/// Segments overlap; empty segments are kept.
pub fn segment_groups(profiles: &[RegionProfile]) -> Vec<SegmentGroup> {
    SEGMENT_ORDER
        .iter()
        .map(|&segment| SegmentGroup {
            segment,
            regions: profiles
                .iter()
                .filter(|p| in_segment(p, segment))
                .map(|p| p.region.clone())
                .collect(),
        })
        .collect()
}

pub fn generate_summary(
    profiles: &[RegionProfile],
    trends: &[NationalTrendPoint],
    generated_on: chrono::NaiveDate,
) -> SummaryStats {
    let segments = segment_groups(profiles);
    let prime_regions = segments
        .iter()
        .find(|g| g.segment == Segment::Prime)
        .map_or(0, |g| g.regions.len());
    let national_area_2003 = trends.first().map_or(0.0, |t| t.total_area);
    let national_area_2022 = trends.last().map_or(0.0, |t| t.total_area);
    let growths: Vec<f64> = profiles.iter().map(|p| p.growth_rate_20y).collect();
    let positive: Vec<f64> = profiles
        .iter()
        .map(|p| p.growth_rate_20y)
        .filter(|g| *g > 0.0)
        .collect();

    SummaryStats {
        total_regions: profiles.len(),
        high_growth_regions: profiles
            .iter()
            .filter(|p| p.growth_rate_20y >= HIGH_GROWTH_SUMMARY_PCT)
            .count(),
        prime_regions,
        national_area_2003,
        national_area_2022,
        national_growth_20y: pct_change(national_area_2003, national_area_2022),
        average_positive_growth: average(&positive),
        min_growth_20y: fold_or_zero(&growths, f64::min),
        max_growth_20y: fold_or_zero(&growths, f64::max),
        max_market_share: fold_or_zero(
            &profiles.iter().map(|p| p.market_share_2022).collect::<Vec<_>>(),
            f64::max,
        ),
        leading_region: leading_region(profiles),
        generated_on,
        segments,
    }
}

/// Min or max over `values`; 0 for an empty slice.
fn fold_or_zero(values: &[f64], pick: fn(f64, f64) -> f64) -> f64 {
    values.iter().copied().reduce(pick).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::RegionSeries;
    use crate::profile::{build_profile, build_profiles};
    use crate::types::YearlySeries;
    use crate::trends::national_trends;
    use chrono::NaiveDate;

    fn regions(entries: &[(&str, f64, f64)]) -> RegionSeries {
        RegionSeries {
            series: entries
                .iter()
                .map(|(n, a03, a22)| {
                    let series: YearlySeries = [(2003, *a03), (2022, *a22)].into_iter().collect();
                    (n.to_string(), series)
                })
                .collect(),
        }
    }

    fn members(groups: &[SegmentGroup], segment: Segment) -> Vec<&str> {
        groups
            .iter()
            .find(|g| g.segment == segment)
            .map(|g| g.regions.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn segments_overlap_and_respect_bounds() {
        let agg = regions(&[
            ("RIAU", 500_000.0, 2_500_000.0),  // +400%: prime, growth
            ("PAPUA", 10_000.0, 100_000.0),    // +900%: growth, emerging
            ("JAMBI", 400_000.0, 1_000_000.0), // +150%: stable
            ("LAMPUNG", 500_000.0, 600_000.0), // +20%: mature
            ("BALI", 100.0, 100.0),            // nothing
        ]);
        let profiles = build_profiles(&agg);
        let groups = segment_groups(&profiles);
        assert_eq!(groups.len(), 5);
        assert_eq!(members(&groups, Segment::Prime), vec!["RIAU"]);
        assert_eq!(members(&groups, Segment::Growth), vec!["RIAU", "PAPUA"]);
        assert_eq!(members(&groups, Segment::Emerging), vec!["PAPUA"]);
        assert_eq!(members(&groups, Segment::Stable), vec!["JAMBI"]);
        assert_eq!(members(&groups, Segment::Mature), vec!["LAMPUNG"]);
    }

    fn profile_with(area_2022: f64, growth: f64) -> RegionProfile {
        let mut p = build_profile("X", &YearlySeries::new(), 0.0);
        p.area_2022 = area_2022;
        p.growth_rate_20y = growth;
        p
    }

    #[test]
    fn stable_and_mature_bounds() {
        let big = 600_000.0;
        let cases = [
            (big, 50.0, Segment::Stable, true),
            (big, 49.9, Segment::Stable, false),
            (big, 150.0, Segment::Stable, true),
            (big, 150.1, Segment::Stable, false),
            (500_000.0, 100.0, Segment::Stable, false),
            (big, 49.9, Segment::Mature, true),
            (big, 50.0, Segment::Mature, false),
            (big, -20.0, Segment::Mature, true),
            (500_000.0, 10.0, Segment::Mature, false),
        ];
        for (area, growth, segment, expected) in cases {
            assert_eq!(
                in_segment(&profile_with(area, growth), segment),
                expected,
                "{segment:?} area {area} growth {growth}"
            );
        }
    }

    #[test]
    fn prime_growth_and_emerging_bounds_are_exclusive() {
        let cases = [
            (1_000_000.0, 150.0, Segment::Prime, false),
            (1_000_001.0, 100.0, Segment::Prime, false),
            (1_000_001.0, 100.1, Segment::Prime, true),
            (0.0, 200.0, Segment::Growth, false),
            (0.0, 200.1, Segment::Growth, true),
            (499_999.0, 300.0, Segment::Emerging, false),
            (499_999.0, 300.1, Segment::Emerging, true),
            (500_000.0, 400.0, Segment::Emerging, false),
        ];
        for (area, growth, segment, expected) in cases {
            assert_eq!(
                in_segment(&profile_with(area, growth), segment),
                expected,
                "{segment:?} area {area} growth {growth}"
            );
        }
    }

    #[test]
    fn summary_counts_and_averages() {
        let agg = regions(&[
            ("RIAU", 500_000.0, 2_500_000.0),
            ("JAMBI", 400_000.0, 1_000_000.0),
            ("ACEH", 300_000.0, 150_000.0),
        ]);
        let profiles = build_profiles(&agg);
        let trends = national_trends(&agg);
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let summary = generate_summary(&profiles, &trends, day);

        assert_eq!(summary.total_regions, 3);
        assert_eq!(summary.high_growth_regions, 2);
        assert_eq!(summary.prime_regions, 1);
        assert_eq!(summary.national_area_2003, 1_200_000.0);
        assert_eq!(summary.national_area_2022, 3_650_000.0);
        assert!((summary.national_growth_20y - 2_450_000.0 / 1_200_000.0 * 100.0).abs() < 1e-9);
        assert!((summary.average_positive_growth - 275.0).abs() < 1e-9);
        assert!((summary.min_growth_20y + 50.0).abs() < 1e-9);
        assert!((summary.max_growth_20y - 400.0).abs() < 1e-9);
        assert!((summary.max_market_share - 2_500_000.0 / 3_650_000.0 * 100.0).abs() < 1e-9);
        assert_eq!(summary.leading_region, "RIAU");
        assert_eq!(summary.generated_on, day);
    }

    #[test]
    fn summary_of_nothing_is_zeroed() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let summary = generate_summary(&[], &[], day);
        assert_eq!(summary.total_regions, 0);
        assert_eq!(summary.average_positive_growth, 0.0);
        assert_eq!(summary.min_growth_20y, 0.0);
        assert_eq!(summary.max_growth_20y, 0.0);
        assert_eq!(summary.max_market_share, 0.0);
        assert_eq!(summary.national_growth_20y, 0.0);
        assert_eq!(summary.leading_region, UNKNOWN_REGION);
    }
}
