// Fixed scoring and classification thresholds.
//
// Every boundary used by the growth engine, the profile builder and the
// trend analyzer is declared here so tests can walk each one explicitly.

pub const FIRST_YEAR: i32 = 2003;
pub const LAST_YEAR: i32 = 2022;

/// Divisor that turns the 2003-2022 growth into an annual rate.
pub const ANNUALIZATION_YEARS: f64 = 20.0;

// Trend classification
pub const MIN_YEARS_FOR_TREND: usize = 4;
pub const EXPLOSIVE_GROWTH_PCT: f64 = 500.0;
pub const HIGH_GROWTH_PCT: f64 = 200.0;
pub const MODERATE_GROWTH_PCT: f64 = 100.0;
pub const STABLE_GROWTH_PCT: f64 = 50.0;
pub const VOLATILITY_LIMIT: f64 = 30.0;

// Phase descriptions
pub const PHASE_EXPLOSIVE_PCT: f64 = 100.0;
pub const PHASE_HIGH_PCT: f64 = 50.0;
pub const PHASE_MODERATE_PCT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseWindow {
    pub label: &'static str,
    pub start: i32,
    pub end: i32,
    pub tag: &'static str,
}

pub const PHASE_WINDOWS: [PhaseWindow; 4] = [
    PhaseWindow {
        label: "2003-2007",
        start: 2003,
        end: 2007,
        tag: "Early",
    },
    PhaseWindow {
        label: "2008-2012",
        start: 2008,
        end: 2012,
        tag: "Mid",
    },
    PhaseWindow {
        label: "2013-2017",
        start: 2013,
        end: 2017,
        tag: "Recent",
    },
    PhaseWindow {
        label: "2018-2022",
        start: 2018,
        end: 2022,
        tag: "Current",
    },
];

pub const UNKNOWN_PERIOD: &str = "UNKNOWN";

// Stability index
pub const STABILITY_CEILING: f64 = 10.0;
pub const STABILITY_FLOOR: f64 = 1.0;
pub const STABILITY_STD_DIVISOR: f64 = 10.0;
pub const STABILITY_MAX_PENALTY: f64 = 5.0;
pub const STABILITY_DEFAULT: f64 = 5.0;

// Production efficiency
pub const EFFICIENCY_BASE: f64 = 5.0;
pub const EFFICIENCY_MAX: f64 = 10.0;
pub const LARGE_AREA_HA: f64 = 1_000_000.0;
pub const MEDIUM_AREA_HA: f64 = 500_000.0;
pub const LARGE_AREA_BONUS: f64 = 2.0;
pub const MEDIUM_AREA_BONUS: f64 = 1.0;
pub const HIGH_GROWTH_BONUS: f64 = 1.5;
pub const MODERATE_GROWTH_BONUS: f64 = 1.0;
pub const STABILITY_PIVOT: f64 = 5.0;

// Competitiveness
pub const COMPETITIVENESS_BASE: f64 = 5.0;
pub const COMPETITIVENESS_MAX: f64 = 10.0;
pub const SHARE_DIVISOR: f64 = 10.0;
pub const GROWTH_DIVISOR: f64 = 100.0;

// Investment tiers (inclusive lower bounds on competitiveness)
pub const TIER_VERY_HIGH: f64 = 8.0;
pub const TIER_HIGH: f64 = 6.5;
pub const TIER_MEDIUM: f64 = 5.0;
pub const TIER_LOW: f64 = 3.0;

// Risk tiers
pub const RISK_GROWTH_PCT: f64 = 500.0;
pub const RISK_STABILITY: f64 = 4.0;
pub const RISK_SMALL_SHARE_PCT: f64 = 1.0;
pub const RISK_SLOW_GROWTH_PCT: f64 = 50.0;

// Recommendations
pub const LEADER_SHARE_PCT: f64 = 15.0;
pub const EXPANSION_GROWTH_PCT: f64 = 200.0;
pub const DIVERSIFY_GROWTH_PCT: f64 = 50.0;
pub const DIVERSIFY_AREA_HA: f64 = 500_000.0;
pub const RISK_MGMT_STABILITY: f64 = 5.0;

pub const LEADERSHIP_RECS: [&str; 2] = [
    "Maintain market leadership through innovation",
    "Focus on sustainable intensification",
];
pub const EXPANSION_RECS: [&str; 2] = [
    "Ensure sustainable expansion practices",
    "Invest in supply chain optimization",
];
pub const DIVERSIFY_RECS: [&str; 2] = [
    "Diversify revenue streams",
    "Explore value-added products",
];
pub const RISK_RECS: [&str; 2] = [
    "Improve operational consistency",
    "Risk management implementation",
];
pub const DEFAULT_REC: &str = "Continuous improvement with sustainability focus";

// 2030 projection
pub const PROJECTION_YEARS: i32 = 8;
pub const PROJECTION_FLOOR_PCT: f64 = 3.0;
pub const PROJECTION_CAP_TRIGGER_PCT: f64 = 10.0;
pub const PROJECTION_CAP_PCT: f64 = 8.0;

// Decades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecadeWindow {
    pub label: &'static str,
    pub start: i32,
    pub end: i32,
}

pub const DECADE_WINDOWS: [DecadeWindow; 2] = [
    DecadeWindow {
        label: "2003-2012",
        start: 2003,
        end: 2012,
    },
    DecadeWindow {
        label: "2013-2022",
        start: 2013,
        end: 2022,
    },
];

pub const EMERGING_GROWTH_PCT: f64 = 300.0;
pub const EMERGING_SHARE_PCT: f64 = 5.0;
pub const UNKNOWN_REGION: &str = "Unknown";
pub const DEFAULT_EVENT: &str = "Normal industry development";

// Segments
pub const PRIME_AREA_HA: f64 = 1_000_000.0;
pub const PRIME_GROWTH_PCT: f64 = 100.0;
pub const GROWTH_SEGMENT_PCT: f64 = 200.0;
pub const EMERGING_AREA_HA: f64 = 500_000.0;
pub const EMERGING_SEGMENT_PCT: f64 = 300.0;
pub const ESTABLISHED_AREA_HA: f64 = 500_000.0;
pub const STABLE_MIN_PCT: f64 = 50.0;
pub const STABLE_MAX_PCT: f64 = 150.0;
pub const MATURE_MAX_PCT: f64 = 50.0;
pub const HIGH_GROWTH_SUMMARY_PCT: f64 = 100.0;
