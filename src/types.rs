use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tabled::Tabled;

/// Year -> summed planted area (ha) for one province.
///
/// Ordered so every consumer walks years ascending.
pub type YearlySeries = BTreeMap<i32, f64>;

/// One district row that survived validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub year: i32,
    pub region: String,
    pub region_id: String,
    pub parent_region: String,
    pub parent_region_id: String,
    pub planted_area: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendClass {
    ExplosiveGrowth,
    HighGrowth,
    ModerateGrowth,
    StableGrowth,
    Declining,
    Volatile,
    Mature,
    InsufficientData,
    IncompleteData,
}

impl TrendClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendClass::ExplosiveGrowth => "EXPLOSIVE_GROWTH",
            TrendClass::HighGrowth => "HIGH_GROWTH",
            TrendClass::ModerateGrowth => "MODERATE_GROWTH",
            TrendClass::StableGrowth => "STABLE_GROWTH",
            TrendClass::Declining => "DECLINING",
            TrendClass::Volatile => "VOLATILE",
            TrendClass::Mature => "MATURE",
            TrendClass::InsufficientData => "INSUFFICIENT_DATA",
            TrendClass::IncompleteData => "INCOMPLETE_DATA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentTier {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl InvestmentTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentTier::VeryHigh => "VERY_HIGH",
            InvestmentTier::High => "HIGH",
            InvestmentTier::Medium => "MEDIUM",
            InvestmentTier::Low => "LOW",
            InvestmentTier::VeryLow => "VERY_LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    High,
    MediumHigh,
    Medium,
    LowMedium,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::High => "HIGH",
            RiskTier::MediumHigh => "MEDIUM_HIGH",
            RiskTier::Medium => "MEDIUM",
            RiskTier::LowMedium => "LOW_MEDIUM",
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(TrendClass, InvestmentTier, RiskTier);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPhase {
    pub period: String,
    pub growth_rate: f64,
    pub description: String,
}

/// Complete analytical profile of one province.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionProfile {
    pub region: String,
    pub area_2003: f64,
    pub area_2022: f64,
    pub growth_rate_20y: f64,
    pub annual_growth_rate: f64,
    pub market_share_2022: f64,
    /// 1-based; zero until ranking has run.
    pub rank_2022: usize,
    pub trend_class: TrendClass,
    pub production_efficiency: f64,
    pub competitiveness: f64,
    pub investment_tier: InvestmentTier,
    pub risk_tier: RiskTier,
    pub recommendations: Vec<String>,
    pub projection_2030: f64,
    pub peak_year: i32,
    pub peak_area: f64,
    pub stability_index: f64,
    pub growth_phases: Vec<GrowthPhase>,
    pub dominant_period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NationalTrendPoint {
    pub year: i32,
    pub total_area: f64,
    pub growth_rate: f64,
    pub top_region: String,
    pub top_region_area: f64,
    pub annual_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadalSummary {
    pub decade: String,
    pub total_growth: f64,
    pub average_annual: f64,
    pub leading_region: String,
    pub emerging_regions: Vec<String>,
    pub key_events: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Segment {
    Prime,
    Growth,
    Emerging,
    Stable,
    Mature,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentGroup {
    pub segment: Segment,
    pub regions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryStats {
    pub total_regions: usize,
    pub high_growth_regions: usize,
    pub prime_regions: usize,
    pub national_area_2003: f64,
    pub national_area_2022: f64,
    pub national_growth_20y: f64,
    pub average_positive_growth: f64,
    pub min_growth_20y: f64,
    pub max_growth_20y: f64,
    pub max_market_share: f64,
    pub leading_region: String,
    pub generated_on: chrono::NaiveDate,
    pub segments: Vec<SegmentGroup>,
}

// Flat, pre-formatted rows for CSV export and console previews.

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ProfileRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Province")]
    #[tabled(rename = "Province")]
    pub region: String,
    #[serde(rename = "Area2022")]
    #[tabled(rename = "Area2022")]
    pub area_2022: String,
    #[serde(rename = "Area2003")]
    #[tabled(rename = "Area2003")]
    pub area_2003: String,
    #[serde(rename = "Growth20y")]
    #[tabled(rename = "Growth20y")]
    pub growth_20y: String,
    #[serde(rename = "Share2022")]
    #[tabled(rename = "Share2022")]
    pub share_2022: String,
    #[serde(rename = "Trend")]
    #[tabled(rename = "Trend")]
    pub trend: String,
    #[serde(rename = "Efficiency")]
    #[tabled(rename = "Efficiency")]
    pub efficiency: String,
    #[serde(rename = "Competitiveness")]
    #[tabled(rename = "Competitiveness")]
    pub competitiveness: String,
    #[serde(rename = "Investment")]
    #[tabled(rename = "Investment")]
    pub investment: String,
    #[serde(rename = "Risk")]
    #[tabled(rename = "Risk")]
    pub risk: String,
    #[serde(rename = "Projection2030")]
    #[tabled(rename = "Projection2030")]
    pub projection_2030: String,
    #[serde(rename = "PeakYear")]
    #[tabled(rename = "PeakYear")]
    pub peak_year: i32,
    #[serde(rename = "Stability")]
    #[tabled(rename = "Stability")]
    pub stability: String,
    #[serde(rename = "DominantPeriod")]
    #[tabled(rename = "DominantPeriod")]
    pub dominant_period: String,
    #[serde(rename = "Recommendation")]
    #[tabled(rename = "Recommendation")]
    pub recommendation: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct TrendRow {
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: i32,
    #[serde(rename = "TotalArea")]
    #[tabled(rename = "TotalArea")]
    pub total_area: String,
    #[serde(rename = "Growth")]
    #[tabled(rename = "Growth")]
    pub growth: String,
    #[serde(rename = "TopProvince")]
    #[tabled(rename = "TopProvince")]
    pub top_region: String,
    #[serde(rename = "TopProvinceArea")]
    #[tabled(rename = "TopProvinceArea")]
    pub top_region_area: String,
    #[serde(rename = "AnnualChange")]
    #[tabled(rename = "AnnualChange")]
    pub annual_change: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct DecadeRow {
    #[serde(rename = "Decade")]
    #[tabled(rename = "Decade")]
    pub decade: String,
    #[serde(rename = "TotalGrowth")]
    #[tabled(rename = "TotalGrowth")]
    pub total_growth: String,
    #[serde(rename = "AverageAnnual")]
    #[tabled(rename = "AverageAnnual")]
    pub average_annual: String,
    #[serde(rename = "LeadingProvince")]
    #[tabled(rename = "LeadingProvince")]
    pub leading_region: String,
    #[serde(rename = "EmergingRegions")]
    #[tabled(rename = "EmergingRegions")]
    pub emerging_regions: String,
    #[serde(rename = "KeyEvents")]
    #[tabled(rename = "KeyEvents")]
    pub key_events: String,
}
