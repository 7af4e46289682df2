// Region profile construction and scoring.
use crate::aggregate::{area_in, RegionSeries};
use crate::growth::{
    dominant_period, growth_phases, peak_year_and_area, stability_index, volatility,
    yearly_growth_rates,
};
use crate::policy::*;
use crate::types::{InvestmentTier, RegionProfile, RiskTier, TrendClass, YearlySeries};
use crate::util::pct_change;
use std::cmp::Ordering;
use tracing::info;

/// Build, rank and return every province profile.
///
/// The national 2022 total is computed once before any profile is built.
/// Result is sorted by `rank_2022` ascending.
pub fn build_profiles(regions: &RegionSeries) -> Vec<RegionProfile> {
    let national_2022 = regions.national_total_2022();
    let mut profiles: Vec<RegionProfile> = regions
        .series
        .iter()
        .map(|(name, series)| build_profile(name, series, national_2022))
        .collect();
    assign_ranks(&mut profiles);
    info!(regions = profiles.len(), national_2022, "region profiles built");
    profiles
}

/// Sort by 2022 area descending, then by name, and number from 1.
pub fn assign_ranks(profiles: &mut [RegionProfile]) {
    profiles.sort_by(|a, b| {
        b.area_2022
            .partial_cmp(&a.area_2022)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.region.cmp(&b.region))
    });
    for (idx, p) in profiles.iter_mut().enumerate() {
        p.rank_2022 = idx + 1;
    }
}

pub fn build_profile(name: &str, series: &YearlySeries, national_2022: f64) -> RegionProfile {
    let area_2003 = area_in(series, FIRST_YEAR);
    let area_2022 = area_in(series, LAST_YEAR);
    let growth_rate_20y = pct_change(area_2003, area_2022);
    let annual_growth_rate = growth_rate_20y / ANNUALIZATION_YEARS;
    let market_share_2022 = if national_2022 > 0.0 {
        area_2022 / national_2022 * 100.0
    } else {
        0.0
    };

    let phases = growth_phases(series);
    let dominant = dominant_period(&phases);
    let (peak_year, peak_area) = peak_year_and_area(series);
    let stability = stability_index(series);
    let efficiency = production_efficiency(area_2022, growth_rate_20y, stability);
    let competitiveness =
        competitiveness_score(market_share_2022, growth_rate_20y, efficiency, stability);

    RegionProfile {
        region: name.to_string(),
        area_2003,
        area_2022,
        growth_rate_20y,
        annual_growth_rate,
        market_share_2022,
        rank_2022: 0,
        trend_class: classify_trend(series),
        production_efficiency: efficiency,
        competitiveness,
        investment_tier: investment_tier(competitiveness),
        risk_tier: risk_tier(growth_rate_20y, stability, market_share_2022),
        recommendations: recommendations(market_share_2022, growth_rate_20y, area_2022, stability),
        projection_2030: projection_2030(area_2022, annual_growth_rate),
        peak_year,
        peak_area,
        stability_index: stability,
        growth_phases: phases,
        dominant_period: dominant,
    }
}

pub fn classify_trend(series: &YearlySeries) -> TrendClass {
    if series.len() < MIN_YEARS_FOR_TREND {
        return TrendClass::InsufficientData;
    }
    let start = area_in(series, FIRST_YEAR);
    let end = area_in(series, LAST_YEAR);
    if start == 0.0 || end == 0.0 {
        return TrendClass::IncompleteData;
    }
    let total_growth = (end - start) / start * 100.0;
    trend_from(total_growth, volatility(&yearly_growth_rates(series)))
}

/// Growth bands are exclusive lower bounds; volatility only splits the
/// 0..=50% band.
pub fn trend_from(total_growth: f64, volatility: f64) -> TrendClass {
    if total_growth > EXPLOSIVE_GROWTH_PCT {
        TrendClass::ExplosiveGrowth
    } else if total_growth > HIGH_GROWTH_PCT {
        TrendClass::HighGrowth
    } else if total_growth > MODERATE_GROWTH_PCT {
        TrendClass::ModerateGrowth
    } else if total_growth > STABLE_GROWTH_PCT {
        TrendClass::StableGrowth
    } else if total_growth < 0.0 {
        TrendClass::Declining
    } else if volatility > VOLATILITY_LIMIT {
        TrendClass::Volatile
    } else {
        TrendClass::Mature
    }
}

/// Capped at 10 from above only.
pub fn production_efficiency(area_2022: f64, growth_rate_20y: f64, stability: f64) -> f64 {
    let mut score = EFFICIENCY_BASE;
    if area_2022 > LARGE_AREA_HA {
        score += LARGE_AREA_BONUS;
    } else if area_2022 > MEDIUM_AREA_HA {
        score += MEDIUM_AREA_BONUS;
    }
    if growth_rate_20y > HIGH_GROWTH_PCT {
        score += HIGH_GROWTH_BONUS;
    } else if growth_rate_20y > MODERATE_GROWTH_PCT {
        score += MODERATE_GROWTH_BONUS;
    }
    score += (stability - STABILITY_PIVOT) / 2.0;
    score.min(EFFICIENCY_MAX)
}

pub fn competitiveness_score(
    market_share_2022: f64,
    growth_rate_20y: f64,
    efficiency: f64,
    stability: f64,
) -> f64 {
    let score = COMPETITIVENESS_BASE
        + market_share_2022 / SHARE_DIVISOR
        + growth_rate_20y / GROWTH_DIVISOR
        + efficiency / 2.0
        + stability / 2.0;
    score.min(COMPETITIVENESS_MAX)
}

pub fn investment_tier(competitiveness: f64) -> InvestmentTier {
    if competitiveness >= TIER_VERY_HIGH {
        InvestmentTier::VeryHigh
    } else if competitiveness >= TIER_HIGH {
        InvestmentTier::High
    } else if competitiveness >= TIER_MEDIUM {
        InvestmentTier::Medium
    } else if competitiveness >= TIER_LOW {
        InvestmentTier::Low
    } else {
        InvestmentTier::VeryLow
    }
}

pub fn risk_tier(growth_rate_20y: f64, stability: f64, market_share_2022: f64) -> RiskTier {
    if growth_rate_20y > RISK_GROWTH_PCT || stability < RISK_STABILITY {
        RiskTier::High
    } else if growth_rate_20y < 0.0 {
        RiskTier::MediumHigh
    } else if market_share_2022 < RISK_SMALL_SHARE_PCT && growth_rate_20y < RISK_SLOW_GROWTH_PCT {
        RiskTier::Medium
    } else {
        RiskTier::LowMedium
    }
}

/// Ordered advice; element 0 is the headline recommendation.
pub fn recommendations(
    market_share_2022: f64,
    growth_rate_20y: f64,
    area_2022: f64,
    stability: f64,
) -> Vec<String> {
    let mut recs: Vec<&str> = Vec::new();
    if market_share_2022 > LEADER_SHARE_PCT {
        recs.extend(LEADERSHIP_RECS);
    }
    if growth_rate_20y > EXPANSION_GROWTH_PCT {
        recs.extend(EXPANSION_RECS);
    } else if growth_rate_20y < DIVERSIFY_GROWTH_PCT && area_2022 > DIVERSIFY_AREA_HA {
        recs.extend(DIVERSIFY_RECS);
    }
    if stability < RISK_MGMT_STABILITY {
        recs.extend(RISK_RECS);
    }
    if recs.is_empty() {
        recs.push(DEFAULT_REC);
    }
    recs.into_iter().map(str::to_string).collect()
}

/// Compound the 2022 area forward with the annual rate clamped to [3, 8]
/// in the degenerate cases.
pub fn projection_2030(area_2022: f64, annual_growth_rate: f64) -> f64 {
    area_2022 * (1.0 + effective_growth(annual_growth_rate) / 100.0).powi(PROJECTION_YEARS)
}

pub fn effective_growth(annual_growth_rate: f64) -> f64 {
    if annual_growth_rate <= 0.0 {
        PROJECTION_FLOOR_PCT
    } else if annual_growth_rate > PROJECTION_CAP_TRIGGER_PCT {
        PROJECTION_CAP_PCT
    } else {
        annual_growth_rate
    }
}
