// Growth statistics over a single yearly series.
use crate::aggregate::area_in;
use crate::policy::{
    FIRST_YEAR, PHASE_EXPLOSIVE_PCT, PHASE_HIGH_PCT, PHASE_MODERATE_PCT, PHASE_WINDOWS,
    STABILITY_CEILING, STABILITY_DEFAULT, STABILITY_FLOOR, STABILITY_MAX_PENALTY,
    STABILITY_STD_DIVISOR, UNKNOWN_PERIOD,
};
use crate::types::{GrowthPhase, YearlySeries};
use crate::util::std_dev;

/// Growth between each pair of adjacent known years, ascending.
///
/// Pairs whose earlier area is 0 are skipped, not zero-filled.
pub fn yearly_growth_rates(series: &YearlySeries) -> Vec<f64> {
    let points: Vec<(i32, f64)> = series.iter().map(|(y, a)| (*y, *a)).collect();
    points
        .windows(2)
        .filter(|w| w[0].1 > 0.0)
        .map(|w| (w[1].1 - w[0].1) / w[0].1 * 100.0)
        .collect()
}

pub fn volatility(growth_rates: &[f64]) -> f64 {
    std_dev(growth_rates)
}

/// Growth across one window; 0 unless both endpoints have area.
pub fn phase_growth(series: &YearlySeries, start: i32, end: i32) -> f64 {
    let start_area = area_in(series, start);
    let end_area = area_in(series, end);
    if start_area > 0.0 && end_area > 0.0 {
        (end_area - start_area) / start_area * 100.0
    } else {
        0.0
    }
}

pub fn phase_description(growth_rate: f64, tag: &str) -> String {
    let label = if growth_rate > PHASE_EXPLOSIVE_PCT {
        "explosive growth"
    } else if growth_rate > PHASE_HIGH_PCT {
        "high growth"
    } else if growth_rate > PHASE_MODERATE_PCT {
        "moderate growth"
    } else if growth_rate > 0.0 {
        "slow growth"
    } else {
        "decline"
    };
    format!("{tag} {label}")
}

/// The four fixed five-year phases, in chronological order.
pub fn growth_phases(series: &YearlySeries) -> Vec<GrowthPhase> {
    PHASE_WINDOWS
        .iter()
        .map(|w| {
            let growth_rate = phase_growth(series, w.start, w.end);
            GrowthPhase {
                period: w.label.to_string(),
                growth_rate,
                description: phase_description(growth_rate, w.tag),
            }
        })
        .collect()
}

/// Period of the phase with the strictly largest growth; the earliest
/// phase wins a tie.
pub fn dominant_period(phases: &[GrowthPhase]) -> String {
    let mut best: Option<&GrowthPhase> = None;
    for phase in phases {
        match best {
            Some(b) if phase.growth_rate <= b.growth_rate => {}
            _ => best = Some(phase),
        }
    }
    best.map(|p| p.period.clone())
        .unwrap_or_else(|| UNKNOWN_PERIOD.to_string())
}

/// `10 - min(sd/10, 5)` clamped to [1, 10]; 5 when no growth rate exists.
pub fn stability_index(series: &YearlySeries) -> f64 {
    let rates = yearly_growth_rates(series);
    if rates.is_empty() {
        return STABILITY_DEFAULT;
    }
    let penalty = (std_dev(&rates) / STABILITY_STD_DIVISOR).min(STABILITY_MAX_PENALTY);
    (STABILITY_CEILING - penalty).clamp(STABILITY_FLOOR, STABILITY_CEILING)
}

/// Year with the largest area, seeded with 2003.
///
/// Years are walked ascending and only a strictly larger area replaces the
/// current peak, so ties resolve to the earliest year.
pub fn peak_year_and_area(series: &YearlySeries) -> (i32, f64) {
    let mut peak = (FIRST_YEAR, area_in(series, FIRST_YEAR));
    for (&year, &area) in series {
        if area > peak.1 {
            peak = (year, area);
        }
    }
    peak
}
