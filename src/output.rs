use crate::error::Result;
use crate::types::{
    DecadalSummary, DecadeRow, NationalTrendPoint, ProfileRow, RegionProfile, SummaryStats,
    TrendRow,
};
use crate::util::{format_number, format_pct};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

pub const PROFILES_FILE: &str = "region_profiles.csv";
pub const TRENDS_FILE: &str = "national_trends.csv";
pub const DECADES_FILE: &str = "decadal_summary.csv";
pub const SUMMARY_FILE: &str = "summary.json";

pub fn profile_rows(profiles: &[RegionProfile]) -> Vec<ProfileRow> {
    profiles
        .iter()
        .map(|p| ProfileRow {
            rank: p.rank_2022,
            region: p.region.clone(),
            area_2022: format_number(p.area_2022, 0),
            area_2003: format_number(p.area_2003, 0),
            growth_20y: format_pct(p.growth_rate_20y),
            share_2022: format_pct(p.market_share_2022),
            trend: p.trend_class.to_string(),
            efficiency: format!("{:.1}/10", p.production_efficiency),
            competitiveness: format!("{:.1}/10", p.competitiveness),
            investment: p.investment_tier.to_string(),
            risk: p.risk_tier.to_string(),
            projection_2030: format_number(p.projection_2030, 0),
            peak_year: p.peak_year,
            stability: format!("{:.2}", p.stability_index),
            dominant_period: p.dominant_period.clone(),
            // Only the headline recommendation fits a table cell.
            recommendation: p.recommendations.first().cloned().unwrap_or_default(),
        })
        .collect()
}

pub fn trend_rows(trends: &[NationalTrendPoint]) -> Vec<TrendRow> {
    trends
        .iter()
        .map(|t| TrendRow {
            year: t.year,
            total_area: format_number(t.total_area, 0),
            growth: format_pct(t.growth_rate),
            top_region: t.top_region.clone(),
            top_region_area: format_number(t.top_region_area, 0),
            annual_change: format_number(t.annual_change, 0),
        })
        .collect()
}

pub fn decade_rows(decades: &[DecadalSummary]) -> Vec<DecadeRow> {
    decades
        .iter()
        .map(|d| DecadeRow {
            decade: d.decade.clone(),
            total_growth: format_pct(d.total_growth),
            average_annual: format_pct(d.average_annual),
            leading_region: d.leading_region.clone(),
            emerging_regions: d.emerging_regions.join(", "),
            key_events: d.key_events.join("; "),
        })
        .collect()
}

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    // Header row comes from the serde renames on the row type.
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Write the three tables and the JSON summary into `dir`.
pub fn export_all(
    dir: &Path,
    profiles: &[RegionProfile],
    trends: &[NationalTrendPoint],
    decades: &[DecadalSummary],
    summary: &SummaryStats,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    // Order matters: indices below line up with this list.
    let written = vec![
        dir.join(PROFILES_FILE),
        dir.join(TRENDS_FILE),
        dir.join(DECADES_FILE),
        dir.join(SUMMARY_FILE),
    ];
    write_csv(&written[0], &profile_rows(profiles))?;
    write_csv(&written[1], &trend_rows(trends))?;
    write_csv(&written[2], &decade_rows(decades))?;
    write_json(&written[3], summary)?;
    for path in &written {
        info!(path = %path.display(), "written");
    }
    Ok(written)
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    // Show just the first `max_rows`; the export has the full table.
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
