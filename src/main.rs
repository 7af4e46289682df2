// Entry point and high-level batch flow.
//
// One run: load and validate the district CSV, fold it into province
// series, build ranked profiles plus national and decadal trends, then
// preview the tables on the console and export them.
mod aggregate;
mod config;
mod error;
mod growth;
mod loader;
mod output;
mod policy;
mod profile;
mod segments;
mod trends;
mod types;
mod util;

use aggregate::RegionSeries;
use clap::Parser;
use config::{Args, ColumnLayout};
use error::Result;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use types::{DecadalSummary, NationalTrendPoint, RawObservation, RegionProfile, SummaryStats};

/// The finalized collections handed to presentation.
#[derive(Debug, Clone)]
struct Analysis {
    profiles: Vec<RegionProfile>,
    trends: Vec<NationalTrendPoint>,
    decades: Vec<DecadalSummary>,
    summary: SummaryStats,
}

/// Run every derived stage over validated observations.
fn analyze(data: &[RawObservation], generated_on: chrono::NaiveDate) -> Analysis {
    let regions = RegionSeries::from_observations(data);
    if regions.is_empty() {
        warn!("no observation carries a province name");
    }
    debug!(regions = regions.len(), "province series ready");
    let profiles = profile::build_profiles(&regions);
    let national = trends::national_trends(&regions);
    let decades = trends::decadal_summaries(&regions, &profiles);
    let summary = segments::generate_summary(&profiles, &national, generated_on);
    Analysis {
        profiles,
        trends: national,
        decades,
        summary,
    }
}

/// Load the CSV and print a short textual summary of what happened.
fn handle_load(args: &Args) -> Result<Vec<RawObservation>> {
    let (data, report) = loader::load_observations(&args.input, &ColumnLayout::default())?;
    println!(
        "Processing dataset... ({} rows read, {} kept for 2003–2022)",
        util::format_int(report.total_rows),
        util::format_int(report.kept_rows)
    );
    if report.dropped_rows > 0 {
        println!(
            "Note: {} rows dropped (missing or out-of-range year).",
            util::format_int(report.dropped_rows)
        );
    }
    if report.defaulted_areas > 0 {
        println!(
            "Info: {} planted-area values defaulted to 0.",
            util::format_int(report.defaulted_areas)
        );
    }
    println!();
    Ok(data)
}

fn handle_reports(args: &Args, analysis: &Analysis) -> Result<()> {
    println!("Province Profiles 2003–2022");
    println!("(Ranked by 2022 planted area)\n");
    output::preview_table_rows(&output::profile_rows(&analysis.profiles), args.preview_rows);

    println!("National Trend");
    println!("(One row per year)\n");
    output::preview_table_rows(&output::trend_rows(&analysis.trends), args.preview_rows);

    println!("Decadal Comparison\n");
    output::preview_table_rows(&output::decade_rows(&analysis.decades), args.preview_rows);

    let s = &analysis.summary;
    println!(
        "Summary: {} provinces, {} with >=100% growth, national growth {}, leader {}\n",
        util::format_int(s.total_regions),
        util::format_int(s.high_growth_regions),
        util::format_pct(s.national_growth_20y),
        s.leading_region
    );

    if args.no_export {
        return Ok(());
    }
    let written = output::export_all(
        &args.output_dir,
        &analysis.profiles,
        &analysis.trends,
        &analysis.decades,
        &analysis.summary,
    )?;
    println!(
        "(Full tables exported to {} files in {})",
        written.len(),
        args.output_dir.display()
    );
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let data = handle_load(args)?;
    let analysis = analyze(&data, chrono::Local::now().date_naive());
    info!(
        regions = analysis.profiles.len(),
        leader = %analysis.summary.leading_region,
        "analysis complete"
    );
    handle_reports(args, &analysis)
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
