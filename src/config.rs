// Command-line configuration.
//
// Scoring thresholds are not configurable; they live in `policy`.
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "spatial-metrics-indonesia-palm-oil-oil_palm_ha_kabupaten.csv";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "palm_profile",
    about = "Build per-province planted-area profiles from 2003-2022 district records"
)]
pub struct Args {
    /// District-level planted-area CSV.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory that receives the exported CSV and JSON files.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Rows shown in each console preview table.
    #[arg(short, long, default_value_t = 5)]
    pub preview_rows: usize,

    /// Only print previews, do not write files.
    #[arg(long)]
    pub no_export: bool,
}

/// Zero-based positions of the fields we read from each CSV record.
#[derive(Debug, Clone, Copy)]
pub struct ColumnLayout {
    pub year: usize,
    pub region: usize,
    pub region_id: usize,
    pub parent_region: usize,
    pub parent_region_id: usize,
    pub planted_area: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            year: 0,
            region: 3,
            region_id: 4,
            parent_region: 5,
            parent_region_id: 6,
            planted_area: 7,
        }
    }
}
