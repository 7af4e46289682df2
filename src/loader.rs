use crate::config::ColumnLayout;
use crate::error::{PipelineError, Result};
use crate::policy::{FIRST_YEAR, LAST_YEAR};
use crate::types::RawObservation;
use crate::util::{parse_f64_safe, parse_i32_safe};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub dropped_rows: usize,
    pub defaulted_areas: usize,
}

pub fn load_observations(
    path: &Path,
    layout: &ColumnLayout,
) -> Result<(Vec<RawObservation>, LoadReport)> {
    let file = std::fs::File::open(path)?;
    let (data, report) = read_observations(file, layout)?;
    if data.is_empty() {
        return Err(PipelineError::NoObservations {
            path: path.display().to_string(),
            total_rows: report.total_rows,
        });
    }
    info!(
        path = %path.display(),
        total = report.total_rows,
        kept = report.kept_rows,
        dropped = report.dropped_rows,
        "observations loaded"
    );
    Ok((data, report))
}

/// Parse every record from `source`, applying the row policy.
///
/// A broken CSV stream is returned as an error, and so is a record whose
/// field count differs from the header's. Bad values inside a well-formed
/// record never are.
pub fn read_observations<R: Read>(
    source: R,
    layout: &ColumnLayout,
) -> Result<(Vec<RawObservation>, LoadReport)> {
    let mut rdr = ReaderBuilder::new().from_reader(source);
    let mut report = LoadReport::default();
    let mut data = Vec::new();

    for result in rdr.records() {
        let record = result?;
        report.total_rows += 1;

        let year = match parse_i32_safe(record.get(layout.year)) {
            Some(y) if (FIRST_YEAR..=LAST_YEAR).contains(&y) => y,
            _ => {
                report.dropped_rows += 1;
                continue;
            }
        };

        let obs = RawObservation {
            year,
            region: field(&record, layout.region),
            region_id: field(&record, layout.region_id),
            parent_region: field(&record, layout.parent_region),
            parent_region_id: field(&record, layout.parent_region_id),
            planted_area: 0.0,
        };
        let planted_area = match parse_f64_safe(record.get(layout.planted_area)) {
            Some(v) if v >= 0.0 => v,
            _ => {
                report.defaulted_areas += 1;
                debug!(
                    year,
                    district = %obs.region,
                    district_id = %obs.region_id,
                    province_id = %obs.parent_region_id,
                    "planted area defaulted to 0"
                );
                0.0
            }
        };

        data.push(RawObservation { planted_area, ..obs });
    }

    report.kept_rows = data.len();
    debug!(
        defaulted = report.defaulted_areas,
        dropped = report.dropped_rows,
        "row policy applied"
    );
    Ok((data, report))
}

fn field(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or_default().trim().to_string()
}
