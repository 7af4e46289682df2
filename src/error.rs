use thiserror::Error;

/// Fatal conditions that stop a run before any output is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no usable observations in {path} ({total_rows} rows read)")]
    NoObservations { path: String, total_rows: usize },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
