use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("model document error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed line {line}: expected at least {expected} fields, found {found}")]
    MalformedLine {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("unknown label {label:?} on line {line}")]
    UnknownLabel { line: u64, label: String },

    #[error("no training examples found")]
    EmptyTrainingSet,

    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
