use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("malformed finding on line {line}: {source}")]
    ParseLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
