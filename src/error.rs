
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EchoGradeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog Error: {0}")]
    Catalog(String),

    #[error("Input Error: {0}")]
    Input(String),

    #[error("Unknown substat '{0}': no range entry in the catalog")]
    UnknownStat(String),

    #[error("No substats to grade: the substat list is empty")]
    EmptySubstats,
}

pub type EgResult<T> = Result<T, EchoGradeError>;
