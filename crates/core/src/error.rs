use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("missing required column {column:?} in {origin}")]
    MissingColumn { column: String, origin: String },
    #[error("column length mismatch: table has {rows} rows, column has {values}")]
    ColumnLength { rows: usize, values: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EvalError>;
