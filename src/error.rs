use thiserror::Error;

/// Errors that can occur while evaluating or optimising a reactor scenario.
#[derive(Error, Debug)]
pub enum CstrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Numeric domain error: {0}")]
    NumericDomain(String),
}

impl From<rust_xlsxwriter::XlsxError> for CstrError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        CstrError::Excel(e.to_string())
    }
}
