use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    /// Failures reported by the marketplace gateway (HTTP layer, bad
    /// responses, non-2xx statuses carrying a message).
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Business-logic storage errors (not found, invalid state, etc.)
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Program not found: {0}")]
    ProgramNotFound(i64),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Raw database errors from rusqlite
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Date parse errors from chrono
    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),
}

pub type MarketResult<T> = Result<T, MarketError>;
