use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown slot code: {0}")]
    UnknownCode(String),
    #[error("Insufficient balance: requested {requested} cents, only {available} inserted")]
    InsufficientBalance { requested: u64, available: u64 },
    #[error("Balance overflow: cannot add {inserted} cents to {balance}")]
    BalanceOverflow { inserted: u64, balance: u64 },
    #[error("Catalog is full, no slot codes left")]
    CatalogFull,
}

pub type Result<T> = std::result::Result<T, VendingError>;
