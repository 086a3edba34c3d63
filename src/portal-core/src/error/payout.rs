use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayoutError {
    #[error("Tax percentage must be between 0 and 100, got {0}")]
    InvalidTaxPercent(u8),
}
