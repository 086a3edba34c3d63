use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Unknown currency '{0}'. Supported currencies: {1}")]
    UnknownCurrency(String, String),

    #[error("Please enter a valid amount: '{0}' is not a positive number")]
    InvalidAmount(String),

    #[error("Amount {0} {1} is too large to convert")]
    ConversionOverflow(String, String),

    #[error("No exchange rate configured for {0}")]
    MissingRate(String),

    #[error("Exchange rate for {0} must be greater than zero")]
    ZeroRate(String),
}
