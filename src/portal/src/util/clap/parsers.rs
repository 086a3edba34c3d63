use portal_core::currency::{parse_amount, strip_thousands_separators};
use rust_decimal::Decimal;

/// Accepts `1,500.50`-style amounts; must be greater than zero.
pub fn amount_parser(input: &str) -> Result<Decimal, String> {
    parse_amount(input).map_err(|err| err.to_string())
}

/// Whole KES amounts, thousands separators allowed.
pub fn kes_parser(input: &str) -> Result<u64, String> {
    strip_thousands_separators(input)
        .and_then(|digits| digits.parse::<u64>().ok())
        .ok_or_else(|| "Must specify a non-negative whole number of KES.".to_string())
}

pub fn positive_kes_parser(input: &str) -> Result<u64, String> {
    match kes_parser(input)? {
        0 => Err("Amount must be greater than zero.".to_string()),
        amount => Ok(amount),
    }
}

pub fn transaction_id_parser(input: &str) -> Result<u64, String> {
    input
        .trim()
        .trim_start_matches('#')
        .parse::<u64>()
        .map_err(|_| "A transaction id is a non-negative whole number.".to_string())
}
