//! Currencies accepted for deposits and their conversion into KES.
//!
//! Rates are fixed-point: the number of KES credited for 100 units of the
//! foreign currency. Conversions always round down to whole shillings.
use crate::error::currency::CurrencyError;
use candid::CandidType;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

mod rates;

pub use rates::ExchangeRates;

/// Rates are quoted per this many units of the foreign currency.
pub const RATE_SCALE: u64 = 100;

#[derive(
    CandidType, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Currency {
    #[serde(rename = "KES")]
    Kes,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "UGX")]
    Ugx,
    #[serde(rename = "TZS")]
    Tzs,
    #[serde(rename = "MWK")]
    Mwk,
    #[serde(rename = "ZAR")]
    Zar,
    #[serde(rename = "ZMW")]
    Zmw,
}

impl Currency {
    pub const ALL: [Currency; 9] = [
        Currency::Kes,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Ugx,
        Currency::Tzs,
        Currency::Mwk,
        Currency::Zar,
        Currency::Zmw,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Kes => "KES",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Ugx => "UGX",
            Currency::Tzs => "TZS",
            Currency::Mwk => "MWK",
            Currency::Zar => "ZAR",
            Currency::Zmw => "ZMW",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Currency::Kes => "Kenyan Shilling",
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Ugx => "Ugandan Shilling",
            Currency::Tzs => "Tanzanian Shilling",
            Currency::Mwk => "Malawian Kwacha",
            Currency::Zar => "South African Rand",
            Currency::Zmw => "Zambian Kwacha",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Kes => "KSh",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Ugx => "USh",
            Currency::Tzs => "TSh",
            Currency::Mwk => "MK",
            Currency::Zar => "R",
            Currency::Zmw => "ZK",
        }
    }

    /// KES per 100 units, as published for the portal.
    pub fn default_rate(self) -> u64 {
        match self {
            Currency::Kes => 100,
            Currency::Usd => 15035,
            Currency::Eur => 17375,
            Currency::Gbp => 19800,
            Currency::Ugx => 4,
            Currency::Tzs => 5,
            Currency::Mwk => 13,
            Currency::Zar => 793,
            Currency::Zmw => 5885,
        }
    }

    fn supported_codes() -> String {
        Currency::ALL
            .iter()
            .map(|c| c.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string(), Currency::supported_codes()))
    }
}

lazy_static! {
    static ref GROUPED_NUMBER: Regex = Regex::new(r"^[0-9]{1,3}(,[0-9]{3})+(\.[0-9]+)?$").unwrap();
}

/// Drops thousands separators from `1,500.50`-style input. A comma anywhere
/// else (`1,5`, `15,00`) makes the input malformed and yields `None`.
pub fn strip_thousands_separators(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if !trimmed.contains(',') {
        return Some(trimmed.to_string());
    }
    GROUPED_NUMBER
        .is_match(trimmed)
        .then(|| trimmed.replace(',', ""))
}

/// Parses a user-entered deposit amount. Only strictly positive numbers are accepted.
pub fn parse_amount(input: &str) -> Result<Decimal, CurrencyError> {
    let invalid = || CurrencyError::InvalidAmount(input.to_string());
    let ungrouped = strip_thousands_separators(input).ok_or_else(invalid)?;
    match Decimal::from_str(&ungrouped) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(invalid()),
    }
}

/// The whole-unit amount submitted to the backend (fractions are dropped).
pub fn whole_units(amount: Decimal, currency: Currency) -> Result<u64, CurrencyError> {
    u64::try_from(amount.floor())
        .map_err(|_| CurrencyError::ConversionOverflow(amount.to_string(), currency.to_string()))
}

/// Serializes a rate table keyed by currency code.
pub fn rate_table(rates: &ExchangeRates) -> BTreeMap<&'static str, u64> {
    Currency::ALL
        .iter()
        .filter_map(|c| rates.rate(*c).ok().map(|r| (c.code(), r)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::Usd));
        assert_eq!(" KES ".parse::<Currency>(), Ok(Currency::Kes));
        assert!(matches!(
            "XYZ".parse::<Currency>(),
            Err(CurrencyError::UnknownCurrency(code, _)) if code == "XYZ"
        ));
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Zmw).unwrap(), "\"ZMW\"");
        let parsed: Currency = serde_json::from_str("\"GBP\"").unwrap();
        assert_eq!(parsed, Currency::Gbp);
    }

    #[test]
    fn every_currency_has_metadata() {
        for currency in Currency::ALL {
            assert_eq!(currency.code().len(), 3);
            assert!(!currency.name().is_empty());
            assert!(!currency.symbol().is_empty());
            assert!(currency.default_rate() > 0);
        }
        assert_eq!(Currency::Ugx.symbol(), "USh");
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(parse_amount("100").unwrap(), Decimal::from(100));
        assert_eq!(parse_amount(" 12.5 ").unwrap(), Decimal::new(125, 1));
        assert_eq!(parse_amount("1,000").unwrap(), Decimal::from(1000));
        assert_eq!(parse_amount("12,345,678.9").unwrap(), Decimal::new(123456789, 1));
        for bad in ["", "0", "-5", "abc", "0.0", "1,5", "15,00", ",100", "1,000,00", "1.000,50"] {
            assert_eq!(
                parse_amount(bad),
                Err(CurrencyError::InvalidAmount(bad.to_string()))
            );
        }
    }

    #[test]
    fn thousands_separators_must_be_well_formed() {
        assert_eq!(strip_thousands_separators(" 1,500 ").as_deref(), Some("1500"));
        assert_eq!(strip_thousands_separators("250").as_deref(), Some("250"));
        assert_eq!(strip_thousands_separators("1,5"), None);
        assert_eq!(strip_thousands_separators("1500,000"), None);
    }

    #[test]
    fn whole_units_floor() {
        assert_eq!(whole_units(Decimal::new(999, 1), Currency::Usd).unwrap(), 99);
        assert_eq!(whole_units(Decimal::from(5), Currency::Kes).unwrap(), 5);
    }
}
