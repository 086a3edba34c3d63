use super::{Currency, RATE_SCALE};
use crate::error::currency::CurrencyError;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// KES-per-100-units rates for every deposit currency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeRates {
    rates: BTreeMap<Currency, u64>,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        ExchangeRates {
            rates: Currency::ALL
                .into_iter()
                .map(|c| (c, c.default_rate()))
                .collect(),
        }
    }
}

impl ExchangeRates {
    /// Starts from the published rates and replaces the given entries.
    pub fn with_overrides(overrides: &BTreeMap<Currency, u64>) -> Result<Self, CurrencyError> {
        let mut rates = Self::default();
        for (currency, rate) in overrides {
            if *rate == 0 {
                return Err(CurrencyError::ZeroRate(currency.to_string()));
            }
            rates.rates.insert(*currency, *rate);
        }
        Ok(rates)
    }

    pub fn rate(&self, currency: Currency) -> Result<u64, CurrencyError> {
        self.rates
            .get(&currency)
            .copied()
            .ok_or_else(|| CurrencyError::MissingRate(currency.to_string()))
    }

    /// KES credited for `amount` units of `currency`, rounded down.
    pub fn to_kes(&self, amount: Decimal, currency: Currency) -> Result<u64, CurrencyError> {
        let rate = self.rate(currency)?;
        let overflow = || CurrencyError::ConversionOverflow(amount.to_string(), currency.to_string());
        let kes = amount
            .checked_mul(Decimal::from(rate))
            .and_then(|v| v.checked_div(Decimal::from(RATE_SCALE)))
            .ok_or_else(overflow)?;
        u64::try_from(kes.floor()).map_err(|_| overflow())
    }

    /// KES per single unit, with two decimals (e.g. `150.35` for USD).
    pub fn display_rate(&self, currency: Currency) -> Result<Decimal, CurrencyError> {
        Ok(Decimal::from_i128_with_scale(
            i128::from(self.rate(currency)?),
            2,
        ))
    }
}

#[cfg(test)]
impl ExchangeRates {
    /// Rates covering only the listed currencies.
    pub(crate) fn only(rates: &[(Currency, u64)]) -> Self {
        ExchangeRates {
            rates: rates.iter().copied().collect(),
        }
    }
}
