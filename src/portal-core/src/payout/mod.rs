//! Tax withheld on winnings before they are released to a player.
use crate::error::payout::PayoutError;
use serde::Serialize;

pub const DEFAULT_TAX_PERCENT: u8 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaxPolicy {
    percent: u8,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        TaxPolicy {
            percent: DEFAULT_TAX_PERCENT,
        }
    }
}

impl TaxPolicy {
    pub fn new(percent: u8) -> Result<Self, PayoutError> {
        if percent > 100 {
            return Err(PayoutError::InvalidTaxPercent(percent));
        }
        Ok(TaxPolicy { percent })
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Splits a gross payout in whole KES. Tax is rounded down.
    pub fn quote(&self, gross: u64) -> PayoutQuote {
        let tax = (u128::from(gross) * u128::from(self.percent) / 100) as u64;
        PayoutQuote {
            gross,
            tax,
            net: gross - tax,
            tax_percent: self.percent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PayoutQuote {
    pub gross: u64,
    pub tax: u64,
    pub net: u64,
    pub tax_percent: u8,
}
