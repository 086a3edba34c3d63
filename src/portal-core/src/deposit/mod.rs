//! Deposit previews and the manual M-PESA payment instructions.
use crate::currency::{whole_units, Currency, ExchangeRates};
use crate::error::currency::CurrencyError;
use crate::format::{format_decimal, format_kes};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MPESA_PAYBILL: &str = "400004";
pub const ACCOUNT_NUMBER: &str = "0116828013";
pub const MPESA_USSD: &str = "*334#";

/// Where players send M-PESA payments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub paybill: String,
    pub account_number: String,
}

impl Default for PaymentDetails {
    fn default() -> Self {
        PaymentDetails {
            paybill: MPESA_PAYBILL.to_string(),
            account_number: ACCOUNT_NUMBER.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DepositQuote {
    pub amount: Decimal,
    pub currency: Currency,
    /// What the backend is asked to record: the amount without its fraction.
    pub submitted_amount: u64,
    pub kes_amount: u64,
    /// KES per single unit of `currency`.
    pub rate: Decimal,
}

impl DepositQuote {
    pub fn new(
        rates: &ExchangeRates,
        amount: Decimal,
        currency: Currency,
    ) -> Result<Self, CurrencyError> {
        if amount <= Decimal::ZERO {
            return Err(CurrencyError::InvalidAmount(amount.to_string()));
        }
        Ok(DepositQuote {
            amount,
            currency,
            submitted_amount: whole_units(amount, currency)?,
            kes_amount: rates.to_kes(amount, currency)?,
            rate: rates.display_rate(currency)?,
        })
    }

    pub fn is_foreign(&self) -> bool {
        self.currency != Currency::Kes
    }

    /// "Your deposit of $100 USD will be converted to KSh 15,035 at the rate of 150.35"
    pub fn conversion_summary(&self) -> String {
        format!(
            "Your deposit of {}{} {} will be converted to {} at the rate of {}",
            self.currency.symbol(),
            format_decimal(self.amount),
            self.currency,
            format_kes(self.kes_amount),
            self.rate
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaymentStep {
    pub title: String,
    pub detail: String,
}

/// The Lipa na M-PESA walkthrough shown after a deposit is initiated.
#[derive(Clone, Debug, Serialize)]
pub struct DepositInstructions {
    pub payment: PaymentDetails,
    pub kes_amount: u64,
}

impl DepositInstructions {
    pub fn new(payment: PaymentDetails, kes_amount: u64) -> Self {
        DepositInstructions {
            payment,
            kes_amount,
        }
    }

    pub fn steps(&self) -> Vec<PaymentStep> {
        let step = |title: &str, detail: String| PaymentStep {
            title: title.to_string(),
            detail,
        };
        vec![
            step(
                "Go to M-PESA Menu",
                format!("On your phone, dial {MPESA_USSD} or open M-PESA app"),
            ),
            step("Select Lipa na M-PESA", "Choose \"Pay Bill\" option".to_string()),
            step("Enter Business Number", self.payment.paybill.clone()),
            step("Enter Account Number", self.payment.account_number.clone()),
            step("Enter Amount", format!("Enter {}", format_kes(self.kes_amount))),
            step(
                "Enter M-PESA PIN",
                "Confirm the transaction with your PIN".to_string(),
            ),
        ]
    }
}

impl fmt::Display for DepositInstructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "M-PESA Payment Instructions")?;
        writeln!(f, "  PayBill: {}", self.payment.paybill)?;
        writeln!(f, "  Account: {}", self.payment.account_number)?;
        for (i, step) in self.steps().iter().enumerate() {
            writeln!(f, "  {}. {}: {}", i + 1, step.title, step.detail)?;
        }
        write!(
            f,
            "You will receive an M-PESA confirmation message. Your account will be credited within 5 minutes."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_foreign_deposit() {
        let rates = ExchangeRates::default();
        let quote = DepositQuote::new(&rates, Decimal::from(100), Currency::Usd).unwrap();
        assert_eq!(quote.kes_amount, 15035);
        assert_eq!(quote.submitted_amount, 100);
        assert_eq!(quote.rate.to_string(), "150.35");
        assert!(quote.is_foreign());
        assert_eq!(
            quote.conversion_summary(),
            "Your deposit of $100 USD will be converted to KSh 15,035 at the rate of 150.35"
        );
    }

    #[test]
    fn fractional_amounts_convert_before_truncation() {
        let rates = ExchangeRates::default();
        let quote = DepositQuote::new(&rates, Decimal::new(105, 1), Currency::Gbp).unwrap();
        assert_eq!(quote.submitted_amount, 10);
        assert_eq!(quote.kes_amount, 2079);
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let rates = ExchangeRates::default();
        assert!(DepositQuote::new(&rates, Decimal::ZERO, Currency::Kes).is_err());
        assert!(DepositQuote::new(&rates, Decimal::from(-3), Currency::Kes).is_err());
    }

    #[test]
    fn kes_deposit_is_not_foreign() {
        let rates = ExchangeRates::default();
        let quote = DepositQuote::new(&rates, Decimal::from(5000), Currency::Kes).unwrap();
        assert!(!quote.is_foreign());
        assert_eq!(quote.kes_amount, 5000);
    }

    #[test]
    fn instructions_list_six_steps() {
        let instructions = DepositInstructions::new(PaymentDetails::default(), 15035);
        let steps = instructions.steps();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[2].detail, MPESA_PAYBILL);
        assert_eq!(steps[3].detail, ACCOUNT_NUMBER);
        assert_eq!(steps[4].detail, "Enter KSh 15,035");

        let text = instructions.to_string();
        assert!(text.contains("PayBill: 400004"));
        assert!(text.contains("6. Enter M-PESA PIN"));
    }
}
