//! Player statements: money movements and betting results.
//!
//! The backend keeps no such history yet; [`sample_transactions`] and
//! [`sample_bets`] provide the statement shown to players in the meantime.
use crate::currency::{Currency, ExchangeRates};
use crate::error::currency::CurrencyError;
use crate::format::format_amount;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TransactionKind {
    Deposit,
    WinningsRelease,
    Withdrawal,
}

impl TransactionKind {
    /// Deposits and releases add to the balance, withdrawals take from it.
    pub fn is_credit(self) -> bool {
        !matches!(self, TransactionKind::Withdrawal)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::WinningsRelease => "Winnings Release",
            TransactionKind::Withdrawal => "Withdrawal",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub original_amount: u64,
    pub original_currency: Currency,
    pub kes_amount: u64,
    pub status: String,
    pub payment_method: String,
    pub timestamp: String,
}

impl Transaction {
    /// `+KSh 15,035` for credits, `-KSh 2,000` for debits.
    pub fn signed_kes(&self) -> String {
        let sign = if self.kind.is_credit() { '+' } else { '-' };
        format!("{sign}KSh {}", format_amount(self.kes_amount))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BetOutcome {
    Won,
    Lost,
}

impl fmt::Display for BetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BetOutcome::Won => "Won",
            BetOutcome::Lost => "Lost",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bet {
    pub id: String,
    pub game: String,
    pub stake: u64,
    pub outcome: BetOutcome,
    pub payout: u64,
    pub timestamp: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BettingSummary {
    pub total_bets: usize,
    pub total_staked: u64,
    pub total_won: u64,
    pub net_profit: i64,
}

impl BettingSummary {
    pub fn from_bets(bets: &[Bet]) -> Self {
        let total_staked: u64 = bets.iter().map(|b| b.stake).sum();
        let total_won: u64 = bets.iter().map(|b| b.payout).sum();
        BettingSummary {
            total_bets: bets.len(),
            total_staked,
            total_won,
            net_profit: total_won as i64 - total_staked as i64,
        }
    }
}

const PAYBILL_METHOD: &str = "M-PESA Paybill 400004";

/// Fails when a sample amount cannot be converted with `rates`.
pub fn sample_transactions(rates: &ExchangeRates) -> Result<Vec<Transaction>, CurrencyError> {
    let tx = |id: &str,
              kind: TransactionKind,
              amount: u64,
              currency: Currency,
              method: &str,
              timestamp: &str|
     -> Result<Transaction, CurrencyError> {
        Ok(Transaction {
            id: id.to_string(),
            kind,
            original_amount: amount,
            original_currency: currency,
            kes_amount: rates.to_kes(amount.into(), currency)?,
            status: "Completed".to_string(),
            payment_method: method.to_string(),
            timestamp: timestamp.to_string(),
        })
    };
    [
        tx("1", TransactionKind::Deposit, 5000, Currency::Kes, PAYBILL_METHOD, "2026-02-18 10:00"),
        tx("2", TransactionKind::WinningsRelease, 15000, Currency::Kes, "Admin Release", "2026-02-18 09:30"),
        tx("3", TransactionKind::Deposit, 100, Currency::Usd, PAYBILL_METHOD, "2026-02-17 18:45"),
        tx("4", TransactionKind::Withdrawal, 2000, Currency::Kes, "M-PESA", "2026-02-17 15:30"),
        tx("5", TransactionKind::Deposit, 50, Currency::Eur, PAYBILL_METHOD, "2026-02-16 14:20"),
        tx("6", TransactionKind::Deposit, 10000, Currency::Kes, PAYBILL_METHOD, "2026-02-14 11:45"),
    ]
    .into_iter()
    .collect()
}

pub fn sample_bets() -> Vec<Bet> {
    let bet = |id: &str, game: &str, stake: u64, outcome: BetOutcome, payout: u64, ts: &str| Bet {
        id: id.to_string(),
        game: game.to_string(),
        stake,
        outcome,
        payout,
        timestamp: ts.to_string(),
    };
    vec![
        bet("1", "Blackjack", 500, BetOutcome::Won, 1000, "2026-02-18 14:30"),
        bet("2", "Roulette", 200, BetOutcome::Lost, 0, "2026-02-18 13:15"),
        bet("3", "Slots", 100, BetOutcome::Won, 350, "2026-02-18 12:00"),
        bet("4", "Poker", 1000, BetOutcome::Won, 2500, "2026-02-17 18:45"),
        bet("5", "Blackjack", 300, BetOutcome::Lost, 0, "2026-02-17 16:20"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_transactions_use_current_rates() {
        let txs = sample_transactions(&ExchangeRates::default()).unwrap();
        assert_eq!(txs.len(), 6);
        assert_eq!(txs[2].kes_amount, 15035);
        assert_eq!(txs[4].kes_amount, 8687);
        assert_eq!(txs[0].kes_amount, 5000);
    }

    #[test]
    fn missing_rate_fails_the_statement() {
        let rates = ExchangeRates::only(&[(Currency::Kes, 100), (Currency::Usd, 15035)]);
        assert_eq!(
            sample_transactions(&rates),
            Err(CurrencyError::MissingRate("EUR".to_string()))
        );
    }

    #[test]
    fn signs_credits_and_debits() {
        let txs = sample_transactions(&ExchangeRates::default()).unwrap();
        assert_eq!(txs[1].signed_kes(), "+KSh 15,000");
        assert_eq!(txs[3].signed_kes(), "-KSh 2,000");
        assert_eq!(txs[1].kind.to_string(), "Winnings Release");
    }

    #[test]
    fn summarizes_bets() {
        let summary = BettingSummary::from_bets(&sample_bets());
        assert_eq!(summary.total_bets, 5);
        assert_eq!(summary.total_staked, 2100);
        assert_eq!(summary.total_won, 3850);
        assert_eq!(summary.net_profit, 1750);
    }

    #[test]
    fn net_profit_can_be_negative() {
        let bets: Vec<_> = sample_bets()
            .into_iter()
            .filter(|b| b.outcome == BetOutcome::Lost)
            .collect();
        let summary = BettingSummary::from_bets(&bets);
        assert_eq!(summary.net_profit, -500);
        assert_eq!(BettingSummary::from_bets(&[]), BettingSummary::default());
    }
}
