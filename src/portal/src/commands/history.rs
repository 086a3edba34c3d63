use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use anyhow::Context;
use clap::Parser;
use portal_core::format::{format_amount, format_kes, format_signed};
use portal_core::history::{sample_bets, sample_transactions, Bet, BettingSummary, Transaction};

/// Player statements.
#[derive(Parser)]
pub struct HistoryOpts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    /// Deposits, winnings releases and withdrawals.
    Transactions(ListOpts),

    /// Betting history with totals.
    Bets(ListOpts),
}

#[derive(Parser)]
struct ListOpts {
    /// Print as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(env: &dyn Environment, opts: HistoryOpts) -> PortalResult {
    match opts.subcmd {
        SubCommand::Transactions(v) => {
            let transactions = sample_transactions(&env.get_exchange_rates()?)
                .context("Failed to convert the transaction amounts to KES.")?;
            if v.json {
                println!("{}", serde_json::to_string_pretty(&transactions)?);
            } else {
                print!("{}", render_transactions(&transactions));
            }
        }
        SubCommand::Bets(v) => {
            let bets = sample_bets();
            let summary = BettingSummary::from_bets(&bets);
            if v.json {
                let out = serde_json::json!({ "bets": bets, "summary": summary });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render_bets(&bets, &summary));
            }
        }
    }
    Ok(())
}

fn render_transactions(transactions: &[Transaction]) -> String {
    let mut out = String::new();
    for tx in transactions {
        out.push_str(&format!(
            "{:<17} {:>13}  {} {} {:<9} {:<22} {}\n",
            tx.kind.to_string(),
            tx.signed_kes(),
            format_amount(tx.original_amount),
            tx.original_currency,
            tx.status,
            tx.payment_method,
            tx.timestamp,
        ));
    }
    out
}

fn render_bets(bets: &[Bet], summary: &BettingSummary) -> String {
    let mut out = String::new();
    for bet in bets {
        out.push_str(&format!(
            "{:<10} stake {:>10}  {:<4} payout {:>10}  {}\n",
            bet.game,
            format_kes(bet.stake),
            bet.outcome.to_string(),
            format_kes(bet.payout),
            bet.timestamp,
        ));
    }
    out.push_str(&format!(
        "\nTotal bets:   {}\nTotal staked: {}\nTotal won:    {}\nNet profit:   KSh {}\n",
        summary.total_bets,
        format_kes(summary.total_staked),
        format_kes(summary.total_won),
        format_signed(summary.net_profit),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::currency::ExchangeRates;

    #[test]
    fn transactions_show_signed_kes() {
        let text = render_transactions(&sample_transactions(&ExchangeRates::default()).unwrap());
        assert!(text.contains("+KSh 15,035"));
        assert!(text.contains("-KSh 2,000"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn bets_end_with_summary() {
        let bets = sample_bets();
        let text = render_bets(&bets, &BettingSummary::from_bets(&bets));
        assert!(text.contains("Total staked: KSh 2,100"));
        assert!(text.ends_with("Net profit:   KSh 1,750\n"));
    }
}
