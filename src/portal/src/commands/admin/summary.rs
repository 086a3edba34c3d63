use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use clap::Parser;
use portal_core::admin::{AdminFeed, AdminSummary};
use portal_core::format::format_kes;

/// Totals for pending and released winnings.
#[derive(Parser)]
pub struct SummaryOpts {
    /// Print as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(env: &dyn Environment, feed: &dyn AdminFeed, opts: SummaryOpts) -> PortalResult {
    let summary = AdminSummary::from_feed(feed);
    let tax = env.get_tax_policy()?.quote(summary.pending_total);
    if opts.json {
        let out = serde_json::json!({ "summary": summary, "pending_payout": tax });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!(
        "Pending:  {} winners, {} ({} after {}% tax)",
        summary.pending_count,
        format_kes(summary.pending_total),
        format_kes(tax.net),
        tax.tax_percent
    );
    println!(
        "Released: {} payouts, {}",
        summary.released_count,
        format_kes(summary.released_total)
    );
    Ok(())
}
