use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use clap::Parser;
use portal_core::admin::{AdminFeed, PendingWinner};
use portal_core::format::format_kes;
use portal_core::payout::TaxPolicy;

/// Lists winnings waiting to be released, with the tax to withhold from each.
#[derive(Parser)]
pub struct PendingOpts {
    /// Print as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(env: &dyn Environment, feed: &dyn AdminFeed, opts: PendingOpts) -> PortalResult {
    let tax = env.get_tax_policy()?;
    let pending = feed.pending_winners();
    if opts.json {
        let rows: Vec<_> = pending
            .iter()
            .map(|w| serde_json::json!({ "winner": w, "payout": tax.quote(w.amount) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    print!("{}", render(&pending, &tax));
    Ok(())
}

fn render(pending: &[PendingWinner], tax: &TaxPolicy) -> String {
    if pending.is_empty() {
        return "No pending winnings to release.\n".to_string();
    }
    let mut out = String::new();
    for winner in pending {
        let quote = tax.quote(winner.amount);
        out.push_str(&format!(
            "{:<12} {:>11}  tax {:>10}  net {:>11}  won {}  {}\n",
            winner.username,
            format_kes(quote.gross),
            format_kes(quote.tax),
            format_kes(quote.net),
            winner.win_date,
            winner.user,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::admin::MockAdminFeed;

    #[test]
    fn lists_every_pending_winner_with_tax() {
        let text = render(&MockAdminFeed::seeded().pending_winners(), &TaxPolicy::default());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("john_doe"));
        assert!(lines[0].contains("tax  KSh 3,000"));
        assert!(lines[0].contains("net  KSh 12,000"));
        assert!(lines[2].contains("KSh 22,000"));
    }

    #[test]
    fn empty_list() {
        assert_eq!(
            render(&[], &TaxPolicy::default()),
            "No pending winnings to release.\n"
        );
    }
}
