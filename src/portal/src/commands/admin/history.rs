use crate::lib::error::PortalResult;
use clap::Parser;
use portal_core::admin::AdminFeed;
use portal_core::format::format_kes;

/// Lists past winnings releases.
#[derive(Parser)]
pub struct HistoryOpts {
    /// Print as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(feed: &dyn AdminFeed, opts: HistoryOpts) -> PortalResult {
    let history = feed.release_history();
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }
    for record in history {
        println!(
            "#{:<3} {:<12} {:>11}  {}  {}",
            record.id,
            record.username,
            format_kes(record.amount),
            record.release_date,
            record.status
        );
    }
    Ok(())
}
