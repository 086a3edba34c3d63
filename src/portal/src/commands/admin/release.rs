use crate::commands::payout::render_quote;
use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use crate::util::now_timestamp;
use anyhow::{bail, Context};
use clap::Parser;
use dialoguer::Confirm;
use portal_core::admin::{AdminFeed, PendingWinner, ReleaseRecord};
use portal_core::format::format_kes;
use portal_core::payout::PayoutQuote;
use slog::info;
use std::future::Future;

/// Releases a player's pending winnings, less tax.
#[derive(Parser)]
pub struct ReleaseOpts {
    /// Username or principal of the winner.
    user: String,

    /// Skip the confirmation prompt.
    #[arg(long, short)]
    yes: bool,
}

pub async fn exec(
    env: &dyn Environment,
    backend: &BackendClient<'_>,
    feed: &mut dyn AdminFeed,
    opts: ReleaseOpts,
) -> PortalResult {
    let winner = feed.find_pending(opts.user.trim())?;
    let quote = env.get_tax_policy()?.quote(winner.amount);

    print!("{}", render_quote(&quote));
    if !opts.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Release {} to {} ({})?",
                format_kes(quote.net),
                winner.username,
                winner.user
            ))
            .default(false)
            .interact()
            .context("Failed to read user input.")?;
        if !confirmed {
            bail!("Release of winnings to {} cancelled.", winner.username);
        }
    }

    let record = complete_release(
        feed,
        &winner,
        &now_timestamp(),
        backend.release_winnings_to_user(winner.user),
    )
    .await?;
    info!(
        env.get_logger(),
        "Recorded release #{} for {}", record.id, record.username
    );
    println!("{}", release_message(&winner.username, &quote));
    Ok(())
}

/// Waits for the backend to release the funds, then moves the winner into the history.
/// A failed backend call leaves the feed untouched.
async fn complete_release<F>(
    feed: &mut dyn AdminFeed,
    winner: &PendingWinner,
    released_at: &str,
    release: F,
) -> PortalResult<ReleaseRecord>
where
    F: Future<Output = PortalResult>,
{
    release.await?;
    Ok(feed.mark_released(&winner.user, released_at)?)
}

fn release_message(username: &str, quote: &PayoutQuote) -> String {
    format!(
        "Successfully released {} to {}",
        format_kes(quote.net),
        username
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use portal_core::admin::MockAdminFeed;
    use portal_core::payout::TaxPolicy;

    fn john_doe(feed: &MockAdminFeed) -> PendingWinner {
        feed.find_pending("john_doe").unwrap()
    }

    #[test]
    fn success_message_shows_net_amount() {
        let quote = TaxPolicy::default().quote(15000);
        assert_eq!(
            release_message("john_doe", &quote),
            "Successfully released KSh 12,000 to john_doe"
        );
    }

    #[tokio::test]
    async fn winner_moves_to_history_after_backend_release() {
        let mut feed = MockAdminFeed::seeded();
        let winner = john_doe(&feed);
        let record = complete_release(&mut feed, &winner, "2026-02-19 09:00", async { Ok(()) })
            .await
            .unwrap();
        assert_eq!(record.username, "john_doe");
        assert_eq!(record.amount, 15000);
        assert_eq!(record.release_date, "2026-02-19 09:00");
        assert!(feed.find_pending("john_doe").is_err());
        assert_eq!(feed.release_history().len(), 3);
    }

    #[tokio::test]
    async fn failed_backend_release_keeps_winner_pending() {
        let mut feed = MockAdminFeed::seeded();
        let winner = john_doe(&feed);
        let result = complete_release(&mut feed, &winner, "2026-02-19 09:00", async {
            Err(anyhow!("The replica returned a rejection error"))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(feed.find_pending("john_doe").unwrap(), winner);
        assert_eq!(feed.release_history().len(), 2);
    }
}
