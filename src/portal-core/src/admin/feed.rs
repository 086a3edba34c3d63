use super::{AdminFeed, PendingWinner, ReleaseRecord, ReleaseStatus};
use crate::error::admin::AdminError;
use candid::Principal;

/// Stable stand-in principals for the seeded players.
pub(crate) fn mock_principal(n: u8) -> Principal {
    Principal::from_slice(&[0xca, 0x51, n, 0x01])
}

/// In-memory admin data seeded with the dashboard's sample players.
#[derive(Clone, Debug)]
pub struct MockAdminFeed {
    pending: Vec<PendingWinner>,
    history: Vec<ReleaseRecord>,
}

impl MockAdminFeed {
    pub fn new(pending: Vec<PendingWinner>, history: Vec<ReleaseRecord>) -> Self {
        MockAdminFeed { pending, history }
    }

    pub fn seeded() -> Self {
        let winner = |n: u8, username: &str, amount: u64, win_date: &str| PendingWinner {
            user: mock_principal(n),
            username: username.to_string(),
            amount,
            win_date: win_date.to_string(),
            is_paid: false,
        };
        let release = |id: &str, n: u8, username: &str, amount: u64, date: &str| ReleaseRecord {
            id: id.to_string(),
            user: mock_principal(n),
            username: username.to_string(),
            amount,
            release_date: date.to_string(),
            status: ReleaseStatus::Released,
        };
        MockAdminFeed::new(
            vec![
                winner(1, "john_doe", 15000, "2026-02-17"),
                winner(2, "jane_smith", 8500, "2026-02-16"),
                winner(3, "mike_wilson", 22000, "2026-02-15"),
            ],
            vec![
                release("1", 4, "sarah_jones", 12000, "2026-02-18 10:30"),
                release("2", 5, "tom_brown", 9500, "2026-02-17 14:15"),
            ],
        )
    }
}

impl AdminFeed for MockAdminFeed {
    fn pending_winners(&self) -> Vec<PendingWinner> {
        self.pending.iter().filter(|w| !w.is_paid).cloned().collect()
    }

    fn release_history(&self) -> Vec<ReleaseRecord> {
        self.history.clone()
    }

    fn mark_released(
        &mut self,
        user: &Principal,
        released_at: &str,
    ) -> Result<ReleaseRecord, AdminError> {
        let position = self
            .pending
            .iter()
            .position(|w| &w.user == user)
            .ok_or_else(|| AdminError::NoPendingPayout(user.to_text()))?;
        if self.pending[position].is_paid {
            return Err(AdminError::AlreadyReleased(user.to_text()));
        }
        let winner = self.pending.remove(position);
        let next_id = self
            .history
            .iter()
            .filter_map(|r| r.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let record = ReleaseRecord {
            id: next_id.to_string(),
            user: winner.user,
            username: winner.username,
            amount: winner.amount,
            release_date: released_at.to_string(),
            status: ReleaseStatus::Released,
        };
        self.history.insert(0, record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_feed_has_sample_players() {
        let feed = MockAdminFeed::seeded();
        let pending = feed.pending_winners();
        assert_eq!(pending.len(), 3);
        assert_eq!(pending[0].username, "john_doe");
        assert_eq!(pending[2].amount, 22000);
        assert_eq!(feed.release_history()[1].username, "tom_brown");
    }

    #[test]
    fn finds_by_username_or_principal() {
        let feed = MockAdminFeed::seeded();
        let jane = feed.find_pending("jane_smith").unwrap();
        assert_eq!(jane.amount, 8500);
        let by_principal = feed.find_pending(&jane.user.to_text()).unwrap();
        assert_eq!(by_principal, jane);
        assert_eq!(
            feed.find_pending("nobody"),
            Err(AdminError::NoPendingPayout("nobody".to_string()))
        );
    }

    #[test]
    fn release_moves_winner_into_history() {
        let mut feed = MockAdminFeed::seeded();
        let user = mock_principal(3);
        let record = feed.mark_released(&user, "2026-02-19 09:00").unwrap();
        assert_eq!(record.id, "3");
        assert_eq!(record.username, "mike_wilson");
        assert_eq!(record.amount, 22000);
        assert_eq!(feed.pending_winners().len(), 2);
        assert_eq!(feed.release_history()[0], record);

        assert_eq!(
            feed.mark_released(&user, "2026-02-19 09:01"),
            Err(AdminError::NoPendingPayout(user.to_text()))
        );
    }

    #[test]
    fn paid_entries_cannot_be_released_again() {
        let mut feed = MockAdminFeed::new(
            vec![PendingWinner {
                user: mock_principal(9),
                username: "paid".to_string(),
                amount: 1,
                win_date: "2026-01-01".to_string(),
                is_paid: true,
            }],
            vec![],
        );
        assert!(feed.pending_winners().is_empty());
        assert_eq!(
            feed.mark_released(&mock_principal(9), "now"),
            Err(AdminError::AlreadyReleased(mock_principal(9).to_text()))
        );
    }
}
