//! Admin-side data: roles, pending winnings and the release history.
//!
//! The backend canister does not publish pending winners or past releases,
//! so [`AdminFeed`] is served from an in-memory [`MockAdminFeed`].
use crate::error::admin::AdminError;
use candid::{CandidType, Principal};
use serde::{Deserialize, Serialize};
use std::fmt;

mod feed;

pub use feed::MockAdminFeed;

#[derive(CandidType, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "guest")]
    Guest,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        })
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            "guest" => Ok(UserRole::Guest),
            other => Err(format!(
                "Unknown role '{other}'. Expected one of: admin, user, guest"
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PendingWinner {
    pub user: Principal,
    pub username: String,
    /// Gross winnings in KES.
    pub amount: u64,
    pub win_date: String,
    pub is_paid: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ReleaseStatus {
    Released,
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseStatus::Released => f.write_str("Released"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReleaseRecord {
    pub id: String,
    pub user: Principal,
    pub username: String,
    pub amount: u64,
    pub release_date: String,
    pub status: ReleaseStatus,
}

/// Source of the admin dashboard's pending payouts and release history.
pub trait AdminFeed {
    fn pending_winners(&self) -> Vec<PendingWinner>;

    fn release_history(&self) -> Vec<ReleaseRecord>;

    /// Looks a pending winner up by principal text or username.
    fn find_pending(&self, user: &str) -> Result<PendingWinner, AdminError> {
        self.pending_winners()
            .into_iter()
            .find(|w| w.user.to_text() == user || w.username == user)
            .ok_or_else(|| AdminError::NoPendingPayout(user.to_string()))
    }

    /// Moves a winner from pending into the release history.
    fn mark_released(
        &mut self,
        user: &Principal,
        released_at: &str,
    ) -> Result<ReleaseRecord, AdminError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdminSummary {
    pub pending_count: usize,
    pub pending_total: u64,
    pub released_count: usize,
    pub released_total: u64,
}

impl AdminSummary {
    pub fn from_feed(feed: &dyn AdminFeed) -> Self {
        let pending: Vec<_> = feed
            .pending_winners()
            .into_iter()
            .filter(|w| !w.is_paid)
            .collect();
        let history = feed.release_history();
        AdminSummary {
            pending_count: pending.len(),
            pending_total: pending.iter().map(|w| w.amount).sum(),
            released_count: history.len(),
            released_total: history.iter().map(|r| r.amount).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roles() {
        assert_eq!("Admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("guest".parse::<UserRole>(), Ok(UserRole::Guest));
        assert!("root".parse::<UserRole>().is_err());
        assert_eq!(UserRole::User.to_string(), "user");
    }

    #[test]
    fn role_uses_backend_variant_names() {
        let bytes = candid::encode_one(UserRole::Admin).unwrap();
        let decoded: UserRole = candid::decode_one(&bytes).unwrap();
        assert_eq!(decoded, UserRole::Admin);
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn summarizes_seeded_feed() {
        let feed = MockAdminFeed::seeded();
        let summary = AdminSummary::from_feed(&feed);
        assert_eq!(summary.pending_count, 3);
        assert_eq!(summary.pending_total, 45500);
        assert_eq!(summary.released_count, 2);
        assert_eq!(summary.released_total, 21500);
    }
}
