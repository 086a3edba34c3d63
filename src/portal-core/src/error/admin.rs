use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdminError {
    #[error("No pending payout found for '{0}'")]
    NoPendingPayout(String),

    #[error("Winnings for '{0}' have already been released")]
    AlreadyReleased(String),
}
