use crate::error::phone::PhoneError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Username is required")]
    UsernameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error(transparent)]
    Phone(#[from] PhoneError),
}
