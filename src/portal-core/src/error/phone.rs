use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Phone number is required")]
    Missing,

    #[error("Invalid phone number format '{0}'. Please enter a valid African phone number.")]
    InvalidFormat(String),
}
