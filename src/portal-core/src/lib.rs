pub mod admin;
pub mod config;
pub mod currency;
pub mod deposit;
pub mod error;
pub mod format;
pub mod fs;
pub mod history;
pub mod identity;
pub mod json;
pub mod payout;
pub mod phone;
pub mod profile;
