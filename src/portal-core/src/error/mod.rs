pub mod admin;
pub mod config;
pub mod currency;
pub mod foundation;
pub mod fs;
pub mod identity;
pub mod json_file;
pub mod payout;
pub mod phone;
pub mod profile;
