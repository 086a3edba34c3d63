pub mod access;
pub mod agent;
pub mod diagnosis;
pub mod environment;
pub mod error;
pub mod logger;
pub mod operations;
pub mod retryable;
pub mod root_key;
