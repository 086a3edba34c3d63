use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Cannot read identity file '{0}': {1:#}")]
    ReadIdentityFileFailed(PathBuf, std::io::Error),

    #[error("Identity file '{0}' is neither an Ed25519 nor a secp256k1 PEM key: {1}")]
    ParsePemFailed(PathBuf, String),

    #[error("Failed to derive the principal of identity '{0}': {1}")]
    DerivePrincipalFailed(String, String),
}
