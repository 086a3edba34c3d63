//! Player profiles as stored by the backend canister.
use crate::error::profile::ProfileError;
use crate::format::format_balance;
use crate::phone::PhoneNumber;
use candid::{CandidType, Nat};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub email: String,
    #[serde(rename = "walletAddress")]
    pub wallet_address: String,
    /// Whole KES.
    pub balance: Nat,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Username: {}", self.username)?;
        writeln!(f, "Email:    {}", self.email)?;
        let wallet = if self.wallet_address.is_empty() {
            "(not set)"
        } else {
            &self.wallet_address
        };
        writeln!(f, "Wallet:   {wallet}")?;
        write!(f, "Balance:  KSh {}", format_balance(&self.balance))
    }
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    #[serde(rename = "walletAddress")]
    pub wallet_address: String,
}

impl ProfileUpdate {
    /// Username and email are mandatory; the wallet address may stay empty.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.username.trim().is_empty() {
            return Err(ProfileError::UsernameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(ProfileError::EmailRequired);
        }
        Ok(())
    }

    /// Applies the given edits on top of an existing profile.
    pub fn merged(
        current: Option<&Profile>,
        username: Option<String>,
        email: Option<String>,
        wallet_address: Option<String>,
    ) -> Self {
        let base = current
            .map(|p| ProfileUpdate {
                username: p.username.clone(),
                email: p.email.clone(),
                wallet_address: p.wallet_address.clone(),
            })
            .unwrap_or_default();
        ProfileUpdate {
            username: username.unwrap_or(base.username),
            email: email.unwrap_or(base.email),
            wallet_address: wallet_address.unwrap_or(base.wallet_address),
        }
    }
}

/// First-time profile creation, which also requires a phone number.
#[derive(Clone, Debug)]
pub struct ProfileSetup {
    pub update: ProfileUpdate,
    pub phone: String,
}

impl ProfileSetup {
    pub fn validate(&self) -> Result<PhoneNumber, ProfileError> {
        self.update.validate()?;
        Ok(PhoneNumber::parse(&self.phone)?)
    }
}
