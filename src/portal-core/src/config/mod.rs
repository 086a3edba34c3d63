//! The `portal.json` configuration file.
use crate::currency::{Currency, ExchangeRates};
use crate::deposit::PaymentDetails;
use crate::error::config::ConfigError;
use crate::error::config::ConfigError::{LoadConfigFailed, SaveConfigFailed};
use crate::error::currency::CurrencyError;
use crate::error::payout::PayoutError;
use crate::json;
use crate::payout::{TaxPolicy, DEFAULT_TAX_PERCENT};
use candid::Principal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use url::Url;

pub mod directories;

pub const DEFAULT_IC_GATEWAY: &str = "https://icp-api.io";
pub const DEFAULT_IC_GATEWAY_TRAILING_SLASH: &str = "https://icp-api.io/";
const LEGACY_IC_GATEWAYS: [&str; 2] = ["https://ic0.app", "https://ic0.app/"];

/// Keys accepted by [`PortalConfig::set`]. Exchange rates use `exchange_rates.<CODE>`.
pub const CONFIG_KEYS: [&str; 7] = [
    "network.url",
    "backend_canister_id",
    "identity_pem",
    "payment.paybill",
    "payment.account_number",
    "tax_percent",
    "exchange_rates.<CODE>",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub url: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            url: DEFAULT_IC_GATEWAY.to_string(),
        }
    }
}

impl NetworkConfig {
    /// Determines whether the url points at the IC mainnet.
    pub fn is_ic(&self) -> bool {
        let url = self.url.as_str();
        matches!(url, DEFAULT_IC_GATEWAY | DEFAULT_IC_GATEWAY_TRAILING_SLASH)
            || LEGACY_IC_GATEWAYS.contains(&url)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub network: NetworkConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_canister_id: Option<Principal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pem: Option<PathBuf>,

    pub payment: PaymentDetails,

    pub tax_percent: u8,

    /// KES per 100 units, overriding the published rate for listed currencies.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub exchange_rates: BTreeMap<Currency, u64>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            network: NetworkConfig::default(),
            backend_canister_id: None,
            identity_pem: None,
            payment: PaymentDetails::default(),
            tax_percent: DEFAULT_TAX_PERCENT,
            exchange_rates: BTreeMap::new(),
        }
    }
}

fn invalid(key: &str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn optional(value: &str) -> Option<&str> {
    match value.trim() {
        "" | "none" => None,
        v => Some(v),
    }
}

impl PortalConfig {
    /// A missing file yields the default configuration.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        json::load(path).map_err(LoadConfigFailed)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        json::save(path, self).map_err(SaveConfigFailed)
    }

    pub fn exchange_rates(&self) -> Result<ExchangeRates, CurrencyError> {
        ExchangeRates::with_overrides(&self.exchange_rates)
    }

    pub fn tax_policy(&self) -> Result<TaxPolicy, PayoutError> {
        TaxPolicy::new(self.tax_percent)
    }

    /// Updates a single setting. `none` (or an empty value) clears optional settings.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "network.url" => {
                Url::parse(value).map_err(|e| invalid(key, value, e))?;
                self.network.url = value.to_string();
            }
            "backend_canister_id" => {
                self.backend_canister_id = optional(value)
                    .map(Principal::from_text)
                    .transpose()
                    .map_err(|e| invalid(key, value, e))?;
            }
            "identity_pem" => {
                self.identity_pem = optional(value).map(PathBuf::from);
            }
            "payment.paybill" => {
                self.payment.paybill = required_digits(key, value)?;
            }
            "payment.account_number" => {
                self.payment.account_number = required_digits(key, value)?;
            }
            "tax_percent" => {
                let percent: u8 = value.trim().parse().map_err(|e| invalid(key, value, e))?;
                TaxPolicy::new(percent).map_err(|e| invalid(key, value, e))?;
                self.tax_percent = percent;
            }
            _ => match key.strip_prefix("exchange_rates.") {
                Some(code) => {
                    let currency: Currency = code.parse().map_err(|e| invalid(key, value, e))?;
                    match optional(value) {
                        None => {
                            self.exchange_rates.remove(&currency);
                        }
                        Some(v) => {
                            let rate: u64 = v.parse().map_err(|e| invalid(key, value, e))?;
                            if rate == 0 {
                                return Err(invalid(key, value, CurrencyError::ZeroRate(code.to_string())));
                            }
                            self.exchange_rates.insert(currency, rate);
                        }
                    }
                }
                None => {
                    return Err(ConfigError::UnknownKey(
                        key.to_string(),
                        CONFIG_KEYS.join(", "),
                    ))
                }
            },
        }
        Ok(())
    }
}

fn required_digits(key: &str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(key, value, "expected a non-empty string of digits"));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PortalConfig::load_or_default(&dir.path().join("portal.json")).unwrap();
        assert_eq!(config, PortalConfig::default());
        assert!(config.network.is_ic());
        assert_eq!(config.payment.paybill, "400004");
        assert_eq!(config.tax_percent, 20);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("portal.json");
        let mut config = PortalConfig::default();
        config.set("network.url", "http://127.0.0.1:4943").unwrap();
        config
            .set("backend_canister_id", "rrkah-fqaaa-aaaaa-aaaaq-cai")
            .unwrap();
        config.set("exchange_rates.usd", "13000").unwrap();
        config.save(&path).unwrap();

        let loaded = PortalConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!loaded.network.is_ic());
        assert_eq!(
            loaded.exchange_rates().unwrap().rate(Currency::Usd).unwrap(),
            13000
        );
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.json");
        std::fs::write(&path, r#"{"tax_percent": 15}"#).unwrap();
        let config = PortalConfig::load_or_default(&path).unwrap();
        assert_eq!(config.tax_percent, 15);
        assert_eq!(config.network.url, DEFAULT_IC_GATEWAY);
        assert_eq!(config.tax_policy().unwrap().quote(100).tax, 15);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.json");
        std::fs::write(&path, "{").unwrap();
        assert!(matches!(
            PortalConfig::load_or_default(&path),
            Err(ConfigError::LoadConfigFailed(_))
        ));
    }

    #[test]
    fn set_validates_values() {
        let mut config = PortalConfig::default();
        assert!(matches!(
            config.set("tax_percent", "101"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(config.set("network.url", "not a url").is_err());
        assert!(config.set("backend_canister_id", "???").is_err());
        assert!(config.set("payment.paybill", "40a004").is_err());
        assert!(config.set("exchange_rates.XYZ", "10").is_err());
        assert!(config.set("exchange_rates.USD", "0").is_err());
        assert!(matches!(
            config.set("colour", "blue"),
            Err(ConfigError::UnknownKey(_, _))
        ));
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn none_clears_optional_values() {
        let mut config = PortalConfig::default();
        config.set("identity_pem", "/tmp/me.pem").unwrap();
        assert_eq!(config.identity_pem, Some(PathBuf::from("/tmp/me.pem")));
        config.set("identity_pem", "none").unwrap();
        assert_eq!(config.identity_pem, None);

        config.set("exchange_rates.EUR", "17000").unwrap();
        config.set("exchange_rates.EUR", "none").unwrap();
        assert!(config.exchange_rates.is_empty());
    }
}
