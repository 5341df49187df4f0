//! Ledger configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Who may trigger the release of a record.
///
/// Assets always go to the stored recipient; this only decides who may
/// start the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawAuthorization {
    /// Any caller may push a record out to its recipient
    #[default]
    AnyCaller,
    /// Only the recipient may trigger its own withdrawal
    RecipientOnly,
}

/// Ledger configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub withdraw_authorization: WithdrawAuthorization,
}

impl LedgerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
