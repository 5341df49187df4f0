//! Contract-specific error types
//!
//! Error taxonomy for deposit, withdrawal and configuration.

use escrow_types::address::Address;
use escrow_types::errors::TransferError;
use escrow_types::ids::RecordId;
use escrow_types::numeric::Amount;
use thiserror::Error;

/// Why a deposit amount or attached payment was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountViolation {
    #[error("amount must be positive")]
    Zero,

    #[error("attached payment {attached} does not match amount {expected}")]
    PaymentMismatch { expected: Amount, attached: Amount },

    #[error("payment of {attached} attached to a token deposit")]
    UnexpectedPayment { attached: Amount },
}

/// Errors returned by ledger operations.
///
/// Every variant means the call was rejected and the ledger is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscrowError {
    #[error("Invalid recipient: must be neither null nor the ledger's custody address")]
    InvalidRecipient,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: AmountViolation },

    #[error("Inbound transfer failed: {0}")]
    TransferInFailed(#[source] TransferError),

    #[error("Record not found: {id}")]
    RecordNotFound { id: RecordId },

    #[error("Record already withdrawn: {id}")]
    AlreadyWithdrawn { id: RecordId },

    #[error("Outbound transfer failed: {0}")]
    TransferOutFailed(#[source] TransferError),

    #[error("Unauthorized: {caller} is not the recipient {recipient}")]
    UnauthorizedCaller { caller: Address, recipient: Address },
}

impl From<AmountViolation> for EscrowError {
    fn from(reason: AmountViolation) -> Self {
        EscrowError::InvalidAmount { reason }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid ledger configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
