//! Error types shared by the ledger and asset contracts
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

use crate::address::Address;
use crate::numeric::{Amount, TokenId};

/// Failure reported by an asset contract or the native payment mechanism.
///
/// The ledger never interprets these beyond propagating them; they exist so
/// callers can tell why a transfer was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("No asset contract at {contract}")]
    UnknownContract { contract: Address },

    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: Amount, available: Amount },

    #[error("Insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: Amount, available: Amount },

    #[error("Spender {spender} is not approved")]
    NotApproved { spender: Address },

    #[error("Token {token_id} is not owned by {account}")]
    NotOwner { token_id: TokenId, account: Address },

    #[error("Asset contract {contract} is paused")]
    Paused { contract: Address },

    #[error("Account {account} is blacklisted")]
    Blacklisted { account: Address },

    #[error("Transfer rejected by receiver: {reason}")]
    Rejected { reason: String },

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,
}

/// Wire tag that does not name an asset kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown asset kind tag: {tag}")]
pub struct UnknownAssetKind {
    pub tag: u8,
}

/// Text that does not parse as an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("Invalid hex in address: {input}")]
    InvalidHex { input: String },

    #[error("Invalid address length: expected 20 bytes, got {length}")]
    InvalidLength { length: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_balance_display() {
        let err = TransferError::InsufficientBalance {
            required: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: required 5, available 3"
        );
    }

    #[test]
    fn test_rejected_display() {
        let err = TransferError::Rejected {
            reason: "no receive hook".to_string(),
        };
        assert!(err.to_string().contains("no receive hook"));
    }

    #[test]
    fn test_unknown_kind_display() {
        let err = UnknownAssetKind { tag: 9 };
        assert_eq!(err.to_string(), "Unknown asset kind tag: 9");
    }
}
