//! Custodial Escrow Ledger
//!
//! Accepts deposits of fungible tokens, non-fungible tokens, multi-token
//! balances and native currency on behalf of a recipient, holds them under a
//! sequential record id, and releases each record to its recipient exactly once.
//!
//! # Modules
//! - `ledger`: Record store, id allocation, deposit and withdraw
//! - `dispatch`: Per-kind inbound pull and outbound push
//! - `host`: Collaborator trait for asset contracts and native payments
//! - `record`: Deposit records, requests and call context
//! - `events`: Ledger events
//! - `errors`: Contract-specific error types
//! - `config`: Ledger configuration
//! - `sim`: In-memory execution environment and reference asset contracts

pub mod config;
mod dispatch;
pub mod errors;
pub mod events;
pub mod host;
pub mod ledger;
pub mod record;
pub mod sim;

pub use config::{LedgerConfig, WithdrawAuthorization};
pub use errors::{AmountViolation, EscrowError};
pub use host::{AssetHost, Reenter};
pub use ledger::EscrowLedger;
pub use record::{CallContext, DepositRecord, DepositRequest, RecordStatus};

/// Contract ABI version, frozen after release
pub const CONTRACT_ABI_VERSION: &str = "1.0.0";
