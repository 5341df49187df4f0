//! Types library for the escrow ledger
//!
//! Shared primitives used by the ledger contract and its collaborators:
//! addresses, identifiers, quantities, asset kinds and the transfer error
//! taxonomy reported by asset contracts.
//!
//! # Modules
//! - `address`: 20-byte account addresses and the null address
//! - `ids`: Deposit record identifiers
//! - `numeric`: Integer quantity and token id aliases
//! - `asset`: Asset kind tags
//! - `errors`: Error taxonomy for asset transfers and tag decoding

pub mod address;
pub mod asset;
pub mod errors;
pub mod ids;
pub mod numeric;
