//! Integer quantity types
//!
//! Token quantities and token identifiers are unsigned integers. Arithmetic on
//! them must be checked; wrapping is never acceptable for custody accounting.

/// Quantity of a fungible token, multi-token id, or native currency.
pub type Amount = u128;

/// Identifier of a non-fungible token or a multi-token id.
pub type TokenId = u128;

/// Quantity recorded for a non-fungible token deposit.
pub const NFT_UNIT: Amount = 1;
