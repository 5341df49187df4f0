//! Asset kinds
//!
//! The kind decides which transfer protocol moves an asset and which fields
//! of a deposit are meaningful.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::UnknownAssetKind;

/// Closed set of asset kinds the ledger can hold.
///
/// Wire tags: 0 fungible, 1 non-fungible, 2 multi-token, 3 native.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetKind {
    /// Balance-based token with allowance approvals
    FungibleToken,
    /// Unique token identified by its token id
    NonFungibleToken,
    /// Token contract holding balances per token id
    MultiToken,
    /// Currency of the execution environment itself
    NativeCurrency,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::FungibleToken,
        AssetKind::NonFungibleToken,
        AssetKind::MultiToken,
        AssetKind::NativeCurrency,
    ];

    pub fn tag(&self) -> u8 {
        match self {
            AssetKind::FungibleToken => 0,
            AssetKind::NonFungibleToken => 1,
            AssetKind::MultiToken => 2,
            AssetKind::NativeCurrency => 3,
        }
    }

    /// Whether deposits of this kind must carry a positive amount.
    pub fn requires_amount(&self) -> bool {
        !matches!(self, AssetKind::NonFungibleToken)
    }

    /// Whether the asset id field identifies what is held.
    pub fn uses_asset_id(&self) -> bool {
        matches!(self, AssetKind::NonFungibleToken | AssetKind::MultiToken)
    }

    /// Whether the asset lives at a token contract.
    pub fn uses_contract(&self) -> bool {
        !matches!(self, AssetKind::NativeCurrency)
    }
}

impl TryFrom<u8> for AssetKind {
    type Error = UnknownAssetKind;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(AssetKind::FungibleToken),
            1 => Ok(AssetKind::NonFungibleToken),
            2 => Ok(AssetKind::MultiToken),
            3 => Ok(AssetKind::NativeCurrency),
            _ => Err(UnknownAssetKind { tag }),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::FungibleToken => "fungible",
            AssetKind::NonFungibleToken => "non-fungible",
            AssetKind::MultiToken => "multi-token",
            AssetKind::NativeCurrency => "native",
        };
        f.write_str(name)
    }
}
