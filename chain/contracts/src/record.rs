//! Deposit records and the inputs that create them

use escrow_types::address::Address;
use escrow_types::asset::AssetKind;
use escrow_types::numeric::{Amount, TokenId, NFT_UNIT};
use serde::{Deserialize, Serialize};

/// Who is calling, and how much native currency rides along with the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Address,
    pub attached: Amount,
}

impl CallContext {
    pub fn new(caller: Address) -> Self {
        Self {
            caller,
            attached: 0,
        }
    }

    pub fn with_payment(mut self, attached: Amount) -> Self {
        self.attached = attached;
        self
    }
}

/// Deposit arguments as submitted by the depositor.
///
/// Fields the kind does not use are accepted and discarded when the record
/// is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub kind: AssetKind,
    pub asset_contract: Address,
    pub recipient: Address,
    pub asset_id: TokenId,
    pub amount: Amount,
}

impl DepositRequest {
    pub fn new(
        kind: AssetKind,
        asset_contract: Address,
        recipient: Address,
        asset_id: TokenId,
        amount: Amount,
    ) -> Self {
        Self {
            kind,
            asset_contract,
            recipient,
            asset_id,
            amount,
        }
    }

    pub fn fungible(token: Address, recipient: Address, amount: Amount) -> Self {
        Self::new(AssetKind::FungibleToken, token, recipient, 0, amount)
    }

    pub fn non_fungible(token: Address, recipient: Address, token_id: TokenId) -> Self {
        Self::new(AssetKind::NonFungibleToken, token, recipient, token_id, NFT_UNIT)
    }

    pub fn multi_token(token: Address, recipient: Address, id: TokenId, amount: Amount) -> Self {
        Self::new(AssetKind::MultiToken, token, recipient, id, amount)
    }

    pub fn native(recipient: Address, amount: Amount) -> Self {
        Self::new(AssetKind::NativeCurrency, Address::ZERO, recipient, 0, amount)
    }
}

/// Lifecycle state of a record, derived from its withdrawn flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordStatus {
    /// Asset held in custody
    Pending,
    /// Asset transferred to the recipient
    Released,
}

/// One successful deposit.
///
/// Everything except `withdrawn` is fixed at creation. Fields a kind does not
/// use are stored in canonical form: zero contract and id for native
/// currency, zero id for fungible tokens, unit amount for non-fungible tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRecord {
    pub kind: AssetKind,
    pub asset_contract: Address,
    pub recipient: Address,
    pub asset_id: TokenId,
    pub amount: Amount,
    pub withdrawn: bool,
}

impl DepositRecord {
    pub(crate) fn from_request(request: &DepositRequest) -> Self {
        let asset_contract = if request.kind.uses_contract() {
            request.asset_contract
        } else {
            Address::ZERO
        };
        let asset_id = if request.kind.uses_asset_id() {
            request.asset_id
        } else {
            0
        };
        let amount = match request.kind {
            AssetKind::NonFungibleToken => NFT_UNIT,
            _ => request.amount,
        };

        Self {
            kind: request.kind,
            asset_contract,
            recipient: request.recipient,
            asset_id,
            amount,
            withdrawn: false,
        }
    }

    pub fn status(&self) -> RecordStatus {
        if self.withdrawn {
            RecordStatus::Released
        } else {
            RecordStatus::Pending
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.withdrawn
    }

    /// Whether this record holds units of the given asset.
    pub fn holds(&self, kind: AssetKind, asset_contract: Address, asset_id: TokenId) -> bool {
        self.kind == kind && self.asset_contract == asset_contract && self.asset_id == asset_id
    }
}
