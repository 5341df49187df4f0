//! Collaborator boundary: the asset contracts and native payment mechanism
//!
//! The ledger never tracks token balances itself. It asks the host to move
//! assets with the protocol native to each kind and trusts the host's
//! balance and approval semantics.
//!
//! Inbound methods are delegated transfers: the ledger acts as spender or
//! operator on assets the depositor pre-approved. Outbound methods move assets
//! the ledger owns. Outbound transfers, and the safe-transfer pulls of
//! non-fungible and multi-tokens, may run code controlled by the receiver, so
//! they carry a [`Reenter`] handle that code may use to call back into the
//! ledger.
//!
//! A host must leave its own state unchanged when it returns an error.

use escrow_types::address::Address;
use escrow_types::errors::TransferError;
use escrow_types::ids::RecordId;
use escrow_types::numeric::{Amount, TokenId};

use crate::errors::EscrowError;

pub trait AssetHost {
    /// Move `amount` fungible units from `from` to `to` against the
    /// allowance `from` granted to `spender`.
    fn fungible_transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Move `amount` fungible units owned by `from`.
    fn fungible_transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError>;

    /// Move token `token_id` from `from` to `to`; `operator` must be the
    /// owner, the approved address for the token, or an approved operator.
    fn nft_transfer_from(
        &mut self,
        token: Address,
        operator: Address,
        from: Address,
        to: Address,
        token_id: TokenId,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError>;

    /// Move token `token_id` owned by `from`.
    fn nft_transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        token_id: TokenId,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError>;

    /// Move `amount` units of `id`; `operator` must be `from` or approved
    /// for all of `from`'s ids.
    fn multi_transfer_from(
        &mut self,
        token: Address,
        operator: Address,
        from: Address,
        to: Address,
        id: TokenId,
        amount: Amount,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError>;

    /// Move `amount` units of `id` owned by `from`.
    fn multi_transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        id: TokenId,
        amount: Amount,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError>;

    /// Accept the native payment attached to the current call.
    fn native_receive(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Pay native currency. A receiver refusing payment is an error.
    fn native_send(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
        reenter: &mut dyn Reenter,
    ) -> Result<(), TransferError>;
}

/// Entry point into the ledger for receiver code running inside a transfer.
pub trait Reenter {
    fn reenter_withdraw(
        &mut self,
        host: &mut dyn AssetHost,
        caller: Address,
        id: RecordId,
    ) -> Result<(), EscrowError>;
}
