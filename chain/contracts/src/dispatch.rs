//! Per-kind transfer dispatch
//!
//! One arm per asset kind, mirrored between the inbound pull and the outbound
//! push. The record, not the caller's request, decides what moves.

use escrow_types::address::Address;
use escrow_types::asset::AssetKind;
use escrow_types::errors::TransferError;
use tracing::debug;

use crate::host::{AssetHost, Reenter};
use crate::record::DepositRecord;

/// Pull the asset described by `record` from `depositor` into `custody`.
///
/// Non-fungible and multi-token pulls are safe transfers: the receiver hook on
/// `custody` may run and re-enter through `reenter`.
pub(crate) fn pull<H: AssetHost + ?Sized>(
    host: &mut H,
    reenter: &mut dyn Reenter,
    custody: Address,
    depositor: Address,
    record: &DepositRecord,
) -> Result<(), TransferError> {
    debug!(
        kind = %record.kind,
        contract = %record.asset_contract,
        from = %depositor,
        asset_id = %record.asset_id,
        amount = %record.amount,
        "Pulling asset into custody"
    );

    match record.kind {
        AssetKind::FungibleToken => host.fungible_transfer_from(
            record.asset_contract,
            custody,
            depositor,
            custody,
            record.amount,
        ),
        AssetKind::NonFungibleToken => host.nft_transfer_from(
            record.asset_contract,
            custody,
            depositor,
            custody,
            record.asset_id,
            reenter,
        ),
        AssetKind::MultiToken => host.multi_transfer_from(
            record.asset_contract,
            custody,
            depositor,
            custody,
            record.asset_id,
            record.amount,
            reenter,
        ),
        AssetKind::NativeCurrency => host.native_receive(depositor, custody, record.amount),
    }
}

/// Push the asset described by `record` from `custody` to its recipient.
pub(crate) fn push<H: AssetHost + ?Sized>(
    host: &mut H,
    reenter: &mut dyn Reenter,
    custody: Address,
    record: &DepositRecord,
) -> Result<(), TransferError> {
    debug!(
        kind = %record.kind,
        contract = %record.asset_contract,
        to = %record.recipient,
        asset_id = %record.asset_id,
        amount = %record.amount,
        "Pushing asset out of custody"
    );

    match record.kind {
        AssetKind::FungibleToken => host.fungible_transfer(
            record.asset_contract,
            custody,
            record.recipient,
            record.amount,
            reenter,
        ),
        AssetKind::NonFungibleToken => host.nft_transfer(
            record.asset_contract,
            custody,
            record.recipient,
            record.asset_id,
            reenter,
        ),
        AssetKind::MultiToken => host.multi_transfer(
            record.asset_contract,
            custody,
            record.recipient,
            record.asset_id,
            record.amount,
            reenter,
        ),
        AssetKind::NativeCurrency => {
            host.native_send(custody, record.recipient, record.amount, reenter)
        }
    }
}
