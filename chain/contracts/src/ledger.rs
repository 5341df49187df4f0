//! Escrow ledger: deposit records, identifier allocation, release
//!
//! The ledger holds assets in custody under its own address. Each deposit pulls
//! one asset from the depositor and creates one record naming the recipient.
//! A withdrawal pushes exactly the recorded asset to that recipient, once.
//!
//! Ordering rules every path keeps:
//! - deposit pulls the asset before it allocates an id or stores a record
//! - withdraw marks the record released before it pushes the asset
//! - a failed transfer restores every record and event, including releases
//!   made by receiver code that re-entered during the transfer

use escrow_types::address::Address;
use escrow_types::asset::AssetKind;
use escrow_types::ids::RecordId;
use escrow_types::numeric::{Amount, TokenId};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::config::{LedgerConfig, WithdrawAuthorization};
use crate::dispatch;
use crate::errors::{AmountViolation, EscrowError};
use crate::events::{Deposited, LedgerEvent, Withdrawn};
use crate::host::{AssetHost, Reenter};
use crate::record::{CallContext, DepositRecord, DepositRequest};

/// Ledger state captured before a transfer. Nested calls only append
/// events, so the event count is enough to restore them.
#[derive(Debug)]
struct Snapshot {
    records: Vec<DepositRecord>,
    events: usize,
}

/// Custodial escrow ledger.
///
/// Records live in a vector indexed by their id, so the next id is always
/// the number of records stored.
#[derive(Debug, Clone)]
pub struct EscrowLedger {
    /// Custody account at the asset contracts
    address: Address,
    config: LedgerConfig,
    /// Append-only; index == record id
    records: Vec<DepositRecord>,
    /// Emitted events log (append-only)
    events: Vec<LedgerEvent>,
}

impl EscrowLedger {
    /// Create an empty ledger holding custody at `address`.
    pub fn new(address: Address) -> Self {
        Self::with_config(address, LedgerConfig::default())
    }

    /// Create an empty ledger with custom configuration
    pub fn with_config(address: Address, config: LedgerConfig) -> Self {
        Self {
            address,
            config,
            records: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ───────────────────────── Deposit ─────────────────────────

    /// Pull an asset from the caller into custody and record it for
    /// `request.recipient`.
    ///
    /// Validates: recipient neither null nor the custody address, positive
    /// amount (except non-fungible tokens), attached payment equal to the
    /// amount for native currency and absent otherwise. Emits `Deposited`.
    pub fn deposit<H: AssetHost + ?Sized>(
        &mut self,
        host: &mut H,
        ctx: CallContext,
        request: DepositRequest,
    ) -> Result<RecordId, EscrowError> {
        let result = self.try_deposit(host, ctx, request);
        if let Err(err) = &result {
            warn!(
                caller = %ctx.caller,
                kind = %request.kind,
                recipient = %request.recipient,
                error = %err,
                "Deposit rejected"
            );
        }
        result
    }

    fn try_deposit<H: AssetHost + ?Sized>(
        &mut self,
        host: &mut H,
        ctx: CallContext,
        request: DepositRequest,
    ) -> Result<RecordId, EscrowError> {
        validate_deposit(self.address, &ctx, &request)?;

        let record = DepositRecord::from_request(&request);
        let snapshot = self.snapshot();
        let custody = self.address;
        if let Err(cause) = dispatch::pull(host, self, custody, ctx.caller, &record) {
            self.rollback(snapshot);
            return Err(EscrowError::TransferInFailed(cause));
        }

        // Allocated only now: a failed pull must not consume an id.
        let id = self.next_id();
        self.events.push(LedgerEvent::Deposited(Deposited {
            id,
            kind: record.kind,
            asset_contract: record.asset_contract,
            depositor: ctx.caller,
            recipient: record.recipient,
            asset_id: record.asset_id,
            amount: record.amount,
        }));
        info!(
            record_id = %id,
            kind = %record.kind,
            depositor = %ctx.caller,
            recipient = %record.recipient,
            amount = %record.amount,
            "Deposit recorded"
        );
        self.records.push(record);
        Ok(id)
    }

    // ───────────────────────── Withdraw ─────────────────────────

    /// Release record `id` to its recipient.
    ///
    /// Any caller may trigger the release unless the ledger is configured
    /// with [`WithdrawAuthorization::RecipientOnly`]. Emits `Withdrawn`.
    pub fn withdraw<H: AssetHost + ?Sized>(
        &mut self,
        host: &mut H,
        caller: Address,
        id: RecordId,
    ) -> Result<(), EscrowError> {
        let result = self.try_withdraw(host, caller, id);
        if let Err(err) = &result {
            warn!(caller = %caller, record_id = %id, error = %err, "Withdrawal rejected");
        }
        result
    }

    fn try_withdraw<H: AssetHost + ?Sized>(
        &mut self,
        host: &mut H,
        caller: Address,
        id: RecordId,
    ) -> Result<(), EscrowError> {
        let index = self.index_of(id).ok_or(EscrowError::RecordNotFound { id })?;
        let record = self.records[index].clone();

        if record.withdrawn {
            return Err(EscrowError::AlreadyWithdrawn { id });
        }
        self.authorize(caller, &record)?;

        let snapshot = self.snapshot();
        // Committed before the push so a re-entrant call sees it released.
        self.records[index].withdrawn = true;

        let custody = self.address;
        if let Err(cause) = dispatch::push(host, self, custody, &record) {
            self.rollback(snapshot);
            return Err(EscrowError::TransferOutFailed(cause));
        }

        self.events.push(LedgerEvent::Withdrawn(Withdrawn {
            id,
            kind: record.kind,
            caller,
            recipient: record.recipient,
            asset_id: record.asset_id,
            amount: record.amount,
        }));
        info!(
            record_id = %id,
            kind = %record.kind,
            caller = %caller,
            recipient = %record.recipient,
            amount = %record.amount,
            "Deposit released"
        );
        Ok(())
    }

    /// State to return to if a transfer fails after receiver code ran.
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: self.records.clone(),
            events: self.events.len(),
        }
    }

    /// Undo releases committed by nested calls during a failed transfer.
    fn rollback(&mut self, snapshot: Snapshot) {
        self.records = snapshot.records;
        self.events.truncate(snapshot.events);
    }

    fn authorize(&self, caller: Address, record: &DepositRecord) -> Result<(), EscrowError> {
        match self.config.withdraw_authorization {
            WithdrawAuthorization::AnyCaller => Ok(()),
            WithdrawAuthorization::RecipientOnly if caller == record.recipient => Ok(()),
            WithdrawAuthorization::RecipientOnly => Err(EscrowError::UnauthorizedCaller {
                caller,
                recipient: record.recipient,
            }),
        }
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Get a record by id.
    pub fn record(&self, id: RecordId) -> Option<&DepositRecord> {
        self.index_of(id).map(|index| &self.records[index])
    }

    /// All records in id order, withdrawn ones included.
    pub fn records(&self) -> impl Iterator<Item = (RecordId, &DepositRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (RecordId::new(index as u64), record))
    }

    /// The id the next successful deposit will receive.
    pub fn next_id(&self) -> RecordId {
        RecordId::new(self.records.len() as u64)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total still owed to recipients for one asset: the sum of pending
    /// record amounts with this kind, contract and asset id.
    ///
    /// `None` if the sum does not fit in an [`Amount`], which only a host
    /// crediting more than it can represent could cause.
    pub fn custody_of(
        &self,
        kind: AssetKind,
        asset_contract: Address,
        asset_id: TokenId,
    ) -> Option<Amount> {
        self.records
            .iter()
            .filter(|record| record.is_pending() && record.holds(kind, asset_contract, asset_id))
            .try_fold(0, |total: Amount, record| total.checked_add(record.amount))
    }

    /// SHA-256 commitment over every record in id order.
    ///
    /// Each record contributes
    /// `id ‖ kind tag ‖ contract ‖ recipient ‖ asset id ‖ amount ‖ withdrawn`
    /// with integers big-endian.
    pub fn audit_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for (id, record) in self.records() {
            hasher.update(id.value().to_be_bytes());
            hasher.update([record.kind.tag()]);
            hasher.update(record.asset_contract.as_bytes());
            hasher.update(record.recipient.as_bytes());
            hasher.update(record.asset_id.to_be_bytes());
            hasher.update(record.amount.to_be_bytes());
            hasher.update([u8::from(record.withdrawn)]);
        }
        hasher.finalize().into()
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    fn index_of(&self, id: RecordId) -> Option<usize> {
        usize::try_from(id.value())
            .ok()
            .filter(|index| *index < self.records.len())
    }
}

impl Reenter for EscrowLedger {
    fn reenter_withdraw(
        &mut self,
        host: &mut dyn AssetHost,
        caller: Address,
        id: RecordId,
    ) -> Result<(), EscrowError> {
        self.withdraw(host, caller, id)
    }
}

fn validate_deposit(
    custody: Address,
    ctx: &CallContext,
    request: &DepositRequest,
) -> Result<(), EscrowError> {
    // Paying custody to itself moves nothing, so such a record could never release.
    if request.recipient.is_zero() || request.recipient == custody {
        return Err(EscrowError::InvalidRecipient);
    }

    if request.kind.requires_amount() && request.amount == 0 {
        return Err(AmountViolation::Zero.into());
    }

    match request.kind {
        AssetKind::NativeCurrency if ctx.attached != request.amount => {
            Err(AmountViolation::PaymentMismatch {
                expected: request.amount,
                attached: ctx.attached,
            }
            .into())
        }
        AssetKind::NativeCurrency => Ok(()),
        _ if ctx.attached != 0 => Err(AmountViolation::UnexpectedPayment {
            attached: ctx.attached,
        }
        .into()),
        _ => Ok(()),
    }
}
