//! Receive hooks: code a receiving address runs when an asset lands
//!
//! Hooks model everything a receiver controls during a transfer to it:
//! refusing native payment, rejecting unsolicited tokens, or calling back
//! into the ledger. Outbound payments run the recipient's hook; safe-transfer
//! deposits of non-fungible and multi-tokens run the hook on the custody
//! address.

use escrow_types::address::Address;
use escrow_types::asset::AssetKind;
use escrow_types::ids::RecordId;
use escrow_types::numeric::{Amount, TokenId};
use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::EscrowError;
use crate::host::{AssetHost, Reenter};

/// What just arrived at the hooked address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub kind: AssetKind,
    /// Zero for native currency
    pub contract: Address,
    pub from: Address,
    pub to: Address,
    pub asset_id: TokenId,
    pub amount: Amount,
}

/// Hook run after an asset is credited to the address it is registered for.
///
/// Returning `Err(reason)` rejects the transfer; the host then undoes it and
/// reports [`TransferError::Rejected`](escrow_types::errors::TransferError::Rejected).
pub trait ReceiveHook {
    fn on_receive(
        &mut self,
        ledger: &mut dyn Reenter,
        host: &mut dyn AssetHost,
        receipt: &Receipt,
    ) -> Result<(), String>;
}

/// Refuses every incoming transfer of the given kind.
#[derive(Debug, Clone, Copy)]
pub struct Refuse {
    pub kind: AssetKind,
}

impl ReceiveHook for Refuse {
    fn on_receive(
        &mut self,
        _ledger: &mut dyn Reenter,
        _host: &mut dyn AssetHost,
        receipt: &Receipt,
    ) -> Result<(), String> {
        if receipt.kind == self.kind {
            return Err(format!("{} refuses {} transfers", receipt.to, receipt.kind));
        }
        Ok(())
    }
}

/// Outcomes of the withdrawals a [`ReenterWithdraw`] hook attempted.
pub type ReentryLog = Rc<RefCell<Vec<Result<(), EscrowError>>>>;

/// Calls back into `withdraw(target)` the first time anything arrives.
///
/// The nested outcome is appended to the shared log. The hook accepts the
/// outer transfer whatever the nested call returned.
#[derive(Debug)]
pub struct ReenterWithdraw {
    target: RecordId,
    fired: bool,
    log: ReentryLog,
}

impl ReenterWithdraw {
    pub fn new(target: RecordId) -> (Self, ReentryLog) {
        let log = ReentryLog::default();
        let hook = Self {
            target,
            fired: false,
            log: Rc::clone(&log),
        };
        (hook, log)
    }
}

impl ReceiveHook for ReenterWithdraw {
    fn on_receive(
        &mut self,
        ledger: &mut dyn Reenter,
        host: &mut dyn AssetHost,
        receipt: &Receipt,
    ) -> Result<(), String> {
        if self.fired {
            return Ok(());
        }
        self.fired = true;

        let outcome = ledger.reenter_withdraw(host, receipt.to, self.target);
        self.log.borrow_mut().push(outcome);
        Ok(())
    }
}
