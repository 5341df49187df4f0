//! Simulated execution environment
//!
//! Reference asset contracts and a call harness for exercising the ledger
//! without a real chain. [`Chain`] gives each top-level call the all-or-nothing
//! behaviour a real execution environment provides: if the call fails, both
//! the ledger and every asset contract return to their state before the call.

mod hooks;
mod host;

pub use hooks::{Receipt, ReceiveHook, ReenterWithdraw, ReentryLog, Refuse};
pub use host::{SimCheckpoint, SimHost};

use escrow_types::address::Address;
use escrow_types::ids::RecordId;

use crate::config::LedgerConfig;
use crate::errors::EscrowError;
use crate::ledger::EscrowLedger;
use crate::record::{CallContext, DepositRequest};

/// A ledger deployed into a [`SimHost`].
pub struct Chain {
    pub ledger: EscrowLedger,
    pub host: SimHost,
}

impl Chain {
    /// Deploy an empty ledger with custody at `ledger_address`.
    pub fn new(ledger_address: Address) -> Self {
        Self::with_config(ledger_address, LedgerConfig::default())
    }

    pub fn with_config(ledger_address: Address, config: LedgerConfig) -> Self {
        Self {
            ledger: EscrowLedger::with_config(ledger_address, config),
            host: SimHost::new(),
        }
    }

    pub fn deposit(
        &mut self,
        ctx: CallContext,
        request: DepositRequest,
    ) -> Result<RecordId, EscrowError> {
        self.atomically(|ledger, host| ledger.deposit(host, ctx, request))
    }

    pub fn withdraw(&mut self, caller: Address, id: RecordId) -> Result<(), EscrowError> {
        self.atomically(|ledger, host| ledger.withdraw(host, caller, id))
    }

    /// Run one top-level call, restoring everything if it fails.
    fn atomically<T>(
        &mut self,
        call: impl FnOnce(&mut EscrowLedger, &mut SimHost) -> Result<T, EscrowError>,
    ) -> Result<T, EscrowError> {
        let ledger = self.ledger.clone();
        let host = self.host.checkpoint();

        let result = call(&mut self.ledger, &mut self.host);
        if result.is_err() {
            self.ledger = ledger;
            self.host.restore(host);
        }
        result
    }
}
