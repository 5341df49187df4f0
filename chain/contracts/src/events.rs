//! Ledger events
//!
//! Events are immutable records emitted by successful ledger operations.
//! A rejected call emits nothing.

use escrow_types::address::Address;
use escrow_types::asset::AssetKind;
use escrow_types::ids::RecordId;
use escrow_types::numeric::{Amount, TokenId};
use serde::{Deserialize, Serialize};

/// An asset was pulled into custody and a record created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub id: RecordId,
    pub kind: AssetKind,
    pub asset_contract: Address,
    pub depositor: Address,
    pub recipient: Address,
    pub asset_id: TokenId,
    pub amount: Amount,
}

/// A record was released to its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub id: RecordId,
    pub kind: AssetKind,
    /// Whoever triggered the release; not necessarily the recipient
    pub caller: Address,
    pub recipient: Address,
    pub asset_id: TokenId,
    pub amount: Amount,
}

/// Enum wrapper for all ledger events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    Deposited(Deposited),
    Withdrawn(Withdrawn),
}

impl LedgerEvent {
    pub fn record_id(&self) -> RecordId {
        match self {
            LedgerEvent::Deposited(e) => e.id,
            LedgerEvent::Withdrawn(e) => e.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposited_serialization() {
        let event = Deposited {
            id: RecordId::new(0),
            kind: AssetKind::MultiToken,
            asset_contract: Address::from_low_u64(0x1000),
            depositor: Address::from_low_u64(1),
            recipient: Address::from_low_u64(2),
            asset_id: 1,
            amount: 5,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("MULTI_TOKEN"));

        let deser: Deposited = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_event_record_id() {
        let event = LedgerEvent::Withdrawn(Withdrawn {
            id: RecordId::new(4),
            kind: AssetKind::NativeCurrency,
            caller: Address::from_low_u64(9),
            recipient: Address::from_low_u64(2),
            asset_id: 0,
            amount: 5,
        });
        assert_eq!(event.record_id(), RecordId::new(4));
        assert!(matches!(event, LedgerEvent::Withdrawn(_)));
    }
}
