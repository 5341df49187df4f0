//! Deposit record identifiers
//!
//! Identifiers are dense sequence numbers: the first record is 0 and each
//! successful deposit takes the next value. They are never reused.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a deposit record held by the ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// The first identifier a fresh ledger assigns
    pub const FIRST: RecordId = RecordId(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_sequence() {
        let first = RecordId::FIRST;
        assert_eq!(first.value(), 0);
        assert_eq!(first, RecordId::default());
        assert!(first < RecordId::new(1));
    }

    #[test]
    fn test_record_id_serialization() {
        let id = RecordId::new(12);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "12");

        let deserialized: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
