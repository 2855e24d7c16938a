//! Custody Events
//!
//! Fire-and-forget notifications emitted during execution. There is no
//! subscriber contract: events are collected into an [`EventLog`] owned by
//! the custody state and can be drained and indexed off-system for UIs,
//! analytics, and audit trails.

use crate::types::Address;
use crate::Vec;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Event types for indexing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    // Ledger Events (0x01 - 0x1F)
    Deposited = 0x01,
    PaidOut = 0x02,

    // Administrative Events (0x20 - 0x3F)
    SavingsDestinationChanged = 0x20,
    OwnershipTransferred = 0x21,

    // Emergency Events (0x40 - 0x5F)
    HaltToggled = 0x40,
    EmergencyWithdrawal = 0x41,

    // Lending Pool Events (0x60 - 0x7F)
    PoolDeposit = 0x60,
    PoolRedeem = 0x61,
}

/// Main event enum containing all custody core events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum CustodyEvent {
    // ============ Ledger Events ============

    /// Emitted when funds are credited to the ledger, whether through an
    /// explicit deposit or the catch-all receipt path
    Deposited {
        from: Address,
        amount: u64,
        new_balance: u64,
    },

    /// Emitted when a payout settles: `amount` to the recipient and
    /// `side_amount` swept to the savings destination
    PaidOut {
        to: Address,
        amount: u64,
        savings: Address,
        side_amount: u64,
        new_balance: u64,
    },

    // ============ Administrative Events ============

    /// Emitted when the savings destination is replaced
    SavingsDestinationChanged { old: Address, new: Address },

    /// Emitted when the operator is replaced
    OwnershipTransferred { old: Address, new: Address },

    // ============ Emergency Events ============

    /// Emitted when the circuit breaker is flipped
    HaltToggled { stopped: bool, by: Address },

    /// Emitted when the entire real balance is evacuated to the operator
    EmergencyWithdrawal { to: Address, amount: u64 },

    // ============ Lending Pool Events ============

    /// Emitted when native asset is deposited into the lending pool
    PoolDeposit {
        asset: Address,
        pool: Address,
        amount: u64,
        initiator: Address,
    },

    /// Emitted when pool shares are redeemed for underlying asset
    PoolRedeem {
        asset: Address,
        pool: Address,
        amount: u64,
        initiator: Address,
    },
}

impl CustodyEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Deposited { .. } => EventType::Deposited,
            Self::PaidOut { .. } => EventType::PaidOut,
            Self::SavingsDestinationChanged { .. } => EventType::SavingsDestinationChanged,
            Self::OwnershipTransferred { .. } => EventType::OwnershipTransferred,
            Self::HaltToggled { .. } => EventType::HaltToggled,
            Self::EmergencyWithdrawal { .. } => EventType::EmergencyWithdrawal,
            Self::PoolDeposit { .. } => EventType::PoolDeposit,
            Self::PoolRedeem { .. } => EventType::PoolRedeem,
        }
    }

    /// Serialize event to bytes for storage/transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Event log for collecting events during execution
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<CustodyEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (add to log)
    pub fn emit(&mut self, event: CustodyEvent) {
        self.events.push(event);
    }

    /// Get all events
    pub fn events(&self) -> &[CustodyEvent] {
        &self.events
    }

    /// Take ownership of all events
    pub fn into_events(self) -> Vec<CustodyEvent> {
        self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&CustodyEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
