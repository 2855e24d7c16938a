//! Error Types for the Custody Core
//!
//! Typed errors for every fault the core can signal. Each error carries
//! enough context for the caller to decide whether to retry, reconfigure,
//! or escalate to the operator. No fault is ever swallowed: any error
//! aborts the enclosing operation and discards its tentative state changes.

use crate::types::Address;

/// Result type alias for custody operations
pub type CustodyResult<T> = Result<T, CustodyError>;

/// Main error enum for all custody core faults
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustodyError {
    // ============ Authorization Errors ============
    /// Caller is not the current operator
    Unauthorized { expected: Address, actual: Address },

    /// Null/zero address where a real identity is required
    InvalidAddress {
        /// Description of why the address is invalid
        reason: &'static str,
    },

    // ============ Arithmetic Errors ============
    /// Arithmetic overflow occurred
    Overflow,

    /// Arithmetic underflow occurred
    Underflow,

    /// Division or modulo by zero
    DivisionByZero,

    // ============ Ledger Errors ============
    /// Ledger balance below required gross + reserve
    InsufficientFunds { available: u64, required: u64 },

    /// A guarded operation was invoked while another was in flight
    ReentrantCall,

    /// An external asset transfer did not succeed
    TransferFailed { to: Address, amount: u64 },

    // ============ Lending Pool Errors ============
    /// The external lending protocol signaled failure
    PoolOperationFailed { status: u64 },

    // ============ State Errors ============
    /// Circuit breaker in the wrong position for the requested operation
    WrongOperationalState {
        /// The breaker position that was found
        stopped: bool,
    },
}

impl CustodyError {
    /// Returns a stable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "E010_UNAUTHORIZED",
            Self::InvalidAddress { .. } => "E011_INVALID_ADDRESS",
            Self::Overflow => "E020_OVERFLOW",
            Self::Underflow => "E021_UNDERFLOW",
            Self::DivisionByZero => "E022_DIV_ZERO",
            Self::InsufficientFunds { .. } => "E030_INSUFFICIENT_FUNDS",
            Self::ReentrantCall => "E031_REENTRANT_CALL",
            Self::TransferFailed { .. } => "E032_TRANSFER_FAILED",
            Self::PoolOperationFailed { .. } => "E040_POOL_OP_FAILED",
            Self::WrongOperationalState { .. } => "E050_WRONG_STATE",
        }
    }

    /// Returns true if this is an arithmetic fault
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Overflow | Self::Underflow | Self::DivisionByZero)
    }

    /// Returns true if this error is recoverable (caller can fix it and resubmit)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InsufficientFunds { .. } => true, // Deposit more funds
            Self::WrongOperationalState { .. } => true, // Wait for the breaker
            Self::ReentrantCall => true,            // Resubmit as a top-level call
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_error_codes_unique() {
        let errors = [
            CustodyError::Unauthorized {
                expected: [1u8; 32],
                actual: [2u8; 32],
            },
            CustodyError::InvalidAddress { reason: "zero" },
            CustodyError::Overflow,
            CustodyError::Underflow,
            CustodyError::DivisionByZero,
            CustodyError::InsufficientFunds {
                available: 0,
                required: 1,
            },
            CustodyError::ReentrantCall,
            CustodyError::TransferFailed {
                to: [3u8; 32],
                amount: 5,
            },
            CustodyError::PoolOperationFailed { status: 1 },
            CustodyError::WrongOperationalState { stopped: true },
        ];

        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        let unique: BTreeSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len(), "Error codes must be unique");
    }

    #[test]
    fn test_arithmetic_classification() {
        assert!(CustodyError::Overflow.is_arithmetic());
        assert!(CustodyError::Underflow.is_arithmetic());
        assert!(CustodyError::DivisionByZero.is_arithmetic());
        assert!(!CustodyError::ReentrantCall.is_arithmetic());
    }

    #[test]
    fn test_recoverable() {
        assert!(CustodyError::InsufficientFunds {
            available: 0,
            required: 1
        }
        .is_recoverable());
        assert!(!CustodyError::Overflow.is_recoverable());
    }
}
