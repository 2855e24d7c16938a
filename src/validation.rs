//! Validation Helpers
//!
//! Centralized validation utilities for the custody core.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use custodian_core::{check, CustodyError};
//!
//! check!(amount > 0, CustodyError::InvalidAddress { reason: "..." });
//! ```

use crate::errors::{CustodyError, CustodyResult};
use crate::types::{is_zero_address, Address};

/// Check a condition and return an error if it fails.
///
/// Combines the condition check and the early error return in a single
/// expression, keeping operation bodies flat.
#[macro_export]
macro_rules! check {
    ($condition:expr, $error:expr) => {
        if !($condition) {
            return Err($error);
        }
    };
}

/// Rejects the null identity.
pub fn require_non_zero_address(address: &Address, reason: &'static str) -> CustodyResult<()> {
    if is_zero_address(address) {
        return Err(CustodyError::InvalidAddress { reason });
    }
    Ok(())
}
