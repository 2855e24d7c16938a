//! custodian-core
//!
//! Pooled-custody ledger for a single native asset. One privileged operator
//! disburses funds to third parties while a fixed side-amount of every payout
//! is swept into a savings destination; idle balance can be routed into an
//! external yield-bearing lending pool.
//!
//! The crate is the safety core around those flows:
//!
//! - **Safe Arithmetic**: checked add/sub/mul/div/mod plus 18-decimal
//!   fixed-point helpers
//! - **Access Control**: single operator, single-step ownership transfer
//! - **Reentrancy Fence**: one global in-flight fence across the instance
//! - **Circuit Breaker**: manual halt gating normal vs emergency operations
//! - **Custody Ledger**: deposit / payout / savings-sweep bookkeeping
//! - **Lending Connector**: pre-approval bookkeeping over an external pool
//!
//! All state lives in one owned [`CustodyState`](ledger::CustodyState); there
//! are no hidden statics. External collaborators (asset transfers, the
//! lending pool, its token representation) are injected capability traits so
//! tests can substitute hostile fakes.
//!
//! This crate is `no_std` compatible when built without the `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export Vec for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;
#[cfg(feature = "std")]
pub use std::vec::Vec;

pub mod constants;
pub mod errors;
pub mod types;
pub mod math;
pub mod validation;
pub mod events;
pub mod reentrancy;
pub mod access_control;
pub mod emergency;
pub mod ledger;
pub mod lending;


// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use types::*;
pub use math::*;
pub use events::*;
pub use reentrancy::*;
pub use access_control::*;
pub use emergency::*;
pub use ledger::*;
pub use lending::*;
