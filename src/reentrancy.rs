//! Reentrancy Fence
//!
//! A single global fence for the whole instance. A guarded operation calls
//! [`ReentrancyFence::enter`] before doing any work and releases with
//! [`ReentrancyFence::exit`] on every path out, fault paths included. While
//! an operation is in flight, any nested `enter` — typically an external
//! transfer calling synchronously back into the core — fails immediately
//! with `ReentrantCall`, leaving the outer operation's state untouched.
//!
//! Guarded operations must not call each other, directly or through a
//! re-entering external call; shared logic belongs in unguarded internal
//! helpers.

use crate::errors::{CustodyError, CustodyResult};

/// Proof of a successful fence entry.
///
/// Single-use: `exit` consumes it, so a guarded operation cannot release
/// the fence twice.
#[derive(Debug)]
#[must_use = "the fence stays engaged until the ticket is passed to exit()"]
pub struct FenceTicket {
    sequence: u64,
}

/// Call-depth fence over the custody instance
#[derive(Debug, Clone, Default)]
pub struct ReentrancyFence {
    /// Total successful entries, monotonically incrementing
    sequence: u64,
    /// Whether a guarded operation is currently in flight
    in_flight: bool,
}

impl ReentrancyFence {
    /// Create a disengaged fence
    pub fn new() -> Self {
        Self::default()
    }

    /// Engage the fence.
    ///
    /// Fails with `ReentrantCall` if a guarded operation is already in
    /// flight anywhere in the instance.
    pub fn enter(&mut self) -> CustodyResult<FenceTicket> {
        if self.in_flight {
            return Err(CustodyError::ReentrantCall);
        }

        self.in_flight = true;
        self.sequence += 1;
        Ok(FenceTicket {
            sequence: self.sequence,
        })
    }

    /// Release the fence.
    ///
    /// Consumes the ticket from the matching `enter`. Release is
    /// unconditional so that fault paths can always disengage.
    pub fn exit(&mut self, ticket: FenceTicket) {
        debug_assert_eq!(ticket.sequence, self.sequence);
        self.in_flight = false;
    }

    /// Returns true while a guarded operation is in flight
    pub fn is_engaged(&self) -> bool {
        self.in_flight
    }

    /// Total number of successful entries so far
    pub fn entries(&self) -> u64 {
        self.sequence
    }
}
