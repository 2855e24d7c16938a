//! Custody Ledger Module
//!
//! The core of the crate: a pooled-custody ledger over a single native
//! asset, driven by one owned [`CustodyState`]. Deposits are unrestricted
//! and append-only; payouts are operator-authorized, fence-guarded,
//! breaker-checked, and atomically split into a recipient transfer plus a
//! savings sweep.
//!
//! ## Key Features
//!
//! - **Pooled Custody**: one internal balance, no per-user entries
//! - **Open Deposits**: explicit deposit and catch-all receipt paths with
//!   identical accounting
//! - **Guarded Payouts**: checks-effects-interactions with a global fence
//! - **Savings Sweep**: the side-amount settles before the recipient
//! - **No Partial State**: a failed operation leaves the ledger as it was

use crate::access_control::require_operator;
use crate::check;
use crate::constants::limits;
use crate::emergency::require_running;
use crate::errors::{CustodyError, CustodyResult};
use crate::events::{CustodyEvent, EventLog};
use crate::lending::PoolConnector;
use crate::math;
use crate::reentrancy::ReentrancyFence;
use crate::types::{is_zero_address, Address, ZERO_ADDRESS};

// ============================================================================
// Capability Interfaces
// ============================================================================

/// Outbound native-asset transfer capability.
///
/// Implemented by the host environment that actually moves asset units.
/// The ledger state is threaded through `transfer` because the call is
/// synchronous and externally controlled: a counterparty can invoke back
/// into the core before the transfer returns. Fault-injecting test doubles
/// use exactly that path to attempt re-entry.
///
/// A transfer that does not succeed must be reported as an error, never as
/// a silent no-op. Real transfers applied inside an operation that
/// ultimately fails are unwound by the host's transaction rollback.
pub trait AssetTransfer {
    /// Transfer `amount` base units to `to`
    fn transfer(
        &mut self,
        state: &mut CustodyState,
        to: Address,
        amount: u64,
    ) -> CustodyResult<()>;

    /// Real asset units currently held for the custody instance.
    ///
    /// This is the external balance, independent of the internal ledger
    /// figure.
    fn balance(&self) -> u64;
}

// ============================================================================
// State
// ============================================================================

/// The singleton state of one custody instance.
///
/// Constructed fresh per deployment (or per test); every operation takes it
/// by reference. No hidden statics.
#[derive(Debug, Clone)]
pub struct CustodyState {
    /// The instance's own address, used as the owner side of pool-token
    /// allowances
    pub account: Address,
    /// The single privileged operator
    pub operator: Address,
    /// Destination for swept side-amounts; may be unset (zero)
    pub savings_destination: Address,
    /// Internal accounting balance: net inflows minus net outflows recorded
    /// through this instance's own operations. Deliberately never
    /// re-derived from the real external balance; funds routed to the
    /// lending pool widen the divergence and only the emergency path reads
    /// the real figure.
    pub ledger_balance: u64,
    /// Circuit breaker position: false = normal, true = halted
    pub stopped: bool,
    /// Global reentrancy fence for guarded operations
    pub fence: ReentrancyFence,
    /// Lending pool counterparty identities
    pub connector: PoolConnector,
    /// Collected fire-and-forget events
    pub events: EventLog,
}

impl CustodyState {
    /// Create a fresh instance; the deployer becomes the operator.
    pub fn new(account: Address, operator: Address) -> Self {
        Self {
            account,
            operator,
            savings_destination: ZERO_ADDRESS,
            ledger_balance: 0,
            stopped: false,
            fence: ReentrancyFence::new(),
            connector: PoolConnector::unset(),
            events: EventLog::new(),
        }
    }

    /// Attach lending pool counterparty identities.
    pub fn with_connector(mut self, connector: PoolConnector) -> Self {
        self.connector = connector;
        self
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Credit a deposit to the ledger.
///
/// Unrestricted: any external party may deposit, in Normal or Halted state.
/// The only failure path is the checked balance increment.
pub fn deposit(state: &mut CustodyState, from: Address, amount: u64) -> CustodyResult<()> {
    state.ledger_balance = math::safe_add(state.ledger_balance, amount)?;

    state.events.emit(CustodyEvent::Deposited {
        from,
        amount,
        new_balance: state.ledger_balance,
    });
    Ok(())
}

/// Catch-all receipt path for direct transfers to the instance's address.
///
/// Identical accounting effect to [`deposit`].
pub fn receive(state: &mut CustodyState, from: Address, amount: u64) -> CustodyResult<()> {
    deposit(state, from, amount)
}

/// Replace the savings destination.
///
/// Operator-only. The destination is replaced unconditionally; setting it
/// to zero is permitted (source behavior) and leaves payouts failing until
/// a real destination is configured.
pub fn set_savings_destination(
    state: &mut CustodyState,
    caller: Address,
    destination: Address,
) -> CustodyResult<()> {
    require_operator(&state.operator, &caller)?;

    let old = state.savings_destination;
    state.savings_destination = destination;

    state.events.emit(CustodyEvent::SavingsDestinationChanged {
        old,
        new: destination,
    });
    Ok(())
}

/// Execute an operator-authorized payout with savings sweep.
///
/// Requires Normal state and the reentrancy fence. In order: the gross
/// (`amount + side_amount`) is computed with overflow checks, the ledger
/// must strictly exceed gross plus [`limits::RESERVE`], the ledger is
/// decremented, then `side_amount` is swept to the savings destination and
/// `amount` transferred to `to`. The sweep settles first, so a recipient
/// that rejects receipt cannot skip it.
///
/// Any failure discards the operation's ledger changes. A recipient calling
/// back into `payout` mid-transfer fails at the fence; the balance has
/// already been decremented, so no double spend is possible either way.
pub fn payout(
    state: &mut CustodyState,
    bank: &mut dyn AssetTransfer,
    caller: Address,
    to: Address,
    amount: u64,
    side_amount: u64,
) -> CustodyResult<()> {
    // Fence first, then breaker, then authority
    let ticket = state.fence.enter()?;
    let result = payout_guarded(state, bank, caller, to, amount, side_amount);
    // Release on every path out, fault paths included
    state.fence.exit(ticket);
    result
}

fn payout_guarded(
    state: &mut CustodyState,
    bank: &mut dyn AssetTransfer,
    caller: Address,
    to: Address,
    amount: u64,
    side_amount: u64,
) -> CustodyResult<()> {
    require_running(state.stopped)?;
    require_operator(&state.operator, &caller)?;
    payout_inner(state, bank, to, amount, side_amount)
}

fn payout_inner(
    state: &mut CustodyState,
    bank: &mut dyn AssetTransfer,
    to: Address,
    amount: u64,
    side_amount: u64,
) -> CustodyResult<()> {
    let gross = math::safe_add(amount, side_amount)?;
    let required = math::safe_add(gross, limits::RESERVE)?;

    check!(
        state.ledger_balance > required,
        CustodyError::InsufficientFunds {
            available: state.ledger_balance,
            required,
        }
    );

    // Decrement before the external calls; the check above guarantees the
    // subtraction holds but it stays checked regardless.
    state.ledger_balance = math::safe_sub(state.ledger_balance, gross)?;

    let savings = state.savings_destination;
    if let Err(err) = sweep_and_pay(state, bank, to, amount, savings, side_amount) {
        // Compensating credit: undo this operation's decrement only, so a
        // deposit that landed during the external call survives.
        state.ledger_balance = state.ledger_balance.saturating_add(gross);
        return Err(err);
    }

    let new_balance = state.ledger_balance;
    state.events.emit(CustodyEvent::PaidOut {
        to,
        amount,
        savings,
        side_amount,
        new_balance,
    });
    Ok(())
}

/// The two external transfers of a payout, sweep first.
fn sweep_and_pay(
    state: &mut CustodyState,
    bank: &mut dyn AssetTransfer,
    to: Address,
    amount: u64,
    savings: Address,
    side_amount: u64,
) -> CustodyResult<()> {
    check!(
        !is_zero_address(&savings),
        CustodyError::TransferFailed {
            to: savings,
            amount: side_amount,
        }
    );

    bank.transfer(state, savings, side_amount)?;
    bank.transfer(state, to, amount)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
