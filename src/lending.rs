//! Lending Pool Connector Module
//!
//! Wraps the external yield-bearing lending protocol behind pre-approval
//! bookkeeping. The protocol is consumed through two operations only:
//! deposit asset for pool shares, and redeem pool shares for underlying
//! asset. Share accounting is entirely the external protocol's
//! responsibility; nothing is recorded locally on success beyond the
//! notification events.

use crate::access_control::require_operator;
use crate::check;
use crate::constants::pool;
use crate::emergency::require_running;
use crate::errors::{CustodyError, CustodyResult};
use crate::events::CustodyEvent;
use crate::ledger::CustodyState;
use crate::types::{Address, ZERO_ADDRESS};

// ============================================================================
// Capability Interfaces
// ============================================================================

/// The external lending protocol's entry points.
pub trait LendingPool {
    /// Deposit `amount` of native asset for pool shares.
    ///
    /// Failure must propagate as an abort; there is no return value on
    /// success.
    fn mint(&mut self, amount: u64) -> CustodyResult<()>;

    /// Redeem pool shares for `amount` of underlying asset.
    ///
    /// Returns a status code; [`pool::STATUS_OK`] indicates success.
    fn redeem_underlying(&mut self, amount: u64) -> u64;
}

/// ERC20-style surface of the pool's token representation, used for
/// allowance bookkeeping.
pub trait PoolToken {
    /// Current allowance granted by `owner` to `spender`
    fn allowance(&self, owner: &Address, spender: &Address) -> u64;

    /// Grant `spender` an allowance of `amount`; returns false on rejection
    fn approve(&mut self, spender: Address, amount: u64) -> bool;
}

// ============================================================================
// State
// ============================================================================

/// Identities of the lending pool counterparty and its token representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConnector {
    /// The asset's token identity on the pool surface
    pub asset: Address,
    /// The lending pool counterparty
    pub pool: Address,
}

impl PoolConnector {
    /// Create a connector for a configured pool
    pub fn new(asset: Address, pool: Address) -> Self {
        Self { asset, pool }
    }

    /// An unconfigured connector
    pub fn unset() -> Self {
        Self {
            asset: ZERO_ADDRESS,
            pool: ZERO_ADDRESS,
        }
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Raise the allowance to the maximum sentinel if the current one is
/// insufficient for `required`.
///
/// Idempotent: no effect when the allowance already covers the request, so
/// repeated operations do not stack approval calls.
pub fn approve_if_needed(
    token: &mut dyn PoolToken,
    owner: &Address,
    spender: &Address,
    required: u64,
) -> CustodyResult<()> {
    if token.allowance(owner, spender) >= required {
        return Ok(());
    }

    check!(
        token.approve(*spender, pool::MAX_ALLOWANCE),
        CustodyError::PoolOperationFailed {
            status: pool::STATUS_APPROVE_REJECTED,
        }
    );
    Ok(())
}

/// Route `amount` of idle native asset into the lending pool.
///
/// Operator-only, requires Normal state. On success nothing is recorded
/// locally — share accounting belongs to the pool — and a `PoolDeposit`
/// notification is emitted.
pub fn deposit_to_pool(
    state: &mut CustodyState,
    pool_impl: &mut dyn LendingPool,
    caller: Address,
    amount: u64,
) -> CustodyResult<()> {
    require_operator(&state.operator, &caller)?;
    require_running(state.stopped)?;

    pool_impl.mint(amount)?;

    state.events.emit(CustodyEvent::PoolDeposit {
        asset: state.connector.asset,
        pool: state.connector.pool,
        amount,
        initiator: caller,
    });
    Ok(())
}

/// Redeem `amount` of underlying asset from the lending pool.
///
/// Operator-only, requires Normal state. Ensures the pool's allowance via
/// [`approve_if_needed`], then calls the redeem entry point; a nonzero
/// status aborts with `PoolOperationFailed`.
pub fn redeem_from_pool(
    state: &mut CustodyState,
    token: &mut dyn PoolToken,
    pool_impl: &mut dyn LendingPool,
    caller: Address,
    amount: u64,
) -> CustodyResult<()> {
    require_operator(&state.operator, &caller)?;
    require_running(state.stopped)?;

    let account = state.account;
    let counterparty = state.connector.pool;
    approve_if_needed(token, &account, &counterparty, amount)?;

    let status = pool_impl.redeem_underlying(amount);
    check!(
        status == pool::STATUS_OK,
        CustodyError::PoolOperationFailed { status }
    );

    state.events.emit(CustodyEvent::PoolRedeem {
        asset: state.connector.asset,
        pool: state.connector.pool,
        amount,
        initiator: caller,
    });
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
