//! Emergency Module
//!
//! The circuit breaker and its escape hatch. The breaker is a single
//! boolean flag with no automatic triggers: flipping it is always a manual
//! operator decision. Normal operations require it clear; the emergency
//! withdrawal requires it set and is the one operation allowed to diverge
//! from ledger bookkeeping.

use crate::access_control::require_operator;
use crate::check;
use crate::errors::{CustodyError, CustodyResult};
use crate::events::CustodyEvent;
use crate::ledger::{AssetTransfer, CustodyState};
use crate::types::Address;

/// Guard: only when the breaker is clear.
pub fn require_running(stopped: bool) -> CustodyResult<()> {
    check!(!stopped, CustodyError::WrongOperationalState { stopped });
    Ok(())
}

/// Guard: only when the breaker is set.
pub fn require_halted(stopped: bool) -> CustodyResult<()> {
    check!(stopped, CustodyError::WrongOperationalState { stopped });
    Ok(())
}

/// Flip the circuit breaker.
///
/// Operator-only, unconditional on the current position. Returns the new
/// position.
pub fn toggle_halt(state: &mut CustodyState, caller: Address) -> CustodyResult<bool> {
    require_operator(&state.operator, &caller)?;

    state.stopped = !state.stopped;

    state.events.emit(CustodyEvent::HaltToggled {
        stopped: state.stopped,
        by: caller,
    });
    Ok(state.stopped)
}

/// Evacuate the entire real external balance to the operator.
///
/// Operator-only, requires Halted. Transfers what the host actually holds,
/// not the internal ledger figure, and leaves `ledger_balance` untouched.
/// The escape hatch for abnormal situations; its accounting divergence is
/// intentional. Returns the evacuated amount.
pub fn emergency_withdraw(
    state: &mut CustodyState,
    bank: &mut dyn AssetTransfer,
    caller: Address,
) -> CustodyResult<u64> {
    require_operator(&state.operator, &caller)?;
    require_halted(state.stopped)?;

    let amount = bank.balance();
    let operator = state.operator;
    bank.transfer(state, operator, amount)?;

    state.events.emit(CustodyEvent::EmergencyWithdrawal {
        to: operator,
        amount,
    });
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::asset::ONE;
    use crate::events::EventType;
    use crate::ledger::deposit;
    use crate::types::derive_address;

    fn operator() -> Address {
        derive_address(b"operator")
    }

    fn outsider() -> Address {
        derive_address(b"outsider")
    }

    fn fresh_state() -> CustodyState {
        CustodyState::new(derive_address(b"custody-instance"), operator())
    }

    struct MockBank {
        held: u64,
        transfers: Vec<(Address, u64)>,
    }

    impl MockBank {
        fn with_held(held: u64) -> Self {
            Self {
                held,
                transfers: Vec::new(),
            }
        }
    }

    impl AssetTransfer for MockBank {
        fn transfer(
            &mut self,
            _state: &mut CustodyState,
            to: Address,
            amount: u64,
        ) -> CustodyResult<()> {
            self.held = self.held.saturating_sub(amount);
            self.transfers.push((to, amount));
            Ok(())
        }

        fn balance(&self) -> u64 {
            self.held
        }
    }

    #[test]
    fn test_guards() {
        assert!(require_running(false).is_ok());
        assert_eq!(
            require_running(true),
            Err(CustodyError::WrongOperationalState { stopped: true })
        );

        assert!(require_halted(true).is_ok());
        assert_eq!(
            require_halted(false),
            Err(CustodyError::WrongOperationalState { stopped: false })
        );
    }

    #[test]
    fn test_toggle_halt() {
        let mut state = fresh_state();

        assert!(toggle_halt(&mut state, operator()).unwrap());
        assert!(state.stopped);

        assert!(!toggle_halt(&mut state, operator()).unwrap());
        assert!(!state.stopped);

        assert_eq!(state.events.filter_by_type(EventType::HaltToggled).len(), 2);
    }

    #[test]
    fn test_toggle_halt_unauthorized() {
        let mut state = fresh_state();

        let result = toggle_halt(&mut state, outsider());
        assert!(matches!(result, Err(CustodyError::Unauthorized { .. })));
        assert!(!state.stopped);
    }

    #[test]
    fn test_emergency_withdraw_requires_halt() {
        let mut state = fresh_state();
        let mut bank = MockBank::with_held(10 * ONE);

        let result = emergency_withdraw(&mut state, &mut bank, operator());
        assert_eq!(
            result,
            Err(CustodyError::WrongOperationalState { stopped: false })
        );
        assert!(bank.transfers.is_empty());
    }

    #[test]
    fn test_emergency_withdraw_unauthorized() {
        let mut state = fresh_state();
        state.stopped = true;
        let mut bank = MockBank::with_held(10 * ONE);

        let result = emergency_withdraw(&mut state, &mut bank, outsider());
        assert!(matches!(result, Err(CustodyError::Unauthorized { .. })));
    }

    #[test]
    fn test_emergency_withdraw_takes_real_balance() {
        let mut state = fresh_state();
        // Internal ledger says 3 units, the host actually holds 10
        deposit(&mut state, outsider(), 3 * ONE).unwrap();
        state.stopped = true;
        let mut bank = MockBank::with_held(10 * ONE);

        let amount = emergency_withdraw(&mut state, &mut bank, operator()).unwrap();

        assert_eq!(amount, 10 * ONE);
        assert_eq!(bank.transfers, vec![(operator(), 10 * ONE)]);
        assert_eq!(bank.balance(), 0);
        // Ledger bookkeeping is deliberately bypassed
        assert_eq!(state.ledger_balance, 3 * ONE);
    }
}
