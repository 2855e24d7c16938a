//! Access Control Module
//!
//! Single-operator authorization for the custody core. Exactly one
//! privileged identity exists at a time; every state-mutating operation
//! checks it before doing any other work. Ownership moves in a single
//! operator-authorized step.

use crate::check;
use crate::errors::{CustodyError, CustodyResult};
use crate::events::CustodyEvent;
use crate::ledger::CustodyState;
use crate::types::Address;
use crate::validation::require_non_zero_address;

/// Gate an operation on the current operator.
///
/// Fails with `Unauthorized` when the caller is not the operator.
pub fn require_operator(operator: &Address, caller: &Address) -> CustodyResult<()> {
    check!(
        caller == operator,
        CustodyError::Unauthorized {
            expected: *operator,
            actual: *caller,
        }
    );
    Ok(())
}

/// Replace the operator.
///
/// Operator-only; the new operator must not be the null identity. The
/// replacement is a single atomic state write with no other side effects.
/// Repeating the call with the same target is safe.
pub fn transfer_ownership(
    state: &mut CustodyState,
    caller: Address,
    new_operator: Address,
) -> CustodyResult<()> {
    require_operator(&state.operator, &caller)?;
    require_non_zero_address(&new_operator, "new operator is the null identity")?;

    let old = state.operator;
    state.operator = new_operator;

    state.events.emit(CustodyEvent::OwnershipTransferred {
        old,
        new: new_operator,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::types::{derive_address, ZERO_ADDRESS};

    fn operator() -> Address {
        derive_address(b"operator")
    }

    fn successor() -> Address {
        derive_address(b"successor")
    }

    fn fresh_state() -> CustodyState {
        CustodyState::new(derive_address(b"custody-instance"), operator())
    }

    #[test]
    fn test_require_operator() {
        assert!(require_operator(&operator(), &operator()).is_ok());

        let err = require_operator(&operator(), &successor()).unwrap_err();
        assert_eq!(
            err,
            CustodyError::Unauthorized {
                expected: operator(),
                actual: successor(),
            }
        );
    }

    #[test]
    fn test_transfer_ownership() {
        let mut state = fresh_state();

        transfer_ownership(&mut state, operator(), successor()).unwrap();
        assert_eq!(state.operator, successor());
        assert_eq!(state.events.filter_by_type(EventType::OwnershipTransferred).len(), 1);

        // The old operator lost its authority
        let result = transfer_ownership(&mut state, operator(), operator());
        assert!(matches!(result, Err(CustodyError::Unauthorized { .. })));

        // The new operator can transfer onward, and repeating is safe
        transfer_ownership(&mut state, successor(), successor()).unwrap();
        assert_eq!(state.operator, successor());
    }

    #[test]
    fn test_transfer_ownership_to_null_rejected() {
        let mut state = fresh_state();

        let result = transfer_ownership(&mut state, operator(), ZERO_ADDRESS);
        assert!(matches!(result, Err(CustodyError::InvalidAddress { .. })));
        assert_eq!(state.operator, operator());
    }

    #[test]
    fn test_transfer_ownership_unauthorized() {
        let mut state = fresh_state();

        let result = transfer_ownership(&mut state, successor(), successor());
        assert!(matches!(result, Err(CustodyError::Unauthorized { .. })));
        assert_eq!(state.operator, operator());
    }
}
