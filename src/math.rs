//! Safe Arithmetic for the Custody Core
//!
//! Overflow/underflow-checked operations over `u64` plus 18-decimal
//! fixed-point (wad) multiply/divide with round-to-nearest. Every balance
//! computation in the crate goes through these helpers; nothing wraps or
//! truncates silently.

use crate::constants::precision;
use crate::errors::{CustodyError, CustodyResult};

/// Safe addition with overflow check
pub fn safe_add(a: u64, b: u64) -> CustodyResult<u64> {
    a.checked_add(b).ok_or(CustodyError::Overflow)
}

/// Safe subtraction with underflow check (strict variant)
pub fn safe_sub(a: u64, b: u64) -> CustodyResult<u64> {
    a.checked_sub(b).ok_or(CustodyError::Underflow)
}

/// Subtraction clamped to zero (non-strict variant).
///
/// For call sites where underflow must be absorbed rather than reported.
/// Never fails.
pub fn safe_sub_clamped(a: u64, b: u64) -> u64 {
    a.saturating_sub(b)
}

/// Safe multiplication with overflow check
pub fn safe_mul(a: u64, b: u64) -> CustodyResult<u64> {
    a.checked_mul(b).ok_or(CustodyError::Overflow)
}

/// Safe division with zero check
pub fn safe_div(a: u64, b: u64) -> CustodyResult<u64> {
    a.checked_div(b).ok_or(CustodyError::DivisionByZero)
}

/// Safe modulo with zero check
pub fn safe_mod(a: u64, b: u64) -> CustodyResult<u64> {
    a.checked_rem(b).ok_or(CustodyError::DivisionByZero)
}

/// Fixed-point multiply: round-to-nearest of `x * y / WAD`.
///
/// Intermediates are computed in `u128`; a result that does not fit `u64`
/// is an overflow.
pub fn wad_mul(x: u64, y: u64) -> CustodyResult<u64> {
    let product = (x as u128) * (y as u128);
    let rounded = (product + precision::HALF_WAD as u128) / precision::WAD as u128;

    if rounded > u64::MAX as u128 {
        return Err(CustodyError::Overflow);
    }
    Ok(rounded as u64)
}

/// Fixed-point divide: round-to-nearest of `x * WAD / y`.
pub fn wad_div(x: u64, y: u64) -> CustodyResult<u64> {
    if y == 0 {
        return Err(CustodyError::DivisionByZero);
    }

    let scaled = (x as u128) * (precision::WAD as u128) + (y as u128) / 2;
    let rounded = scaled / (y as u128);

    if rounded > u64::MAX as u128 {
        return Err(CustodyError::Overflow);
    }
    Ok(rounded as u64)
}
