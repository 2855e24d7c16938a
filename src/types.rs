//! Core Types for the Custody Core

use sha2::{Digest, Sha256};

/// Type alias for addresses (32-byte hash)
pub type Address = [u8; 32];

/// The null identity. Used as the unset savings destination and rejected
/// wherever a real identity is required.
pub const ZERO_ADDRESS: Address = [0u8; 32];

/// Returns true if the address is the null identity
pub fn is_zero_address(address: &Address) -> bool {
    *address == ZERO_ADDRESS
}

/// Derives a deterministic 32-byte address from an arbitrary seed.
///
/// Used by host integrations and tests to mint stable identities for
/// accounts, pools, and token representations.
pub fn derive_address(seed: &[u8]) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.finalize().into()
}
