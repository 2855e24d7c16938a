//! Protocol Constants
//!
//! All magic numbers for the custody core in one place.

/// Native asset units
pub mod asset {
    /// Decimal places for the native asset
    pub const DECIMALS: u8 = 8;
    /// One unit with decimals (1 unit = 100_000_000 base units)
    pub const ONE: u64 = 100_000_000;
}

/// Fixed-point precision for ratio/yield style computation
pub mod precision {
    /// 18-decimal fixed-point scale (1.0 in wad)
    pub const WAD: u64 = 1_000_000_000_000_000_000;
    /// Half of [`WAD`], used for round-to-nearest
    pub const HALF_WAD: u64 = WAD / 2;
}

/// Ledger limits
pub mod limits {
    use super::asset::ONE;

    /// Minimum buffer left un-spent by every payout (0.02 units).
    /// A payout must leave strictly more than this behind.
    pub const RESERVE: u64 = 2 * ONE / 100;
}

/// Lending pool interface values
pub mod pool {
    /// Sentinel allowance granted when the current allowance is insufficient
    pub const MAX_ALLOWANCE: u64 = u64::MAX;

    /// Status returned by the pool's redeem entry point on success
    pub const STATUS_OK: u64 = 0;

    /// Synthetic status for an ERC20-style approve that returned false
    pub const STATUS_APPROVE_REJECTED: u64 = u64::MAX;
}
