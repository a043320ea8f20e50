//! Constants for the governance engine.
//!
//! Defines the fixed-point scale shared by every percentage and ratio in the
//! engine, the bounds on the absolute-majority threshold, and the default
//! production parameters.

/// Fixed-point scale: one percentage point expressed as an integer.
/// Every percentage and ratio in the engine carries this factor.
pub const PRECISION_MULTIPLIER: u128 = 10_000_000_000_000_000; // 10^16

/// 100 % in fixed point (`100 × PRECISION_MULTIPLIER`).
pub const PCT_BASE: u128 = 100 * PRECISION_MULTIPLIER; // 10^18

// ---------------------------------------------------------------------------
// Support bounds
// ---------------------------------------------------------------------------

/// Smallest admissible `support_pct` (50 %).  Below half of the vote-token
/// supply, a "majority" of yea weight is not absolute.
pub const MIN_SUPPORT_PCT: u64 = 500_000_000_000_000_000; // 50 × 10^16

// ---------------------------------------------------------------------------
// Default engine configuration values
// ---------------------------------------------------------------------------

/// Default absolute-majority threshold: 51 % of the vote-token supply.
pub const DEFAULT_SUPPORT_PCT: u64 = 510_000_000_000_000_000; // 51 × 10^16

/// Default queue-track lifetime: 24 hours.
pub const DEFAULT_QUEUE_PERIOD: u64 = 24 * 60 * 60;

/// Default boosted-track lifetime: 6 hours.
pub const DEFAULT_BOOST_PERIOD: u64 = 6 * 60 * 60;

/// Default quiet-ending window hosts schedule around a boosted deadline:
/// 2 hours.
pub const DEFAULT_BOOST_PERIOD_EXTENSION: u64 = 2 * 60 * 60;

/// Default minimum uninterrupted Pended interval before a boost: 1 hour.
pub const DEFAULT_PENDED_BOOST_PERIOD: u64 = 60 * 60;

/// Default compensation-fee divisor: a poke fee is capped at 1/10 of the
/// proposal's upstake.
pub const DEFAULT_COMPENSATION_FEE_PCT: u64 = 10;

/// Default confidence threshold: upstake must reach 4× downstake before a
/// proposal pends.
pub const DEFAULT_CONFIDENCE_THRESHOLD_BASE: u64 = 4;
