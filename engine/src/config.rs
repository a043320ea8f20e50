//! Engine configuration.

use {
    crate::{
        constants::{
            DEFAULT_BOOST_PERIOD, DEFAULT_BOOST_PERIOD_EXTENSION, DEFAULT_COMPENSATION_FEE_PCT,
            DEFAULT_CONFIDENCE_THRESHOLD_BASE, DEFAULT_PENDED_BOOST_PERIOD, DEFAULT_QUEUE_PERIOD,
            DEFAULT_SUPPORT_PCT, MIN_SUPPORT_PCT, PCT_BASE, PRECISION_MULTIPLIER,
        },
        error::GovernanceError,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    log::warn,
    serde::{Deserialize, Serialize},
};

/// Parameters of a governance engine instance, immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct EngineConfig {
    /// Share of the vote-token supply that yea weight must reach for an
    /// absolute majority, in fixed point (`10^18` = 100 %).
    /// Must lie in `[50 %, 100 %)`.
    pub support_pct: u64,

    /// Queue-track lifetime in seconds.  A proposal that is neither boosted
    /// nor resolved within this window can be expired.
    pub queue_period: u64,

    /// Boosted-track lifetime in seconds, measured from the *original*
    /// `start_date`; boosting does not restart the clock.
    pub boost_period: u64,

    /// Quiet-ending window in seconds.  Hosts schedule outcome-flip
    /// extensions around the boosted deadline from this value; the core
    /// state machine carries it but does not consume it.
    pub boost_period_extension: u64,

    /// Seconds a proposal must hold Pended uninterrupted before it may be
    /// boosted.
    pub pended_boost_period: u64,

    /// Compensation-fee divisor: a poke fee is capped at
    /// `upstake / compensation_fee_pct`.  Must be non-zero.
    pub compensation_fee_pct: u64,

    /// Confidence threshold as a plain multiplier: upstake must reach
    /// `confidence_threshold_base × downstake` for a proposal to pend.
    pub confidence_threshold_base: u64,
}

impl EngineConfig {
    /// Check the parameter ranges.  Runs once at engine construction.
    pub fn validate(&self) -> Result<(), GovernanceError> {
        if self.support_pct < MIN_SUPPORT_PCT {
            return Err(GovernanceError::InitSupportTooSmall);
        }
        if self.support_pct as u128 >= PCT_BASE {
            return Err(GovernanceError::InitSupportTooBig);
        }
        if self.boost_period > self.queue_period {
            // Tolerated: boosting then lengthens the decision window instead
            // of shortening it.
            warn!(
                "boost_period ({}) exceeds queue_period ({})",
                self.boost_period, self.queue_period
            );
        }
        if self.compensation_fee_pct == 0 {
            warn!("compensation_fee_pct is 0; every lifecycle poke will fail");
        }
        Ok(())
    }

    /// Fixed-point confidence threshold.
    #[inline]
    pub fn threshold(&self) -> u128 {
        self.confidence_threshold_base as u128 * PRECISION_MULTIPLIER
    }
}

impl Default for EngineConfig {
    /// Production defaults.
    fn default() -> Self {
        Self {
            support_pct: DEFAULT_SUPPORT_PCT,               // 51 %
            queue_period: DEFAULT_QUEUE_PERIOD,             // 24 h
            boost_period: DEFAULT_BOOST_PERIOD,             // 6 h
            boost_period_extension: DEFAULT_BOOST_PERIOD_EXTENSION, // 2 h
            pended_boost_period: DEFAULT_PENDED_BOOST_PERIOD, // 1 h
            compensation_fee_pct: DEFAULT_COMPENSATION_FEE_PCT, // cap = upstake / 10
            confidence_threshold_base: DEFAULT_CONFIDENCE_THRESHOLD_BASE, // 4× downstake
        }
    }
}
