//! Proposal state types for the governance engine.
//!
//! Defines the vote and lifecycle enums (with stable wire discriminants),
//! the per-voter [`VoteRecord`], and the [`Proposal`] record itself.

use {
    crate::{
        constants::PRECISION_MULTIPLIER,
        error::GovernanceError,
        math,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    solana_pubkey::Pubkey,
    std::collections::BTreeMap,
};

/// Dense proposal identifier, assigned at creation.
pub type ProposalId = u64;

/// Wall-clock instant in seconds since the Unix epoch, supplied by the host.
pub type Timestamp = u64;

/// The recorded choice of a voter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[borsh(use_discriminant = true)]
pub enum VoteChoice {
    /// No vote recorded.
    Absent = 0,
    Yea = 1,
    Nay = 2,
}

/// Lifecycle state of a proposal.
///
/// Queued and Unpended behave identically; they differ only in whether the
/// proposal has ever held boost-level confidence, and observers rely on
/// that distinction in the event stream.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[borsh(use_discriminant = true)]
pub enum ProposalState {
    /// Created; accumulating votes and stakes on the queue track.
    Queued = 0,
    /// Held boost-level confidence at some point, then lost it.
    Unpended = 1,
    /// Confidence at or above threshold; waiting out the pended interval.
    Pended = 2,
    /// On the fast track with the shorter boosted lifetime.
    Boosted = 3,
    /// Decided affirmatively (absolute majority) or by boosted deadline.
    Resolved = 4,
    /// Queue deadline passed without a decision.
    Expired = 5,
}

impl ProposalState {
    /// Resolved and Expired are final: no operation may change them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProposalState::Resolved | ProposalState::Expired)
    }

    /// States on the queue track, where confidence drives Pended churn.
    pub fn in_queue(&self) -> bool {
        matches!(
            self,
            ProposalState::Queued | ProposalState::Unpended | ProposalState::Pended
        )
    }
}

impl std::fmt::Display for ProposalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalState::Queued => write!(f, "Queued"),
            ProposalState::Unpended => write!(f, "Unpended"),
            ProposalState::Pended => write!(f, "Pended"),
            ProposalState::Boosted => write!(f, "Boosted"),
            ProposalState::Resolved => write!(f, "Resolved"),
            ProposalState::Expired => write!(f, "Expired"),
        }
    }
}

/// A voter's recorded choice together with the voting weight sampled when it
/// was cast.  Recasting subtracts this recorded weight, never the voter's
/// current balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct VoteRecord {
    pub choice: VoteChoice,
    pub weight: u64,
}

/// A governance proposal.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Proposal {
    /// Dense identifier assigned at creation.
    pub id: ProposalId,

    /// Opaque description carried for observers; never interpreted.
    pub metadata: String,

    /// Current lifecycle state.
    pub state: ProposalState,

    /// Creation instant.
    pub start_date: Timestamp,

    /// Seconds until expiry on the current track, measured from
    /// `start_date`: the queue period at creation, the boost period once
    /// boosted.  The boost does *not* reset `start_date`.
    pub lifetime: u64,

    /// Instant the proposal most recently entered Pended; 0 in every other
    /// state.
    pub last_pended_date: Timestamp,

    /// Cumulative voting-token weight in favor.
    pub yea: u64,

    /// Cumulative voting-token weight against.
    pub nay: u64,

    /// Cumulative stake-token weight backing a boost.
    pub upstake: u64,

    /// Cumulative stake-token weight opposing a boost.
    pub downstake: u64,

    /// Per-voter records (weight sampled at cast time).
    pub votes: BTreeMap<Pubkey, VoteRecord>,

    /// Per-staker tokens committed in favor.
    pub upstakes: BTreeMap<Pubkey, u64>,

    /// Per-staker tokens committed against.
    pub downstakes: BTreeMap<Pubkey, u64>,
}

impl Proposal {
    /// A fresh Queued proposal with zeroed tallies.
    pub fn new(id: ProposalId, metadata: String, now: Timestamp, queue_period: u64) -> Self {
        Self {
            id,
            metadata,
            state: ProposalState::Queued,
            start_date: now,
            lifetime: queue_period,
            last_pended_date: 0,
            yea: 0,
            nay: 0,
            upstake: 0,
            downstake: 0,
            votes: BTreeMap::new(),
            upstakes: BTreeMap::new(),
            downstakes: BTreeMap::new(),
        }
    }

    /// Instant the proposal expires (queue track) or resolves (boosted
    /// track).
    pub fn deadline(&self) -> Timestamp {
        self.start_date.saturating_add(self.lifetime)
    }

    /// The recorded choice of `voter`, or `Absent`.
    pub fn vote_of(&self, voter: &Pubkey) -> VoteChoice {
        self.votes
            .get(voter)
            .map(|record| record.choice)
            .unwrap_or(VoteChoice::Absent)
    }

    /// Stake committed in favor by `staker`.
    pub fn upstake_of(&self, staker: &Pubkey) -> u64 {
        self.upstakes.get(staker).copied().unwrap_or(0)
    }

    /// Stake committed against by `staker`.
    pub fn downstake_of(&self, staker: &Pubkey) -> u64 {
        self.downstakes.get(staker).copied().unwrap_or(0)
    }

    /// Fixed-point confidence ratio `upstake / downstake`.
    ///
    /// A zero downstake counts as a multiplicative 1, so a proposal with any
    /// upstake and no opposition has confidence `upstake × 10^16`.
    pub fn confidence(&self) -> Result<u128, GovernanceError> {
        math::mul_div(
            self.upstake as u128,
            PRECISION_MULTIPLIER,
            self.downstake.max(1) as u128,
        )
    }
}
