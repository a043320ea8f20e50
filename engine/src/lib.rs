//! # Hologov Engine
//!
//! A deterministic **holographic-consensus governance engine**: proposals
//! accumulate token-weighted votes and stakes, and resolve along two
//! parallel tracks.
//!
//! - On the slow **queue track**, a proposal resolves the moment its yea
//!   weight reaches an absolute majority of the vote-token supply, and can
//!   be expired once its queue deadline passes.
//! - On the fast **boosted track**, stake-driven *confidence*
//!   (`upstake / downstake`) pends a proposal; after holding confidence
//!   through the pended interval it can be boosted into a shorter decision
//!   window and resolved by plurality at the boosted deadline.
//!
//! Third parties keep the clock honest: anyone may poke an overdue proposal
//! (`boost_proposal`, `expire_non_boosted`, `resolve_boosted`) and collects
//! a compensation fee from the proposal's staked tokens that grows with the
//! lateness of the poke.
//!
//! The engine is a pure state machine.  All I/O lives behind the
//! [`TokenLedger`] capability; the substrate supplies the caller identity
//! and the current time with each call and publishes the returned
//! [`GovernanceEvent`]s.
//!
//! ## Quick start
//!
//! ```rust
//! use hologov_engine::{EngineConfig, GovernanceEngine, InMemoryTokenLedger, ProposalState};
//! use solana_pubkey::Pubkey;
//!
//! let custody = Pubkey::new_from_array([0xEE; 32]);
//! let alice = Pubkey::new_from_array([1; 32]);
//!
//! // Alice holds the entire vote-token supply.
//! let mut vote_token = InMemoryTokenLedger::new();
//! vote_token.mint(&alice, 100);
//!
//! let mut engine = GovernanceEngine::new(
//!     EngineConfig::default(),
//!     custody,
//!     vote_token,
//!     InMemoryTokenLedger::new(),
//! )
//! .unwrap();
//!
//! let (id, _) = engine.create_proposal(&alice, "raise the fee cap".to_string(), 1_700_000_000);
//!
//! // A yea vote from the sole holder is an absolute majority.
//! engine.vote(&alice, id, true).unwrap();
//! assert_eq!(engine.proposal(id).unwrap().state, ProposalState::Resolved);
//! ```

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod ledger;
pub mod math;
pub mod state;
pub mod store;

mod lifecycle;
mod staking;
mod voting;


// Re-exports for convenience.
pub use {
    config::EngineConfig,
    engine::GovernanceEngine,
    error::GovernanceError,
    events::GovernanceEvent,
    ledger::{InMemoryTokenLedger, LedgerError, TokenLedger},
    state::{Proposal, ProposalId, ProposalState, Timestamp, VoteChoice, VoteRecord},
};
