//! Error taxonomy for the governance engine.

use {
    crate::ledger::LedgerError,
    num_derive::{FromPrimitive, ToPrimitive},
    thiserror::Error,
};

/// Errors surfaced by engine operations.
///
/// Every precondition violation aborts the operation with the aggregate
/// untouched; there is no retry or recovery inside the engine.  Hosts that
/// need stable numeric tags can round-trip the discriminants through
/// `num_traits::{FromPrimitive, ToPrimitive}`.
#[derive(Error, Debug, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum GovernanceError {
    #[error("Proposal does not exist")]
    ProposalDoesNotExist = 0,

    #[error("Proposal has already been resolved or expired")]
    ProposalIsClosed,

    #[error("Proposal is already boosted")]
    ProposalIsBoosted,

    #[error("Proposal is not boosted")]
    ProposalIsNotBoosted,

    #[error("Proposal deadline has not passed yet")]
    ProposalIsActive,

    #[error("Proposal confidence is below the boost threshold")]
    ProposalDoesNotHaveEnoughConfidence,

    #[error("Proposal has not held confidence through the pended interval")]
    ProposalHasntHadConfidenceEnoughTime,

    #[error("Caller holds no voting tokens")]
    UserHasNoVotingPower,

    #[error("Caller's stake-token balance is insufficient")]
    SenderDoesNotHaveEnoughFunds,

    #[error("Caller has not approved enough stake tokens to the engine")]
    InsufficientAllowance,

    #[error("Caller does not hold the required stake on this side")]
    SenderDoesNotHaveRequiredStake,

    #[error("Engine custody does not hold enough stake tokens for the payout")]
    VotingDoesNotHaveEnoughFunds,

    #[error("Compensation fee is undefined for an unstaked proposal")]
    InvalidCompensationFee,

    #[error("Support threshold is below 50%")]
    InitSupportTooSmall,

    #[error("Support threshold must be below 100%")]
    InitSupportTooBig,

    #[error("Stake amount must be greater than zero")]
    ZeroAmount,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl From<LedgerError> for GovernanceError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds { .. } => GovernanceError::SenderDoesNotHaveEnoughFunds,
            LedgerError::InsufficientAllowance { .. } => GovernanceError::InsufficientAllowance,
        }
    }
}
