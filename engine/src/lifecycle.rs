//! Lifecycle pokes: boost, expiration, and boosted resolution.
//!
//! Any third party may poke a proposal whose clock has run out.  The engine
//! compensates the caller from the proposal's staked tokens: the fee grows
//! linearly with how late the poke is and shrinks with how heavily the
//! proposal is upstaked, so richly-staked proposals are cheap to keep
//! honest.

use {
    crate::{
        config::EngineConfig,
        constants::PRECISION_MULTIPLIER,
        error::GovernanceError,
        events::GovernanceEvent,
        ledger::TokenLedger,
        math,
        state::{Proposal, ProposalState, Timestamp},
    },
    log::{debug, info},
    solana_pubkey::Pubkey,
};

/// Write a state transition: updates the state and the Pended stamp, and
/// emits the change signal.  `last_pended_date` must be the entry instant
/// for Pended and 0 for every other state.
pub(crate) fn transition(
    proposal: &mut Proposal,
    new_state: ProposalState,
    last_pended_date: Timestamp,
    events: &mut Vec<GovernanceEvent>,
) {
    debug!("proposal {}: {} -> {new_state}", proposal.id, proposal.state);
    proposal.state = new_state;
    proposal.last_pended_date = last_pended_date;
    events.push(GovernanceEvent::ProposalStateChanged {
        id: proposal.id,
        new_state,
    });
}

/// Move a proposal that has held Pended through the full pended interval
/// onto the boosted track, paying the caller's compensation from custody.
///
/// The boosted deadline is `start_date + boost_period`; `start_date` is
/// *not* reset, so a proposal boosted late in its queue window may be
/// resolvable immediately.
pub(crate) fn boost_proposal<S: TokenLedger>(
    config: &EngineConfig,
    proposal: &mut Proposal,
    stake_token: &mut S,
    engine_account: &Pubkey,
    caller: &Pubkey,
    now: Timestamp,
    events: &mut Vec<GovernanceEvent>,
) -> Result<(), GovernanceError> {
    match proposal.state {
        ProposalState::Resolved | ProposalState::Expired => {
            return Err(GovernanceError::ProposalIsClosed)
        }
        ProposalState::Boosted => return Err(GovernanceError::ProposalIsBoosted),
        ProposalState::Queued | ProposalState::Unpended => {
            return Err(GovernanceError::ProposalDoesNotHaveEnoughConfidence)
        }
        ProposalState::Pended => {}
    }

    let eligible_at = math::add(proposal.last_pended_date, config.pended_boost_period)?;
    if now < eligible_at {
        return Err(GovernanceError::ProposalHasntHadConfidenceEnoughTime);
    }

    let fee = compensation_fee(proposal.upstake, config.compensation_fee_pct, eligible_at, now)?;
    pay_fee(stake_token, engine_account, caller, fee)?;

    proposal.lifetime = config.boost_period;
    transition(proposal, ProposalState::Boosted, 0, events);
    info!(
        "proposal {} boosted; deadline {}, fee {fee} paid to {caller}",
        proposal.id,
        proposal.deadline()
    );
    Ok(())
}

/// Expire a queue-track proposal whose queue deadline has passed, paying
/// the caller's compensation from custody.
pub(crate) fn expire_non_boosted<S: TokenLedger>(
    config: &EngineConfig,
    proposal: &mut Proposal,
    stake_token: &mut S,
    engine_account: &Pubkey,
    caller: &Pubkey,
    now: Timestamp,
    events: &mut Vec<GovernanceEvent>,
) -> Result<(), GovernanceError> {
    match proposal.state {
        ProposalState::Resolved | ProposalState::Expired => {
            return Err(GovernanceError::ProposalIsClosed)
        }
        ProposalState::Boosted => return Err(GovernanceError::ProposalIsBoosted),
        ProposalState::Queued | ProposalState::Unpended | ProposalState::Pended => {}
    }

    let deadline = proposal.deadline();
    if now < deadline {
        return Err(GovernanceError::ProposalIsActive);
    }

    let fee = compensation_fee(proposal.upstake, config.compensation_fee_pct, deadline, now)?;
    pay_fee(stake_token, engine_account, caller, fee)?;

    transition(proposal, ProposalState::Expired, 0, events);
    info!(
        "proposal {} expired unboosted; fee {fee} paid to {caller}",
        proposal.id
    );
    Ok(())
}

/// Resolve a boosted proposal whose boosted deadline has passed, paying the
/// caller's compensation from custody.  The engine only marks the proposal
/// Resolved; consumers read the final yea/nay tallies for the outcome.
pub(crate) fn resolve_boosted<S: TokenLedger>(
    config: &EngineConfig,
    proposal: &mut Proposal,
    stake_token: &mut S,
    engine_account: &Pubkey,
    caller: &Pubkey,
    now: Timestamp,
    events: &mut Vec<GovernanceEvent>,
) -> Result<(), GovernanceError> {
    match proposal.state {
        ProposalState::Resolved | ProposalState::Expired => {
            return Err(GovernanceError::ProposalIsClosed)
        }
        ProposalState::Queued | ProposalState::Unpended | ProposalState::Pended => {
            return Err(GovernanceError::ProposalIsNotBoosted)
        }
        ProposalState::Boosted => {}
    }

    let deadline = proposal.deadline();
    if now < deadline {
        return Err(GovernanceError::ProposalIsActive);
    }

    let fee = compensation_fee(proposal.upstake, config.compensation_fee_pct, deadline, now)?;
    pay_fee(stake_token, engine_account, caller, fee)?;

    transition(proposal, ProposalState::Resolved, 0, events);
    info!(
        "proposal {} resolved from boost: {} yea vs {} nay; fee {fee} paid to {caller}",
        proposal.id, proposal.yea, proposal.nay
    );
    Ok(())
}

/// Compensation owed to a poke caller.
///
/// ```text
/// elapsed  = now − cutoff
/// portion  = upstake × PRECISION_MULTIPLIER / compensation_fee_pct
/// fee_raw  = elapsed × PRECISION_MULTIPLIER / portion
/// fee      = min(fee_raw, portion / PRECISION_MULTIPLIER)
/// ```
///
/// The fee grows linearly with lateness, shrinks with the proposal's
/// upstake, and is capped at `upstake / compensation_fee_pct`.  With zero
/// upstake the cap collapses and the fee is undefined.
pub(crate) fn compensation_fee(
    upstake: u64,
    compensation_fee_pct: u64,
    cutoff: Timestamp,
    now: Timestamp,
) -> Result<u64, GovernanceError> {
    debug_assert!(now >= cutoff);
    let elapsed = now.saturating_sub(cutoff);

    let portion = math::mul_div(
        upstake as u128,
        PRECISION_MULTIPLIER,
        compensation_fee_pct as u128,
    )?;
    if portion == 0 {
        return Err(GovernanceError::InvalidCompensationFee);
    }

    let fee_raw = math::mul_div(elapsed as u128, PRECISION_MULTIPLIER, portion)?;
    let cap = portion / PRECISION_MULTIPLIER;
    Ok(fee_raw.min(cap) as u64)
}

/// Pay `fee` from engine custody to the poke caller.
fn pay_fee<S: TokenLedger>(
    stake_token: &mut S,
    engine_account: &Pubkey,
    caller: &Pubkey,
    fee: u64,
) -> Result<(), GovernanceError> {
    if stake_token.balance_of(engine_account) < fee {
        return Err(GovernanceError::VotingDoesNotHaveEnoughFunds);
    }
    stake_token
        .transfer(engine_account, caller, fee)
        .map_err(|_| GovernanceError::VotingDoesNotHaveEnoughFunds)
}
