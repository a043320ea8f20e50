//! Stake custody and confidence reassessment.
//!
//! Stakes live in two independent per-proposal, per-account sub-ledgers.
//! Every deposit or withdrawal reassesses the proposal's confidence, which
//! drives the Pended/Unpended churn on the queue track.

use {
    crate::{
        config::EngineConfig,
        error::GovernanceError,
        events::GovernanceEvent,
        ledger::TokenLedger,
        lifecycle, math,
        state::{Proposal, ProposalState, Timestamp},
    },
    log::debug,
    solana_pubkey::Pubkey,
};

/// Deposit `amount` stake tokens on the chosen side of a non-terminal
/// proposal.  The tokens move from the staker into engine custody via the
/// staker's allowance.
pub(crate) fn stake<S: TokenLedger>(
    config: &EngineConfig,
    proposal: &mut Proposal,
    stake_token: &mut S,
    engine_account: &Pubkey,
    staker: &Pubkey,
    amount: u64,
    supports: bool,
    now: Timestamp,
    events: &mut Vec<GovernanceEvent>,
) -> Result<(), GovernanceError> {
    if proposal.state.is_terminal() {
        return Err(GovernanceError::ProposalIsClosed);
    }
    if amount == 0 {
        return Err(GovernanceError::ZeroAmount);
    }

    let (sub_balance, aggregate) = if supports {
        (proposal.upstake_of(staker), proposal.upstake)
    } else {
        (proposal.downstake_of(staker), proposal.downstake)
    };
    let new_sub = math::add(sub_balance, amount)?;
    let new_aggregate = math::add(aggregate, amount)?;

    stake_token.transfer_from(engine_account, staker, engine_account, amount)?;

    if supports {
        proposal.upstakes.insert(*staker, new_sub);
        proposal.upstake = new_aggregate;
        events.push(GovernanceEvent::UpstakeProposal {
            id: proposal.id,
            staker: *staker,
            amount,
        });
    } else {
        proposal.downstakes.insert(*staker, new_sub);
        proposal.downstake = new_aggregate;
        events.push(GovernanceEvent::DownstakeProposal {
            id: proposal.id,
            staker: *staker,
            amount,
        });
    }

    reassess_confidence(config, proposal, now, events)
}

/// Withdraw `amount` previously staked tokens from the chosen side.  The
/// tokens move from engine custody back to the staker.
pub(crate) fn unstake<S: TokenLedger>(
    config: &EngineConfig,
    proposal: &mut Proposal,
    stake_token: &mut S,
    engine_account: &Pubkey,
    staker: &Pubkey,
    amount: u64,
    supports: bool,
    now: Timestamp,
    events: &mut Vec<GovernanceEvent>,
) -> Result<(), GovernanceError> {
    if proposal.state.is_terminal() {
        return Err(GovernanceError::ProposalIsClosed);
    }
    if amount == 0 {
        return Err(GovernanceError::ZeroAmount);
    }

    let (sub_balance, aggregate) = if supports {
        (proposal.upstake_of(staker), proposal.upstake)
    } else {
        (proposal.downstake_of(staker), proposal.downstake)
    };
    if sub_balance < amount {
        return Err(GovernanceError::SenderDoesNotHaveRequiredStake);
    }
    let new_sub = sub_balance - amount;
    let new_aggregate = math::sub(aggregate, amount)?;

    // Custody can run short of the recorded stakes by at most the fees
    // already paid out to poke callers.
    stake_token
        .transfer(engine_account, staker, amount)
        .map_err(|_| GovernanceError::VotingDoesNotHaveEnoughFunds)?;

    if supports {
        if new_sub == 0 {
            proposal.upstakes.remove(staker);
        } else {
            proposal.upstakes.insert(*staker, new_sub);
        }
        proposal.upstake = new_aggregate;
        events.push(GovernanceEvent::WithdrawUpstake {
            id: proposal.id,
            staker: *staker,
            amount,
        });
    } else {
        if new_sub == 0 {
            proposal.downstakes.remove(staker);
        } else {
            proposal.downstakes.insert(*staker, new_sub);
        }
        proposal.downstake = new_aggregate;
        events.push(GovernanceEvent::WithdrawDownstake {
            id: proposal.id,
            staker: *staker,
            amount,
        });
    }

    reassess_confidence(config, proposal, now, events)
}

/// Recompute confidence and drive the queue-track churn.
///
/// Only the queue-track states react: at or above the threshold a proposal
/// pends (stamping `last_pended_date`), below it a Pended proposal drops to
/// Unpended.  A Queued proposal below the threshold simply stays Queued;
/// Unpended records that confidence was once held and lost.
pub(crate) fn reassess_confidence(
    config: &EngineConfig,
    proposal: &mut Proposal,
    now: Timestamp,
    events: &mut Vec<GovernanceEvent>,
) -> Result<(), GovernanceError> {
    if !proposal.state.in_queue() {
        return Ok(());
    }

    let confidence = proposal.confidence()?;
    let threshold = config.threshold();

    if confidence >= threshold {
        if proposal.state != ProposalState::Pended {
            debug!(
                "proposal {}: confidence {confidence} >= threshold {threshold}",
                proposal.id
            );
            lifecycle::transition(proposal, ProposalState::Pended, now, events);
        }
    } else if proposal.state == ProposalState::Pended {
        debug!(
            "proposal {}: confidence {confidence} dropped below threshold {threshold}",
            proposal.id
        );
        lifecycle::transition(proposal, ProposalState::Unpended, 0, events);
    }

    Ok(())
}
