//! Vote casting and absolute-majority resolution.

use {
    crate::{
        config::EngineConfig,
        constants::PCT_BASE,
        error::GovernanceError,
        events::GovernanceEvent,
        ledger::TokenLedger,
        lifecycle, math,
        state::{Proposal, ProposalState, VoteChoice, VoteRecord},
    },
    log::info,
    solana_pubkey::Pubkey,
};

/// Apply (or replace) the caller's vote on a non-terminal proposal.
///
/// The voting weight is the caller's vote-token balance sampled *now* and is
/// recorded with the vote; a recast first subtracts the recorded weight, so
/// a balance change between casts never corrupts the tallies.
///
/// After the tallies are updated, the absolute-majority test runs:
///
/// ```text
/// yea ≥ support_pct × total_supply / PCT_BASE      (floor division)
/// ```
///
/// Yea weight is measured against the whole vote-token supply, not against
/// the weight cast so far.  Only an affirmative majority resolves; there is
/// no rejected terminal state on the queue track.
pub(crate) fn cast_vote<V: TokenLedger>(
    config: &EngineConfig,
    vote_token: &V,
    proposal: &mut Proposal,
    voter: &Pubkey,
    supports: bool,
    events: &mut Vec<GovernanceEvent>,
) -> Result<(), GovernanceError> {
    if proposal.state.is_terminal() {
        return Err(GovernanceError::ProposalIsClosed);
    }

    let weight = vote_token.balance_of(voter);
    if weight == 0 {
        return Err(GovernanceError::UserHasNoVotingPower);
    }

    // Work out both tallies before writing either one.
    let mut yea = proposal.yea;
    let mut nay = proposal.nay;
    if let Some(previous) = proposal.votes.get(voter) {
        match previous.choice {
            VoteChoice::Yea => yea = math::sub(yea, previous.weight)?,
            VoteChoice::Nay => nay = math::sub(nay, previous.weight)?,
            VoteChoice::Absent => {}
        }
    }
    let choice = if supports {
        yea = math::add(yea, weight)?;
        VoteChoice::Yea
    } else {
        nay = math::add(nay, weight)?;
        VoteChoice::Nay
    };

    let required = math::mul_div(
        config.support_pct as u128,
        vote_token.total_supply() as u128,
        PCT_BASE,
    )?;

    proposal.yea = yea;
    proposal.nay = nay;
    proposal.votes.insert(*voter, VoteRecord { choice, weight });
    events.push(GovernanceEvent::VoteCasted {
        id: proposal.id,
        voter: *voter,
        supports,
        stake: weight,
    });

    if (yea as u128) >= required {
        info!(
            "proposal {} reached absolute majority: {yea} yea of {} supply",
            proposal.id,
            vote_token.total_supply()
        );
        lifecycle::transition(proposal, ProposalState::Resolved, 0, events);
    }

    Ok(())
}
