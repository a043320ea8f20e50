//! The governance engine aggregate.
//!
//! [`GovernanceEngine`] owns the proposal store, the configuration, and the
//! two token-ledger capabilities, and dispatches every external operation.
//! It is deterministic: the substrate supplies the caller identity and the
//! current time explicitly, each operation runs to completion atomically,
//! and an `Err` return leaves the aggregate untouched: every fallible step
//! (precondition checks, tally and fee arithmetic, the single token call)
//! runs before the first state write.

use {
    crate::{
        config::EngineConfig,
        error::GovernanceError,
        events::GovernanceEvent,
        ledger::TokenLedger,
        lifecycle, staking,
        state::{Proposal, ProposalId, Timestamp, VoteChoice},
        store::ProposalStore,
        voting,
    },
    log::info,
    solana_pubkey::Pubkey,
};

/// A holographic-consensus governance engine instance.
///
/// `V` is the vote-weight ledger, `S` the stake-custody ledger.  The engine
/// holds stake tokens on its own account (`engine_account`) on `S`; that
/// pool is the union of all proposals' stakes minus the compensation fees
/// already paid out.
pub struct GovernanceEngine<V, S> {
    config: EngineConfig,
    engine_account: Pubkey,
    vote_token: V,
    stake_token: S,
    store: ProposalStore,
}

impl<V: TokenLedger, S: TokenLedger> GovernanceEngine<V, S> {
    /// Construct an engine, validating the configuration.
    pub fn new(
        config: EngineConfig,
        engine_account: Pubkey,
        vote_token: V,
        stake_token: S,
    ) -> Result<Self, GovernanceError> {
        config.validate()?;
        Ok(Self {
            config,
            engine_account,
            vote_token,
            stake_token,
            store: ProposalStore::new(),
        })
    }

    // -- Mutating operations --

    /// Create a proposal around an opaque metadata string.  Returns the new
    /// dense identifier and the creation signal.
    pub fn create_proposal(
        &mut self,
        creator: &Pubkey,
        metadata: String,
        now: Timestamp,
    ) -> (ProposalId, Vec<GovernanceEvent>) {
        let id = self
            .store
            .create(metadata.clone(), now, self.config.queue_period);
        info!("proposal {id} created by {creator}");
        (
            id,
            vec![GovernanceEvent::ProposalCreated {
                id,
                creator: *creator,
                metadata,
            }],
        )
    }

    /// Cast or replace the caller's vote.  The weight is the caller's
    /// vote-token balance, sampled now and recorded with the vote.
    pub fn vote(
        &mut self,
        caller: &Pubkey,
        proposal_id: ProposalId,
        supports: bool,
    ) -> Result<Vec<GovernanceEvent>, GovernanceError> {
        let proposal = self.store.get_mut(proposal_id)?;
        let mut events = Vec::new();
        voting::cast_vote(
            &self.config,
            &self.vote_token,
            proposal,
            caller,
            supports,
            &mut events,
        )?;
        Ok(events)
    }

    /// Deposit stake on the chosen side of a proposal.
    pub fn stake(
        &mut self,
        caller: &Pubkey,
        proposal_id: ProposalId,
        amount: u64,
        supports: bool,
        now: Timestamp,
    ) -> Result<Vec<GovernanceEvent>, GovernanceError> {
        let proposal = self.store.get_mut(proposal_id)?;
        let mut events = Vec::new();
        staking::stake(
            &self.config,
            proposal,
            &mut self.stake_token,
            &self.engine_account,
            caller,
            amount,
            supports,
            now,
            &mut events,
        )?;
        Ok(events)
    }

    /// Withdraw previously deposited stake from the chosen side.
    pub fn unstake(
        &mut self,
        caller: &Pubkey,
        proposal_id: ProposalId,
        amount: u64,
        supports: bool,
        now: Timestamp,
    ) -> Result<Vec<GovernanceEvent>, GovernanceError> {
        let proposal = self.store.get_mut(proposal_id)?;
        let mut events = Vec::new();
        staking::unstake(
            &self.config,
            proposal,
            &mut self.stake_token,
            &self.engine_account,
            caller,
            amount,
            supports,
            now,
            &mut events,
        )?;
        Ok(events)
    }

    /// Move a Pended proposal onto the boosted track, compensating the
    /// caller.
    pub fn boost_proposal(
        &mut self,
        caller: &Pubkey,
        proposal_id: ProposalId,
        now: Timestamp,
    ) -> Result<Vec<GovernanceEvent>, GovernanceError> {
        let proposal = self.store.get_mut(proposal_id)?;
        let mut events = Vec::new();
        lifecycle::boost_proposal(
            &self.config,
            proposal,
            &mut self.stake_token,
            &self.engine_account,
            caller,
            now,
            &mut events,
        )?;
        Ok(events)
    }

    /// Expire a queue-track proposal past its queue deadline, compensating
    /// the caller.
    pub fn expire_non_boosted(
        &mut self,
        caller: &Pubkey,
        proposal_id: ProposalId,
        now: Timestamp,
    ) -> Result<Vec<GovernanceEvent>, GovernanceError> {
        let proposal = self.store.get_mut(proposal_id)?;
        let mut events = Vec::new();
        lifecycle::expire_non_boosted(
            &self.config,
            proposal,
            &mut self.stake_token,
            &self.engine_account,
            caller,
            now,
            &mut events,
        )?;
        Ok(events)
    }

    /// Resolve a boosted proposal past its boosted deadline, compensating
    /// the caller.
    pub fn resolve_boosted(
        &mut self,
        caller: &Pubkey,
        proposal_id: ProposalId,
        now: Timestamp,
    ) -> Result<Vec<GovernanceEvent>, GovernanceError> {
        let proposal = self.store.get_mut(proposal_id)?;
        let mut events = Vec::new();
        lifecycle::resolve_boosted(
            &self.config,
            proposal,
            &mut self.stake_token,
            &self.engine_account,
            caller,
            now,
            &mut events,
        )?;
        Ok(events)
    }

    // -- Read accessors --

    pub fn proposal(&self, proposal_id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.store.get(proposal_id)
    }

    pub fn vote_of(
        &self,
        proposal_id: ProposalId,
        voter: &Pubkey,
    ) -> Result<VoteChoice, GovernanceError> {
        Ok(self.store.get(proposal_id)?.vote_of(voter))
    }

    pub fn upstake_of(
        &self,
        proposal_id: ProposalId,
        staker: &Pubkey,
    ) -> Result<u64, GovernanceError> {
        Ok(self.store.get(proposal_id)?.upstake_of(staker))
    }

    pub fn downstake_of(
        &self,
        proposal_id: ProposalId,
        staker: &Pubkey,
    ) -> Result<u64, GovernanceError> {
        Ok(self.store.get(proposal_id)?.downstake_of(staker))
    }

    /// Fixed-point confidence ratio of a proposal.
    pub fn confidence(&self, proposal_id: ProposalId) -> Result<u128, GovernanceError> {
        self.store.get(proposal_id)?.confidence()
    }

    /// Number of proposals ever created.
    pub fn num_proposals(&self) -> u64 {
        self.store.len()
    }

    pub fn proposals(&self) -> impl Iterator<Item = &Proposal> {
        self.store.iter()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The engine's custody account on the stake ledger.
    pub fn engine_account(&self) -> &Pubkey {
        &self.engine_account
    }

    pub fn vote_token(&self) -> &V {
        &self.vote_token
    }

    /// Host-side administration of the vote ledger (minting, transfers).
    pub fn vote_token_mut(&mut self) -> &mut V {
        &mut self.vote_token
    }

    pub fn stake_token(&self) -> &S {
        &self.stake_token
    }

    /// Host-side administration of the stake ledger (minting, approvals).
    pub fn stake_token_mut(&mut self) -> &mut S {
        &mut self.stake_token
    }
}
