//! Dense, append-only proposal storage.

use crate::{
    error::GovernanceError,
    state::{Proposal, ProposalId, Timestamp},
};

/// Integer-keyed proposal collection.
///
/// Identifiers are assigned densely in creation order and never reused;
/// proposals are never deleted, terminal ones included.
#[derive(Debug, Clone, Default)]
pub struct ProposalStore {
    proposals: Vec<Proposal>,
}

impl ProposalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh Queued proposal and return its identifier.
    pub fn create(&mut self, metadata: String, now: Timestamp, queue_period: u64) -> ProposalId {
        let id = self.proposals.len() as ProposalId;
        self.proposals
            .push(Proposal::new(id, metadata, now, queue_period));
        id
    }

    pub fn get(&self, id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.proposals
            .get(id as usize)
            .ok_or(GovernanceError::ProposalDoesNotExist)
    }

    pub fn get_mut(&mut self, id: ProposalId) -> Result<&mut Proposal, GovernanceError> {
        self.proposals
            .get_mut(id as usize)
            .ok_or(GovernanceError::ProposalDoesNotExist)
    }

    /// Number of proposals ever created.
    pub fn len(&self) -> u64 {
        self.proposals.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.iter()
    }
}
