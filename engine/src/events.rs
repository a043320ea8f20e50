//! Observable signals emitted by engine operations.
//!
//! Every mutating operation returns the events it produced; the host decides
//! how to publish them.  The engine emits `ProposalStateChanged` on *every*
//! transition, including the Queued/Unpended/Pended churn on the queue
//! track.

use {
    crate::state::{ProposalId, ProposalState},
    serde::{Deserialize, Serialize},
    solana_pubkey::Pubkey,
};

/// A governance signal, serializable for host-side event streams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceEvent {
    ProposalCreated {
        id: ProposalId,
        creator: Pubkey,
        metadata: String,
    },
    /// `stake` is the voting weight sampled when the vote was cast.
    VoteCasted {
        id: ProposalId,
        voter: Pubkey,
        supports: bool,
        stake: u64,
    },
    UpstakeProposal {
        id: ProposalId,
        staker: Pubkey,
        amount: u64,
    },
    DownstakeProposal {
        id: ProposalId,
        staker: Pubkey,
        amount: u64,
    },
    WithdrawUpstake {
        id: ProposalId,
        staker: Pubkey,
        amount: u64,
    },
    WithdrawDownstake {
        id: ProposalId,
        staker: Pubkey,
        amount: u64,
    },
    ProposalStateChanged {
        id: ProposalId,
        new_state: ProposalState,
    },
}
