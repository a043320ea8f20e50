//! Property-based tests for engine-wide invariants.
//!
//! Properties tested:
//! 1. Custody conservation: the engine's stake-token balance equals the sum
//!    of all proposals' stakes minus the compensation fees already paid.
//! 2. Per-account sub-ledgers always sum to the proposal aggregates.
//! 3. A proposal is Pended iff `last_pended_date` is non-zero.
//! 4. `lifetime` tracks the proposal's track (queue vs boosted).
//! 5. Terminal states never change again.
//! 6. `yea + nay` never exceeds the vote-token supply.

#[cfg(test)]
mod tests {
    use {
        hologov_engine::{
            EngineConfig, GovernanceEngine, InMemoryTokenLedger, ProposalState, TokenLedger,
        },
        proptest::prelude::*,
        solana_pubkey::Pubkey,
    };

    type Engine = GovernanceEngine<InMemoryTokenLedger, InMemoryTokenLedger>;

    const ACCOUNTS: u8 = 5;
    const STAKE_GRANT: u64 = 1_000;
    const GENESIS: u64 = 1_700_000_000;

    fn acct(n: u8) -> Pubkey {
        Pubkey::new_from_array([n + 1; 32])
    }

    fn custody() -> Pubkey {
        Pubkey::new_from_array([0xEE; 32])
    }

    /// Engine with a small vote-token grid and generously approved stakers.
    fn new_engine() -> Engine {
        let mut vote_token = InMemoryTokenLedger::new();
        let mut stake_token = InMemoryTokenLedger::new();
        for n in 0..ACCOUNTS {
            vote_token.mint(&acct(n), (n as u64 + 1) * 10);
            stake_token.mint(&acct(n), STAKE_GRANT);
            // Unlimited approval so re-staking withdrawn tokens never hits
            // the allowance before it hits the balance.
            stake_token.approve(&acct(n), &custody(), u64::MAX);
        }
        GovernanceEngine::new(EngineConfig::default(), custody(), vote_token, stake_token)
            .unwrap()
    }

    /// One externally-driven engine operation.
    #[derive(Debug, Clone)]
    enum Op {
        Create,
        Vote { who: u8, pid: u64, supports: bool },
        Stake { who: u8, pid: u64, amount: u64, supports: bool },
        Unstake { who: u8, pid: u64, amount: u64, supports: bool },
        Boost { who: u8, pid: u64 },
        Expire { who: u8, pid: u64 },
        Resolve { who: u8, pid: u64 },
        Advance { secs: u64 },
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            1 => Just(Op::Create),
            4 => (0..ACCOUNTS, 0..4u64, any::<bool>())
                .prop_map(|(who, pid, supports)| Op::Vote { who, pid, supports }),
            4 => (0..ACCOUNTS, 0..4u64, 0..60u64, any::<bool>())
                .prop_map(|(who, pid, amount, supports)| Op::Stake { who, pid, amount, supports }),
            3 => (0..ACCOUNTS, 0..4u64, 0..60u64, any::<bool>())
                .prop_map(|(who, pid, amount, supports)| Op::Unstake { who, pid, amount, supports }),
            2 => (0..ACCOUNTS, 0..4u64).prop_map(|(who, pid)| Op::Boost { who, pid }),
            2 => (0..ACCOUNTS, 0..4u64).prop_map(|(who, pid)| Op::Expire { who, pid }),
            2 => (0..ACCOUNTS, 0..4u64).prop_map(|(who, pid)| Op::Resolve { who, pid }),
            3 => (0..50_000u64).prop_map(|secs| Op::Advance { secs }),
        ]
    }

    /// Assert every engine-wide invariant, then record newly terminal
    /// proposals for the monotonicity check.
    fn check_invariants(
        engine: &Engine,
        fees_paid: u64,
        terminal: &mut Vec<Option<ProposalState>>,
    ) -> Result<(), TestCaseError> {
        // ── 1. Custody conservation ──
        let staked: u64 = engine.proposals().map(|p| p.upstake + p.downstake).sum();
        prop_assert_eq!(
            engine.stake_token().balance_of(&custody()) + fees_paid,
            staked,
            "custody + fees must equal the recorded stakes"
        );

        let vote_supply = engine.vote_token().total_supply() as u128;

        for proposal in engine.proposals() {
            // ── 2. Sub-ledger sums ──
            let up: u64 = proposal.upstakes.values().sum();
            let down: u64 = proposal.downstakes.values().sum();
            prop_assert_eq!(up, proposal.upstake);
            prop_assert_eq!(down, proposal.downstake);

            // ── 3. Pended ⟺ last_pended_date ──
            prop_assert_eq!(
                proposal.state == ProposalState::Pended,
                proposal.last_pended_date != 0,
                "proposal {} state {} with last_pended_date {}",
                proposal.id,
                proposal.state,
                proposal.last_pended_date
            );

            // ── 4. Lifetime tracks the track ──
            match proposal.state {
                ProposalState::Queued | ProposalState::Unpended | ProposalState::Pended => {
                    prop_assert_eq!(proposal.lifetime, engine.config().queue_period)
                }
                ProposalState::Boosted => {
                    prop_assert_eq!(proposal.lifetime, engine.config().boost_period)
                }
                ProposalState::Resolved | ProposalState::Expired => {}
            }

            // ── 6. Tallies bounded by supply ──
            prop_assert!(
                proposal.yea as u128 + proposal.nay as u128 <= vote_supply,
                "tallies exceed the vote supply"
            );
        }

        // ── 5. Monotone terminality ──
        for (i, proposal) in engine.proposals().enumerate() {
            if let Some(Some(recorded)) = terminal.get(i) {
                prop_assert_eq!(proposal.state, *recorded, "terminal proposal changed state");
            }
        }
        terminal.clear();
        terminal.extend(
            engine
                .proposals()
                .map(|p| p.state.is_terminal().then_some(p.state)),
        );

        Ok(())
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Invariants hold across arbitrary operation sequences
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn invariants_hold_across_op_sequences(
            ops in prop::collection::vec(op_strategy(), 1..60),
        ) {
            let mut engine = new_engine();
            let mut now = GENESIS;
            let mut fees_paid: u64 = 0;
            let mut terminal: Vec<Option<ProposalState>> = Vec::new();

            // Seed a proposal so early operations have a live target.
            engine.create_proposal(&acct(0), "seed".to_string(), now);

            for op in ops {
                match op {
                    Op::Create => {
                        engine.create_proposal(&acct(0), "p".to_string(), now);
                    }
                    Op::Vote { who, pid, supports } => {
                        let _ = engine.vote(&acct(who), pid, supports);
                    }
                    Op::Stake { who, pid, amount, supports } => {
                        let _ = engine.stake(&acct(who), pid, amount, supports, now);
                    }
                    Op::Unstake { who, pid, amount, supports } => {
                        let _ = engine.unstake(&acct(who), pid, amount, supports, now);
                    }
                    Op::Boost { who, pid } => {
                        let before = engine.stake_token().balance_of(&acct(who));
                        if engine.boost_proposal(&acct(who), pid, now).is_ok() {
                            fees_paid += engine.stake_token().balance_of(&acct(who)) - before;
                        }
                    }
                    Op::Expire { who, pid } => {
                        let before = engine.stake_token().balance_of(&acct(who));
                        if engine.expire_non_boosted(&acct(who), pid, now).is_ok() {
                            fees_paid += engine.stake_token().balance_of(&acct(who)) - before;
                        }
                    }
                    Op::Resolve { who, pid } => {
                        let before = engine.stake_token().balance_of(&acct(who));
                        if engine.resolve_boosted(&acct(who), pid, now).is_ok() {
                            fees_paid += engine.stake_token().balance_of(&acct(who)) - before;
                        }
                    }
                    Op::Advance { secs } => {
                        now = now.saturating_add(secs);
                    }
                }

                check_invariants(&engine, fees_paid, &mut terminal)?;
            }
        }
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // A rejected operation leaves the aggregate untouched
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn failed_unstake_changes_nothing(
            staked in 1..100u64,
            excess in 1..100u64,
        ) {
            let mut engine = new_engine();
            let now = GENESIS;
            engine.create_proposal(&acct(0), String::new(), now);
            engine.stake(&acct(1), 0, staked, true, now).unwrap();

            let before = engine.proposal(0).unwrap().clone();
            let custody_before = engine.stake_token().balance_of(&custody());

            let result = engine.unstake(&acct(1), 0, staked + excess, true, now);
            prop_assert!(result.is_err());
            prop_assert_eq!(engine.proposal(0).unwrap(), &before);
            prop_assert_eq!(
                engine.stake_token().balance_of(&custody()),
                custody_before
            );
        }
    }
}
