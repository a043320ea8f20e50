//! Hologov Property-Based Invariant Tests
//!
//! Uses proptest to verify engine-wide invariants across:
//! - Stake custody conservation and sub-ledger correctness
//! - Lifecycle state coupling and monotone terminality
//! - Round-trip exactness of stake/unstake and vote recasting

pub mod engine_invariants;
