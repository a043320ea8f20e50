//! Token-ledger capability interface.
//!
//! The engine never moves tokens on its own: the vote-weight ledger and the
//! stake-custody ledger are both consumed through [`TokenLedger`].
//! Production embedders adapt their real ledgers behind this trait;
//! [`InMemoryTokenLedger`] backs tests and standalone use.
//!
//! Implementations must be pure transfer primitives: a ledger call must not
//! call back into the engine.

use {solana_pubkey::Pubkey, std::collections::BTreeMap, thiserror::Error};

/// Failures surfaced by ledger calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The source account does not hold `required` tokens.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },

    /// The spender's allowance from the owner does not cover the transfer.
    #[error("insufficient allowance: required {required}, approved {approved}")]
    InsufficientAllowance { required: u64, approved: u64 },
}

/// Minimal fungible-token surface the engine consumes.
pub trait TokenLedger {
    /// Current balance of `account`.
    fn balance_of(&self, account: &Pubkey) -> u64;

    /// Total tokens in circulation on this ledger.
    fn total_supply(&self) -> u64;

    /// Move `amount` from `from` to `to`.
    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<(), LedgerError>;

    /// Move `amount` from `owner` to `to`, spending `spender`'s allowance.
    fn transfer_from(
        &mut self,
        spender: &Pubkey,
        owner: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(), LedgerError>;
}

/// A map-backed ledger with ERC-20-style allowances.
///
/// Hosts administer it through [`mint`](InMemoryTokenLedger::mint) and
/// [`approve`](InMemoryTokenLedger::approve); the engine only ever sees the
/// [`TokenLedger`] surface.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenLedger {
    balances: BTreeMap<Pubkey, u64>,
    /// (owner, spender) → remaining approved amount.
    allowances: BTreeMap<(Pubkey, Pubkey), u64>,
    total_supply: u64,
}

impl InMemoryTokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` fresh tokens to `account`.
    pub fn mint(&mut self, account: &Pubkey, amount: u64) {
        let balance = self.balances.entry(*account).or_insert(0);
        *balance = balance.saturating_add(amount);
        self.total_supply = self.total_supply.saturating_add(amount);
    }

    /// Set the spender's allowance from `owner` to exactly `amount`.
    pub fn approve(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u64) {
        self.allowances.insert((*owner, *spender), amount);
    }

    /// Remaining allowance from `owner` to `spender`.
    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    fn move_tokens(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                available,
            });
        }
        *self.balances.entry(*from).or_insert(0) -= amount;
        *self.balances.entry(*to).or_insert(0) += amount;
        Ok(())
    }
}

impl TokenLedger for InMemoryTokenLedger {
    fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> u64 {
        self.total_supply
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        self.move_tokens(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Pubkey,
        owner: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let approved = self.allowance(owner, spender);
        if approved < amount {
            return Err(LedgerError::InsufficientAllowance {
                required: amount,
                approved,
            });
        }
        self.move_tokens(owner, to, amount)?;
        self.allowances.insert((*owner, *spender), approved - amount);
        Ok(())
    }
}
