//! Ledger store and the per-operation transaction that stages changes to it.
//!
//! Operations never write balances directly. They open a [`LedgerTx`], stage
//! every mint and burn against it (each step checked against the staged
//! balance, not the stored one), and call [`LedgerTx::commit`] only once all
//! preconditions hold. A rejected operation drops the transaction and storage
//! is left untouched.

use std::collections::BTreeMap;

use cosmwasm_std::{Addr, Event, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::registry;
use crate::state::{BALANCES, TOTAL_SUPPLY};
use crate::tokens::{token_name, TokenId};

pub fn balance_of(storage: &dyn Storage, account: &Addr, token_id: TokenId) -> StdResult<Uint128> {
    Ok(BALANCES
        .may_load(storage, (account, token_id))?
        .unwrap_or_default())
}

pub fn total_supply(storage: &dyn Storage, token_id: TokenId) -> StdResult<Uint128> {
    Ok(TOTAL_SUPPLY.may_load(storage, token_id)?.unwrap_or_default())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaKind {
    Mint,
    Burn,
}

impl DeltaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaKind::Mint => "mint",
            DeltaKind::Burn => "burn",
        }
    }
}

/// One committed balance change, reported back to clients as an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delta {
    pub account: Addr,
    pub token_id: TokenId,
    pub kind: DeltaKind,
    pub amount: Uint128,
}

impl Delta {
    pub fn to_event(&self) -> Event {
        Event::new("ledger_delta")
            .add_attribute("account", self.account.as_str())
            .add_attribute("token_id", self.token_id.to_string())
            .add_attribute("token", token_name(self.token_id))
            .add_attribute("kind", self.kind.as_str())
            .add_attribute("amount", self.amount.to_string())
    }
}

pub fn delta_events(deltas: &[Delta]) -> Vec<Event> {
    deltas.iter().map(Delta::to_event).collect()
}

#[derive(Debug, Default)]
pub struct LedgerTx {
    balances: BTreeMap<(Addr, TokenId), Uint128>,
    supply: BTreeMap<TokenId, Uint128>,
    deltas: Vec<Delta>,
    tracked: Vec<Addr>,
}

impl LedgerTx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance as it would be after committing what has been staged so far.
    pub fn balance(
        &self,
        storage: &dyn Storage,
        account: &Addr,
        token_id: TokenId,
    ) -> StdResult<Uint128> {
        match self.balances.get(&(account.clone(), token_id)) {
            Some(staged) => Ok(*staged),
            None => balance_of(storage, account, token_id),
        }
    }

    fn supply(&self, storage: &dyn Storage, token_id: TokenId) -> StdResult<Uint128> {
        match self.supply.get(&token_id) {
            Some(staged) => Ok(*staged),
            None => total_supply(storage, token_id),
        }
    }

    /// Queue `account` for registry membership on commit.
    pub fn track(&mut self, account: &Addr) {
        if !self.tracked.contains(account) {
            self.tracked.push(account.clone());
        }
    }

    pub fn mint(
        &mut self,
        storage: &dyn Storage,
        account: &Addr,
        token_id: TokenId,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        if amount.is_zero() {
            return Err(ContractError::ZeroAmount);
        }

        let balance = self
            .balance(storage, account, token_id)?
            .checked_add(amount)
            .map_err(|_| ContractError::Overflow)?;
        let supply = self
            .supply(storage, token_id)?
            .checked_add(amount)
            .map_err(|_| ContractError::Overflow)?;

        self.balances.insert((account.clone(), token_id), balance);
        self.supply.insert(token_id, supply);
        self.deltas.push(Delta {
            account: account.clone(),
            token_id,
            kind: DeltaKind::Mint,
            amount,
        });
        Ok(())
    }

    /// Never clamps: a burn larger than the staged balance rejects the
    /// whole transaction.
    pub fn burn(
        &mut self,
        storage: &dyn Storage,
        account: &Addr,
        token_id: TokenId,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        if amount.is_zero() {
            return Err(ContractError::ZeroAmount);
        }

        let current = self.balance(storage, account, token_id)?;
        if current < amount {
            return Err(ContractError::InsufficientBalance {
                token_id,
                required: amount.to_string(),
                available: current.to_string(),
            });
        }
        let balance = current
            .checked_sub(amount)
            .map_err(|_| ContractError::Underflow)?;
        let supply = self
            .supply(storage, token_id)?
            .checked_sub(amount)
            .map_err(|_| ContractError::Underflow)?;

        self.balances.insert((account.clone(), token_id), balance);
        self.supply.insert(token_id, supply);
        self.deltas.push(Delta {
            account: account.clone(),
            token_id,
            kind: DeltaKind::Burn,
            amount,
        });
        Ok(())
    }

    /// Burn whatever `account` holds of `token_id`. Zero holdings are a no-op.
    pub fn burn_all(
        &mut self,
        storage: &dyn Storage,
        account: &Addr,
        token_id: TokenId,
    ) -> Result<Uint128, ContractError> {
        let current = self.balance(storage, account, token_id)?;
        if !current.is_zero() {
            self.burn(storage, account, token_id, current)?;
        }
        Ok(current)
    }

    pub fn deltas(&self) -> &[Delta] {
        &self.deltas
    }

    /// Write every staged balance, supply and registry entry.
    pub fn commit(self, storage: &mut dyn Storage) -> StdResult<Vec<Delta>> {
        for ((account, token_id), amount) in &self.balances {
            if amount.is_zero() {
                BALANCES.remove(storage, (account, *token_id));
            } else {
                BALANCES.save(storage, (account, *token_id), amount)?;
            }
        }
        for (token_id, amount) in &self.supply {
            TOTAL_SUPPLY.save(storage, *token_id, amount)?;
        }
        for account in &self.tracked {
            registry::track(storage, account)?;
        }
        Ok(self.deltas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{COMMON_SWORD, ENERGY, GOLD};
    use cosmwasm_std::testing::MockStorage;

    fn alice() -> Addr {
        Addr::unchecked("alice")
    }

    #[test]
    fn unseen_balance_is_zero() {
        let storage = MockStorage::new();
        assert_eq!(balance_of(&storage, &alice(), GOLD).unwrap(), Uint128::zero());
        assert_eq!(total_supply(&storage, GOLD).unwrap(), Uint128::zero());
    }

    #[test]
    fn staged_changes_are_invisible_until_commit() {
        let mut storage = MockStorage::new();
        let mut tx = LedgerTx::new();
        tx.mint(&storage, &alice(), GOLD, Uint128::new(50)).unwrap();
        tx.burn(&storage, &alice(), GOLD, Uint128::new(20)).unwrap();

        assert_eq!(tx.balance(&storage, &alice(), GOLD).unwrap(), Uint128::new(30));
        assert_eq!(balance_of(&storage, &alice(), GOLD).unwrap(), Uint128::zero());

        let deltas = tx.commit(&mut storage).unwrap();
        assert_eq!(deltas.len(), 2);
        assert_eq!(balance_of(&storage, &alice(), GOLD).unwrap(), Uint128::new(30));
        assert_eq!(total_supply(&storage, GOLD).unwrap(), Uint128::new(30));
    }

    #[test]
    fn burn_never_clamps() {
        let storage = MockStorage::new();
        let mut tx = LedgerTx::new();
        tx.mint(&storage, &alice(), COMMON_SWORD, Uint128::new(2)).unwrap();

        let err = tx
            .burn(&storage, &alice(), COMMON_SWORD, Uint128::new(3))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientBalance {
                token_id: COMMON_SWORD,
                required: "3".to_string(),
                available: "2".to_string(),
            }
        );
        assert_eq!(
            tx.balance(&storage, &alice(), COMMON_SWORD).unwrap(),
            Uint128::new(2)
        );
    }

    #[test]
    fn mint_overflow_is_rejected() {
        let storage = MockStorage::new();
        let mut tx = LedgerTx::new();
        tx.mint(&storage, &alice(), ENERGY, Uint128::MAX).unwrap();
        let err = tx.mint(&storage, &alice(), ENERGY, Uint128::one()).unwrap_err();
        assert_eq!(err, ContractError::Overflow);
    }

    #[test]
    fn zero_amounts_are_rejected() {
        let storage = MockStorage::new();
        let mut tx = LedgerTx::new();
        assert_eq!(
            tx.mint(&storage, &alice(), GOLD, Uint128::zero()).unwrap_err(),
            ContractError::ZeroAmount
        );
        assert_eq!(
            tx.burn(&storage, &alice(), GOLD, Uint128::zero()).unwrap_err(),
            ContractError::ZeroAmount
        );
    }

    #[test]
    fn burn_all_of_nothing_is_a_noop() {
        let mut storage = MockStorage::new();
        let mut tx = LedgerTx::new();
        assert_eq!(
            tx.burn_all(&storage, &alice(), GOLD).unwrap(),
            Uint128::zero()
        );
        assert!(tx.deltas().is_empty());
        tx.commit(&mut storage).unwrap();
        assert!(BALANCES
            .may_load(&storage, (&alice(), GOLD))
            .unwrap()
            .is_none());
    }

    #[test]
    fn commit_tracks_accounts_once() {
        let mut storage = MockStorage::new();
        let mut tx = LedgerTx::new();
        tx.track(&alice());
        tx.track(&alice());
        tx.commit(&mut storage).unwrap();
        assert_eq!(registry::count(&storage).unwrap(), 1);
    }

    #[test]
    fn delta_event_attributes() {
        let delta = Delta {
            account: alice(),
            token_id: GOLD,
            kind: DeltaKind::Burn,
            amount: Uint128::new(7),
        };
        let event = delta.to_event();
        assert_eq!(event.ty, "ledger_delta");
        let attr = |key: &str| {
            event
                .attributes
                .iter()
                .find(|a| a.key == key)
                .map(|a| a.value.clone())
                .unwrap()
        };
        assert_eq!(attr("token_id"), "2");
        assert_eq!(attr("token"), "gold");
        assert_eq!(attr("kind"), "burn");
        assert_eq!(attr("amount"), "7");
    }
}
