//! Player registry: every account that has committed a state-changing
//! operation, kept in first-seen order for deterministic bulk iteration.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{PLAYERS, PLAYER_COUNT, PLAYER_INDEX};

pub fn count(storage: &dyn Storage) -> StdResult<u64> {
    Ok(PLAYER_COUNT.may_load(storage)?.unwrap_or_default())
}

pub fn is_tracked(storage: &dyn Storage, account: &Addr) -> StdResult<bool> {
    Ok(PLAYER_INDEX.may_load(storage, account)?.is_some())
}

/// Append `account` if it is not yet a member. Returns whether it was added.
pub fn track(storage: &mut dyn Storage, account: &Addr) -> StdResult<bool> {
    if is_tracked(storage, account)? {
        return Ok(false);
    }
    let index = count(storage)?;
    PLAYERS.save(storage, index, account)?;
    PLAYER_INDEX.save(storage, account, &index)?;
    PLAYER_COUNT.save(storage, &(index + 1))?;
    Ok(true)
}

pub fn player_at(storage: &dyn Storage, index: u64) -> Result<Addr, ContractError> {
    let count = count(storage)?;
    if index >= count {
        return Err(ContractError::IndexOutOfRange { index, count });
    }
    Ok(PLAYERS.load(storage, index)?)
}

/// Up to `limit` accounts starting at registry position `start`, in order.
pub fn range(storage: &dyn Storage, start: u64, limit: usize) -> StdResult<Vec<(u64, Addr)>> {
    PLAYERS
        .range(storage, Some(Bound::inclusive(start)), None, Order::Ascending)
        .take(limit)
        .collect()
}
