//! Per-account claim markers: the starter pack, the five legendary crafts
//! and the last time-reward claim.

use cosmwasm_std::{Addr, StdResult, Storage};

use crate::state::{LAST_REWARD, LEGENDARY_CRAFTED, STARTER_CLAIMED};
use crate::tokens::{TokenId, LEGENDARY_VARIANTS};

pub fn has_claimed_starter_pack(storage: &dyn Storage, account: &Addr) -> StdResult<bool> {
    Ok(STARTER_CLAIMED
        .may_load(storage, account)?
        .unwrap_or(false))
}

pub fn mark_starter_pack(storage: &mut dyn Storage, account: &Addr) -> StdResult<()> {
    STARTER_CLAIMED.save(storage, account, &true)
}

pub fn has_crafted_legendary(
    storage: &dyn Storage,
    account: &Addr,
    variant_id: TokenId,
) -> StdResult<bool> {
    Ok(LEGENDARY_CRAFTED
        .may_load(storage, (account, variant_id))?
        .unwrap_or(false))
}

pub fn mark_legendary(
    storage: &mut dyn Storage,
    account: &Addr,
    variant_id: TokenId,
) -> StdResult<()> {
    LEGENDARY_CRAFTED.save(storage, (account, variant_id), &true)
}

/// Zero means the account has never claimed.
pub fn last_reward_timestamp(storage: &dyn Storage, account: &Addr) -> StdResult<u64> {
    Ok(LAST_REWARD.may_load(storage, account)?.unwrap_or_default())
}

pub fn set_last_reward_timestamp(
    storage: &mut dyn Storage,
    account: &Addr,
    now: u64,
) -> StdResult<()> {
    LAST_REWARD.save(storage, account, &now)
}

/// Every legendary variant the account has crafted, ascending.
pub fn crafted_legendaries(storage: &dyn Storage, account: &Addr) -> StdResult<Vec<TokenId>> {
    let mut crafted = Vec::new();
    for variant_id in LEGENDARY_VARIANTS {
        if has_crafted_legendary(storage, account, variant_id)? {
            crafted.push(variant_id);
        }
    }
    Ok(crafted)
}

/// Back to defaults: no starter pack, no legendaries, never rewarded.
pub fn clear_all(storage: &mut dyn Storage, account: &Addr) {
    STARTER_CLAIMED.remove(storage, account);
    for variant_id in LEGENDARY_VARIANTS {
        LEGENDARY_CRAFTED.remove(storage, (account, variant_id));
    }
    LAST_REWARD.remove(storage, account);
}
