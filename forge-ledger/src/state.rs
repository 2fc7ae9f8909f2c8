use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    /// The single authority allowed to mint and reset
    pub owner: Addr,
    /// Whether player operations are frozen
    pub paused: bool,
    /// Minimum seconds between two time-reward claims of the same account
    pub reward_cooldown_seconds: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// (account, token_id) -> quantity. Absent keys read as zero.
pub const BALANCES: Map<(&Addr, u64), Uint128> = Map::new("balances");

/// account -> starter pack claimed
pub const STARTER_CLAIMED: Map<&Addr, bool> = Map::new("starter_claimed");

/// (account, variant_id) -> legendary crafted
pub const LEGENDARY_CRAFTED: Map<(&Addr, u64), bool> = Map::new("legendary_crafted");

/// account -> unix seconds of the last successful time-reward claim
pub const LAST_REWARD: Map<&Addr, u64> = Map::new("last_reward");

// Player registry: insertion-ordered sequence plus membership index.

/// index -> account
pub const PLAYERS: Map<u64, Addr> = Map::new("players");
/// account -> index
pub const PLAYER_INDEX: Map<&Addr, u64> = Map::new("player_idx");
pub const PLAYER_COUNT: Item<u64> = Item::new("player_count");

/// Monotonic counter mixed into block-derived entropy so that two draws in
/// the same block never collide.
pub const DRAW_COUNT: Item<u64> = Item::new("draw_count");

/// token_id -> total minted minus total burned
pub const TOTAL_SUPPLY: Map<u64, Uint128> = Map::new("total_supply");
