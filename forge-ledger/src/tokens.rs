//! Token identifiers and the fixed game economy.
//!
//! The id values are part of the public interface: clients and indexers key
//! balances by these numbers, so they never change between versions.

pub type TokenId = u64;

// ─── Currencies ─────────────────────────────────────────────────────────────

pub const ENERGY: TokenId = 1;
pub const GOLD: TokenId = 2;

// ─── Swords ─────────────────────────────────────────────────────────────────

pub const COMMON_SWORD: TokenId = 1001;
pub const RARE_SWORD: TokenId = 1002;
pub const EPIC_SWORD: TokenId = 1003;

/// The five legendary variants, each craftable once per account.
pub const LEGENDARY_VARIANTS: [TokenId; 5] = [2001, 2002, 2003, 2004, 2005];

/// Every token id the ledger knows about, in ascending order.
/// Resets zero exactly this set.
pub const KNOWN_TOKEN_IDS: [TokenId; 10] = [
    ENERGY,
    GOLD,
    COMMON_SWORD,
    RARE_SWORD,
    EPIC_SWORD,
    2001,
    2002,
    2003,
    2004,
    2005,
];

// ─── Economy parameters ─────────────────────────────────────────────────────

pub const STARTER_ENERGY: u128 = 10;
pub const STARTER_GOLD: u128 = 100;
pub const STARTER_COMMON_SWORDS: u128 = 1;

pub const DUNGEON_ENERGY_COST: u128 = 1;

pub const RARE_RECIPE_COMMON_COST: u128 = 3;
pub const EPIC_RECIPE_RARE_COST: u128 = 2;
pub const LEGENDARY_RECIPE_EPIC_COST: u128 = 5;
pub const LEGENDARY_RECIPE_GOLD_COST: u128 = 1000;

pub const DEFAULT_REWARD_COOLDOWN_SECONDS: u64 = 86_400;

pub fn is_legendary_variant(variant_id: TokenId) -> bool {
    LEGENDARY_VARIANTS.contains(&variant_id)
}

pub fn is_known_token(token_id: TokenId) -> bool {
    KNOWN_TOKEN_IDS.contains(&token_id)
}

/// Human-readable label used in response attributes.
pub fn token_name(token_id: TokenId) -> &'static str {
    match token_id {
        ENERGY => "energy",
        GOLD => "gold",
        COMMON_SWORD => "common_sword",
        RARE_SWORD => "rare_sword",
        EPIC_SWORD => "epic_sword",
        id if is_legendary_variant(id) => "legendary_sword",
        _ => "unknown",
    }
}
