use cosmwasm_std::{Addr, Env, Uint256};
use sha2::{Digest, Sha256};

use crate::tokens::{TokenId, COMMON_SWORD, EPIC_SWORD, RARE_SWORD};

/// Roll below this is Common.
pub const COMMON_CEILING: u8 = 70;
/// Roll below this (and at least [`COMMON_CEILING`]) is Rare; the rest is Epic.
pub const RARE_CEILING: u8 = 90;

pub const DUNGEON_GOLD_BASE: u128 = 20;
pub const DUNGEON_GOLD_SPREAD: u8 = 31;

pub const REWARD_GOLD_BASE: u128 = 5;
pub const REWARD_GOLD_SPREAD: u32 = 6;
pub const REWARD_ENERGY_BASE: u128 = 1;
pub const REWARD_ENERGY_SPREAD: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LootTier {
    Common,
    Rare,
    Epic,
}

impl LootTier {
    /// Sword minted for this tier.
    pub fn sword(&self) -> TokenId {
        match self {
            LootTier::Common => COMMON_SWORD,
            LootTier::Rare => RARE_SWORD,
            LootTier::Epic => EPIC_SWORD,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LootTier::Common => "common",
            LootTier::Rare => "rare",
            LootTier::Epic => "epic",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LootRoll {
    /// `entropy mod 100`
    pub roll: u8,
    pub tier: LootTier,
    pub gold: u128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeReward {
    pub gold: u128,
    pub energy: u128,
}

/// `entropy mod modulus` for a modulus small enough to fit a byte.
fn small_rem(entropy: Uint256, modulus: u32) -> u8 {
    let rem = entropy % Uint256::from(modulus);
    rem.to_be_bytes()[31]
}

/// Map entropy to a dungeon outcome: 70/20/10 tier odds and 20..=50 gold.
pub fn roll_loot(entropy: Uint256) -> LootRoll {
    let roll = small_rem(entropy, 100);
    let tier = if roll < COMMON_CEILING {
        LootTier::Common
    } else if roll < RARE_CEILING {
        LootTier::Rare
    } else {
        LootTier::Epic
    };
    let gold = DUNGEON_GOLD_BASE + u128::from(roll % DUNGEON_GOLD_SPREAD);
    LootRoll { roll, tier, gold }
}

/// Map entropy to a time reward: 5..=10 gold and 1..=2 energy.
pub fn roll_time_reward(entropy: Uint256) -> TimeReward {
    TimeReward {
        gold: REWARD_GOLD_BASE + u128::from(small_rem(entropy, REWARD_GOLD_SPREAD)),
        energy: REWARD_ENERGY_BASE + u128::from(small_rem(entropy, REWARD_ENERGY_SPREAD)),
    }
}

// ─── Entropy sources ────────────────────────────────────────────────────────

/// Supplies the wide random-looking value consumed by loot and reward rolls.
///
/// `nonce` is unique per draw within the contract, so a source that only
/// looks at block context still yields distinct values for two draws in the
/// same block.
pub trait EntropySource {
    fn draw(&self, env: &Env, account: &Addr, domain: &str, nonce: u64) -> Uint256;
}

/// Hash of the executing block and transaction context.
///
/// Block producers can observe and influence these inputs, so a player
/// colluding with one can bias outcomes. Swap in a verifiable source where
/// that matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockEntropy;

impl EntropySource for BlockEntropy {
    fn draw(&self, env: &Env, account: &Addr, domain: &str, nonce: u64) -> Uint256 {
        let mut hasher = Sha256::new();
        hasher.update(domain.as_bytes());
        hasher.update(env.block.chain_id.as_bytes());
        hasher.update(env.block.height.to_be_bytes());
        hasher.update(env.block.time.nanos().to_be_bytes());
        if let Some(tx) = &env.transaction {
            hasher.update(tx.index.to_be_bytes());
        }
        hasher.update(env.contract.address.as_str().as_bytes());
        hasher.update(account.as_str().as_bytes());
        hasher.update(nonce.to_be_bytes());

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hasher.finalize());
        Uint256::from_be_bytes(bytes)
    }
}

/// Always returns the same value. Used to drive deterministic outcomes.
#[derive(Clone, Copy, Debug)]
pub struct FixedEntropy(pub Uint256);

impl EntropySource for FixedEntropy {
    fn draw(&self, _env: &Env, _account: &Addr, _domain: &str, _nonce: u64) -> Uint256 {
        self.0
    }
}
