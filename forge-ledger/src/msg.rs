use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Authority for minting, resets and configuration
    pub owner: String,
    /// Seconds between time-reward claims; defaults to one day
    pub reward_cooldown_seconds: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// One-time grant of 10 energy, 100 gold and a common sword
    ClaimStarterPack {},
    /// Spend 1 energy for a sword of random tier and 20-50 gold
    RunDungeon {},
    /// Burn 3 common swords for 1 rare sword
    CraftRareSword {},
    /// Burn 2 rare swords for 1 epic sword
    CraftEpicSword {},
    /// Burn 5 epic swords and 1000 gold for a legendary variant (2001-2005),
    /// once per variant
    CraftLegendarySword { variant_id: u64 },
    /// Claim 5-10 gold and 1-2 energy, at most once per cooldown period
    ClaimTimeReward {},

    /// Mint energy to any account (owner only)
    MintEnergy { account: String, amount: Uint128 },
    /// Mint gold to any account (owner only)
    MintGold { account: String, amount: Uint128 },
    /// Zero every balance and claim marker of one account (owner only)
    ResetAccount { account: String },
    /// Reset each listed account in order (owner only)
    ResetAccounts { accounts: Vec<String> },
    /// Reset every tracked player in registry order (owner only)
    ResetAllTracked {},
    /// Reset `limit` tracked players starting at registry position
    /// `start_index` (owner only)
    ResetTrackedPage { start_index: u64, limit: u32 },

    /// Update configuration (owner only)
    UpdateConfig { reward_cooldown_seconds: Option<u64> },
    /// Freeze player operations (owner only)
    Pause {},
    /// Unfreeze player operations (owner only)
    Unpause {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},

    #[returns(BalanceResponse)]
    BalanceOf { account: String, token_id: u64 },

    #[returns(BalancesResponse)]
    BalanceOfBatch { account: String, token_ids: Vec<u64> },

    /// Balances of every known token id
    #[returns(BalancesResponse)]
    Balances { account: String },

    #[returns(SupplyResponse)]
    Supply { token_id: u64 },

    #[returns(StarterPackResponse)]
    HasClaimedStarterPack { account: String },

    #[returns(LegendaryCraftedResponse)]
    HasCraftedLegendary { account: String, variant_id: u64 },

    #[returns(LastRewardResponse)]
    LastRewardTimestamp { account: String },

    #[returns(PlayerCountResponse)]
    PlayerCount {},

    #[returns(PlayerResponse)]
    PlayerAt { index: u64 },

    /// Registry listing by position
    #[returns(PlayersResponse)]
    Players {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(PlayerInfoResponse)]
    PlayerInfo { account: String },
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct TokenBalance {
    pub token_id: u64,
    pub balance: Uint128,
}

#[cw_serde]
pub struct BalancesResponse {
    pub balances: Vec<TokenBalance>,
}

#[cw_serde]
pub struct SupplyResponse {
    pub token_id: u64,
    pub supply: Uint128,
}

#[cw_serde]
pub struct StarterPackResponse {
    pub claimed: bool,
}

#[cw_serde]
pub struct LegendaryCraftedResponse {
    pub crafted: bool,
}

#[cw_serde]
pub struct LastRewardResponse {
    /// Zero if the account never claimed
    pub timestamp: u64,
    pub next_claim_at: Option<u64>,
}

#[cw_serde]
pub struct PlayerCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct PlayerResponse {
    pub index: u64,
    pub account: Addr,
}

#[cw_serde]
pub struct PlayersResponse {
    pub players: Vec<PlayerResponse>,
}

#[cw_serde]
pub struct PlayerInfoResponse {
    pub account: Addr,
    pub tracked: bool,
    pub balances: Vec<TokenBalance>,
    pub starter_pack_claimed: bool,
    pub legendaries_crafted: Vec<u64>,
    pub last_reward_timestamp: u64,
    pub next_reward_at: Option<u64>,
}

#[cw_serde]
pub struct MigrateMsg {}
