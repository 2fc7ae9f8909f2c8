use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Storage, Uint128,
};
use cw2::set_contract_version;

use crate::crafting::{stage_craft, Recipe};
use crate::error::ContractError;
use crate::flags::{
    clear_all, crafted_legendaries, has_claimed_starter_pack, has_crafted_legendary,
    last_reward_timestamp, mark_legendary, mark_starter_pack, set_last_reward_timestamp,
};
use crate::helpers::{authorize, validate_cooldown, Role};
use crate::ledger::{balance_of, delta_events, total_supply, Delta, LedgerTx};
use crate::loot::{roll_loot, roll_time_reward, BlockEntropy, EntropySource};
use crate::msg::{
    BalanceResponse, BalancesResponse, ExecuteMsg, InstantiateMsg, LastRewardResponse,
    LegendaryCraftedResponse, MigrateMsg, PlayerCountResponse, PlayerInfoResponse,
    PlayerResponse, PlayersResponse, QueryMsg, StarterPackResponse, SupplyResponse,
    TokenBalance,
};
use crate::registry;
use crate::schedule::{ensure_cooldown_elapsed, next_claim_at};
use crate::state::{Config, CONFIG, DRAW_COUNT, PLAYER_COUNT};
use crate::tokens::{
    is_legendary_variant, TokenId, COMMON_SWORD, DEFAULT_REWARD_COOLDOWN_SECONDS,
    DUNGEON_ENERGY_COST, ENERGY, GOLD, KNOWN_TOKEN_IDS, STARTER_COMMON_SWORDS, STARTER_ENERGY,
    STARTER_GOLD,
};

const CONTRACT_NAME: &str = "crates.io:forge-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let reward_cooldown_seconds = validate_cooldown(
        msg.reward_cooldown_seconds
            .unwrap_or(DEFAULT_REWARD_COOLDOWN_SECONDS),
    )?;

    let config = Config {
        owner,
        paused: false,
        reward_cooldown_seconds,
    };
    CONFIG.save(deps.storage, &config)?;
    PLAYER_COUNT.save(deps.storage, &0u64)?;
    DRAW_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("owner", config.owner.as_str())
        .add_attribute(
            "reward_cooldown_seconds",
            reward_cooldown_seconds.to_string(),
        ))
}

// ─── Execute ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ClaimStarterPack {} => execute_claim_starter_pack(deps, env, info),
        ExecuteMsg::RunDungeon {} => execute_run_dungeon(deps, env, info),
        ExecuteMsg::CraftRareSword {} => execute_craft_rare_sword(deps, env, info),
        ExecuteMsg::CraftEpicSword {} => execute_craft_epic_sword(deps, env, info),
        ExecuteMsg::CraftLegendarySword { variant_id } => {
            execute_craft_legendary_sword(deps, env, info, variant_id)
        }
        ExecuteMsg::ClaimTimeReward {} => execute_claim_time_reward(deps, env, info),
        ExecuteMsg::MintEnergy { account, amount } => {
            execute_mint_energy(deps, env, info, account, amount)
        }
        ExecuteMsg::MintGold { account, amount } => {
            execute_mint_gold(deps, env, info, account, amount)
        }
        ExecuteMsg::ResetAccount { account } => execute_reset_account(deps, env, info, account),
        ExecuteMsg::ResetAccounts { accounts } => {
            execute_reset_accounts(deps, env, info, accounts)
        }
        ExecuteMsg::ResetAllTracked {} => execute_reset_all_tracked(deps, env, info),
        ExecuteMsg::ResetTrackedPage { start_index, limit } => {
            execute_reset_tracked_page(deps, env, info, start_index, limit)
        }
        ExecuteMsg::UpdateConfig {
            reward_cooldown_seconds,
        } => execute_update_config(deps, env, info, reward_cooldown_seconds),
        ExecuteMsg::Pause {} => execute_pause(deps, env, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, env, info),
    }
}

/// Reserve the next draw index. Only persisted by [`finish_draw`] once the
/// operation has committed.
fn next_draw(storage: &dyn Storage) -> StdResult<u64> {
    Ok(DRAW_COUNT.may_load(storage)?.unwrap_or_default())
}

fn finish_draw(storage: &mut dyn Storage, nonce: u64) -> StdResult<()> {
    DRAW_COUNT.save(storage, &nonce.wrapping_add(1))
}

// ─── Execute: Player ────────────────────────────────────────────────────────

pub fn execute_claim_starter_pack(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Player)?;
    let player = info.sender;

    let mut tx = LedgerTx::new();
    tx.track(&player);

    if has_claimed_starter_pack(deps.storage, &player)? {
        return Err(ContractError::AlreadyClaimed);
    }

    tx.mint(deps.storage, &player, ENERGY, Uint128::new(STARTER_ENERGY))?;
    tx.mint(deps.storage, &player, GOLD, Uint128::new(STARTER_GOLD))?;
    tx.mint(
        deps.storage,
        &player,
        COMMON_SWORD,
        Uint128::new(STARTER_COMMON_SWORDS),
    )?;

    let deltas = tx.commit(deps.storage)?;
    mark_starter_pack(deps.storage, &player)?;

    Ok(Response::new()
        .add_events(delta_events(&deltas))
        .add_attribute("action", "claim_starter_pack")
        .add_attribute("player", player.as_str()))
}

pub fn execute_run_dungeon(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    execute_run_dungeon_with(deps, env, info, &BlockEntropy)
}

/// Dungeon run with an explicit entropy source.
pub fn execute_run_dungeon_with(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    entropy: &dyn EntropySource,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Player)?;
    let player = info.sender;

    let mut tx = LedgerTx::new();
    tx.track(&player);
    tx.burn(
        deps.storage,
        &player,
        ENERGY,
        Uint128::new(DUNGEON_ENERGY_COST),
    )?;

    let nonce = next_draw(deps.storage)?;
    let loot = roll_loot(entropy.draw(&env, &player, "dungeon", nonce));

    tx.mint(deps.storage, &player, loot.tier.sword(), Uint128::one())?;
    tx.mint(deps.storage, &player, GOLD, Uint128::new(loot.gold))?;

    let deltas = tx.commit(deps.storage)?;
    finish_draw(deps.storage, nonce)?;

    Ok(Response::new()
        .add_events(delta_events(&deltas))
        .add_attribute("action", "run_dungeon")
        .add_attribute("player", player.as_str())
        .add_attribute("roll", loot.roll.to_string())
        .add_attribute("tier", loot.tier.as_str())
        .add_attribute("gold", loot.gold.to_string()))
}

fn execute_craft(
    deps: DepsMut,
    info: MessageInfo,
    recipe: Recipe,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Player)?;
    let player = info.sender;

    let mut tx = LedgerTx::new();
    tx.track(&player);
    let plan = stage_craft(deps.storage, &mut tx, &player, recipe)?;

    let deltas = tx.commit(deps.storage)?;
    if let Some(variant_id) = plan.legendary_variant {
        mark_legendary(deps.storage, &player, variant_id)?;
    }

    Ok(Response::new()
        .add_events(delta_events(&deltas))
        .add_attribute("action", "craft")
        .add_attribute("recipe", recipe.name())
        .add_attribute("player", player.as_str())
        .add_attribute("produced", plan.produces.to_string()))
}

pub fn execute_craft_rare_sword(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    execute_craft(deps, info, Recipe::Rare)
}

pub fn execute_craft_epic_sword(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    execute_craft(deps, info, Recipe::Epic)
}

pub fn execute_craft_legendary_sword(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    variant_id: TokenId,
) -> Result<Response, ContractError> {
    execute_craft(deps, info, Recipe::Legendary { variant_id })
}

pub fn execute_claim_time_reward(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    execute_claim_time_reward_with(deps, env, info, &BlockEntropy)
}

/// Time-reward claim with an explicit entropy source. `now` is the block time.
pub fn execute_claim_time_reward_with(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    entropy: &dyn EntropySource,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Player)?;
    let player = info.sender;
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();

    let last = last_reward_timestamp(deps.storage, &player)?;
    ensure_cooldown_elapsed(last, now, config.reward_cooldown_seconds)?;

    let mut tx = LedgerTx::new();
    tx.track(&player);

    let nonce = next_draw(deps.storage)?;
    let reward = roll_time_reward(entropy.draw(&env, &player, "time_reward", nonce));

    tx.mint(deps.storage, &player, GOLD, Uint128::new(reward.gold))?;
    tx.mint(deps.storage, &player, ENERGY, Uint128::new(reward.energy))?;

    let deltas = tx.commit(deps.storage)?;
    set_last_reward_timestamp(deps.storage, &player, now)?;
    finish_draw(deps.storage, nonce)?;

    let next = next_claim_at(now, config.reward_cooldown_seconds)
        .map(|t| t.to_string())
        .unwrap_or_else(|| "never".to_string());

    Ok(Response::new()
        .add_events(delta_events(&deltas))
        .add_attribute("action", "claim_time_reward")
        .add_attribute("player", player.as_str())
        .add_attribute("gold", reward.gold.to_string())
        .add_attribute("energy", reward.energy.to_string())
        .add_attribute("claimed_at", now.to_string())
        .add_attribute("next_claim_at", next))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

fn admin_mint(
    deps: DepsMut,
    info: MessageInfo,
    action: &str,
    account: String,
    token_id: TokenId,
    amount: Uint128,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Owner)?;
    let account = deps.api.addr_validate(&account)?;

    let mut tx = LedgerTx::new();
    tx.track(&account);
    tx.mint(deps.storage, &account, token_id, amount)?;
    let deltas = tx.commit(deps.storage)?;

    Ok(Response::new()
        .add_events(delta_events(&deltas))
        .add_attribute("action", action)
        .add_attribute("account", account.as_str())
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_mint_energy(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    account: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    admin_mint(deps, info, "mint_energy", account, ENERGY, amount)
}

pub fn execute_mint_gold(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    account: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    admin_mint(deps, info, "mint_gold", account, GOLD, amount)
}

/// Burn every known balance of `account` and clear its claim markers.
/// Registry membership is kept.
fn reset_account(storage: &mut dyn Storage, account: &Addr) -> Result<Vec<Delta>, ContractError> {
    let mut tx = LedgerTx::new();
    for token_id in KNOWN_TOKEN_IDS {
        tx.burn_all(&*storage, account, token_id)?;
    }
    let deltas = tx.commit(storage)?;
    clear_all(storage, account);
    Ok(deltas)
}

#[derive(Default)]
struct ResetBatch {
    reset: u64,
    failed: Vec<Addr>,
    deltas: Vec<Delta>,
}

impl ResetBatch {
    /// Each account is reset on its own; one failure does not stop the rest.
    fn run(storage: &mut dyn Storage, accounts: &[Addr]) -> Self {
        let mut batch = ResetBatch::default();
        for account in accounts {
            match reset_account(storage, account) {
                Ok(deltas) => {
                    batch.reset += 1;
                    batch.deltas.extend(deltas);
                }
                Err(_) => batch.failed.push(account.clone()),
            }
        }
        batch
    }

    fn into_response(self, action: &str) -> Response {
        let failed = self
            .failed
            .iter()
            .map(Addr::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Response::new()
            .add_events(delta_events(&self.deltas))
            .add_attribute("action", action)
            .add_attribute("reset_count", self.reset.to_string())
            .add_attribute("failed_count", self.failed.len().to_string())
            .add_attribute("failed_accounts", failed)
    }
}

pub fn execute_reset_account(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    account: String,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Owner)?;
    let account = deps.api.addr_validate(&account)?;

    let deltas = reset_account(deps.storage, &account)?;

    Ok(Response::new()
        .add_events(delta_events(&deltas))
        .add_attribute("action", "reset_account")
        .add_attribute("account", account.as_str()))
}

pub fn execute_reset_accounts(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    accounts: Vec<String>,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Owner)?;

    // Validate all addresses upfront
    let accounts = accounts
        .iter()
        .map(|a| deps.api.addr_validate(a))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ResetBatch::run(deps.storage, &accounts).into_response("reset_accounts"))
}

pub fn execute_reset_all_tracked(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Owner)?;

    let accounts: Vec<Addr> = registry::range(deps.storage, 0, usize::MAX)?
        .into_iter()
        .map(|(_, account)| account)
        .collect();

    Ok(ResetBatch::run(deps.storage, &accounts).into_response("reset_all_tracked"))
}

pub fn execute_reset_tracked_page(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    start_index: u64,
    limit: u32,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Owner)?;

    let page = registry::range(deps.storage, start_index, limit as usize)?;
    let next_index = page
        .last()
        .map(|(index, _)| index + 1)
        .unwrap_or(start_index);
    let accounts: Vec<Addr> = page.into_iter().map(|(_, account)| account).collect();
    let count = registry::count(deps.storage)?;

    Ok(ResetBatch::run(deps.storage, &accounts)
        .into_response("reset_tracked_page")
        .add_attribute("next_index", next_index.to_string())
        .add_attribute("done", (next_index >= count).to_string()))
}

pub fn execute_update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    reward_cooldown_seconds: Option<u64>,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Owner)?;

    let cooldown = reward_cooldown_seconds.map(validate_cooldown).transpose()?;
    let config = CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        if let Some(v) = cooldown {
            c.reward_cooldown_seconds = v;
        }
        Ok(c)
    })?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute(
            "reward_cooldown_seconds",
            config.reward_cooldown_seconds.to_string(),
        ))
}

pub fn execute_pause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Owner)?;

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.paused = true;
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn execute_unpause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    authorize(deps.as_ref(), &info, Role::Owner)?;

    let config = CONFIG.load(deps.storage)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.paused = false;
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

// ─── Queries ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::BalanceOf { account, token_id } => query_balance_of(deps, account, token_id),
        QueryMsg::BalanceOfBatch { account, token_ids } => {
            query_balance_of_batch(deps, account, token_ids)
        }
        QueryMsg::Balances { account } => query_balances(deps, account),
        QueryMsg::Supply { token_id } => query_supply(deps, token_id),
        QueryMsg::HasClaimedStarterPack { account } => {
            query_has_claimed_starter_pack(deps, account)
        }
        QueryMsg::HasCraftedLegendary {
            account,
            variant_id,
        } => query_has_crafted_legendary(deps, account, variant_id),
        QueryMsg::LastRewardTimestamp { account } => query_last_reward_timestamp(deps, account),
        QueryMsg::PlayerCount {} => query_player_count(deps),
        QueryMsg::PlayerAt { index } => query_player_at(deps, index),
        QueryMsg::Players { start_after, limit } => query_players(deps, start_after, limit),
        QueryMsg::PlayerInfo { account } => query_player_info(deps, account),
    }
}

fn to_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(e) => e,
        other => StdError::generic_err(other.to_string()),
    }
}

fn collect_balances(
    deps: Deps,
    account: &Addr,
    token_ids: &[TokenId],
) -> StdResult<Vec<TokenBalance>> {
    token_ids
        .iter()
        .map(|token_id| {
            Ok(TokenBalance {
                token_id: *token_id,
                balance: balance_of(deps.storage, account, *token_id)?,
            })
        })
        .collect()
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
}

pub fn query_balance_of(deps: Deps, account: String, token_id: TokenId) -> StdResult<Binary> {
    let account = deps.api.addr_validate(&account)?;
    let balance = balance_of(deps.storage, &account, token_id)?;
    to_json_binary(&BalanceResponse { balance })
}

pub fn query_balance_of_batch(
    deps: Deps,
    account: String,
    token_ids: Vec<TokenId>,
) -> StdResult<Binary> {
    let account = deps.api.addr_validate(&account)?;
    let balances = collect_balances(deps, &account, &token_ids)?;
    to_json_binary(&BalancesResponse { balances })
}

pub fn query_balances(deps: Deps, account: String) -> StdResult<Binary> {
    let account = deps.api.addr_validate(&account)?;
    let balances = collect_balances(deps, &account, &KNOWN_TOKEN_IDS)?;
    to_json_binary(&BalancesResponse { balances })
}

pub fn query_supply(deps: Deps, token_id: TokenId) -> StdResult<Binary> {
    let supply = total_supply(deps.storage, token_id)?;
    to_json_binary(&SupplyResponse { token_id, supply })
}

pub fn query_has_claimed_starter_pack(deps: Deps, account: String) -> StdResult<Binary> {
    let account = deps.api.addr_validate(&account)?;
    let claimed = has_claimed_starter_pack(deps.storage, &account)?;
    to_json_binary(&StarterPackResponse { claimed })
}

pub fn query_has_crafted_legendary(
    deps: Deps,
    account: String,
    variant_id: TokenId,
) -> StdResult<Binary> {
    if !is_legendary_variant(variant_id) {
        return Err(to_std(ContractError::InvalidVariant { variant_id }));
    }
    let account = deps.api.addr_validate(&account)?;
    let crafted = has_crafted_legendary(deps.storage, &account, variant_id)?;
    to_json_binary(&LegendaryCraftedResponse { crafted })
}

pub fn query_last_reward_timestamp(deps: Deps, account: String) -> StdResult<Binary> {
    let account = deps.api.addr_validate(&account)?;
    let config = CONFIG.load(deps.storage)?;
    let timestamp = last_reward_timestamp(deps.storage, &account)?;
    to_json_binary(&LastRewardResponse {
        timestamp,
        next_claim_at: next_claim_at(timestamp, config.reward_cooldown_seconds),
    })
}

pub fn query_player_count(deps: Deps) -> StdResult<Binary> {
    let count = registry::count(deps.storage)?;
    to_json_binary(&PlayerCountResponse { count })
}

pub fn query_player_at(deps: Deps, index: u64) -> StdResult<Binary> {
    let account = registry::player_at(deps.storage, index).map_err(to_std)?;
    to_json_binary(&PlayerResponse { index, account })
}

pub fn query_players(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(|i| i.saturating_add(1)).unwrap_or(0);

    let players = registry::range(deps.storage, start, limit)?
        .into_iter()
        .map(|(index, account)| PlayerResponse { index, account })
        .collect();

    to_json_binary(&PlayersResponse { players })
}

pub fn query_player_info(deps: Deps, account: String) -> StdResult<Binary> {
    let account = deps.api.addr_validate(&account)?;
    let config = CONFIG.load(deps.storage)?;
    let last = last_reward_timestamp(deps.storage, &account)?;

    to_json_binary(&PlayerInfoResponse {
        tracked: registry::is_tracked(deps.storage, &account)?,
        balances: collect_balances(deps, &account, &KNOWN_TOKEN_IDS)?,
        starter_pack_claimed: has_claimed_starter_pack(deps.storage, &account)?,
        legendaries_crafted: crafted_legendaries(deps.storage, &account)?,
        last_reward_timestamp: last,
        next_reward_at: next_claim_at(last, config.reward_cooldown_seconds),
        account,
    })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if PLAYER_COUNT.may_load(deps.storage)?.is_none() {
        PLAYER_COUNT.save(deps.storage, &0u64)?;
    }
    if DRAW_COUNT.may_load(deps.storage)?.is_none() {
        DRAW_COUNT.save(deps.storage, &0u64)?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
