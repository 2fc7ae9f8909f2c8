use cosmwasm_std::{Addr, Storage, Uint128};

use crate::error::ContractError;
use crate::flags::has_crafted_legendary;
use crate::ledger::LedgerTx;
use crate::tokens::{
    is_legendary_variant, TokenId, COMMON_SWORD, EPIC_RECIPE_RARE_COST, EPIC_SWORD, GOLD,
    LEGENDARY_RECIPE_EPIC_COST, LEGENDARY_RECIPE_GOLD_COST, RARE_RECIPE_COMMON_COST, RARE_SWORD,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recipe {
    /// 3 common swords -> 1 rare sword
    Rare,
    /// 2 rare swords -> 1 epic sword
    Epic,
    /// 5 epic swords + 1000 gold -> 1 legendary sword of `variant_id`, once
    /// per account and variant
    Legendary { variant_id: TokenId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CraftPlan {
    pub consumes: Vec<(TokenId, Uint128)>,
    pub produces: TokenId,
    /// Set for legendary recipes; the variant flag to flip on commit.
    pub legendary_variant: Option<TokenId>,
}

impl Recipe {
    pub fn name(&self) -> &'static str {
        match self {
            Recipe::Rare => "rare",
            Recipe::Epic => "epic",
            Recipe::Legendary { .. } => "legendary",
        }
    }

    pub fn plan(&self) -> Result<CraftPlan, ContractError> {
        let plan = match *self {
            Recipe::Rare => CraftPlan {
                consumes: vec![(COMMON_SWORD, Uint128::new(RARE_RECIPE_COMMON_COST))],
                produces: RARE_SWORD,
                legendary_variant: None,
            },
            Recipe::Epic => CraftPlan {
                consumes: vec![(RARE_SWORD, Uint128::new(EPIC_RECIPE_RARE_COST))],
                produces: EPIC_SWORD,
                legendary_variant: None,
            },
            Recipe::Legendary { variant_id } => {
                if !is_legendary_variant(variant_id) {
                    return Err(ContractError::InvalidVariant { variant_id });
                }
                CraftPlan {
                    consumes: vec![
                        (EPIC_SWORD, Uint128::new(LEGENDARY_RECIPE_EPIC_COST)),
                        (GOLD, Uint128::new(LEGENDARY_RECIPE_GOLD_COST)),
                    ],
                    produces: variant_id,
                    legendary_variant: Some(variant_id),
                }
            }
        };
        Ok(plan)
    }
}

/// Validate `recipe` for `account` and stage its burns and mint on `tx`.
///
/// Guards run before anything is staged; a shortfall on any input rejects
/// the craft as a whole.
pub fn stage_craft(
    storage: &dyn Storage,
    tx: &mut LedgerTx,
    account: &Addr,
    recipe: Recipe,
) -> Result<CraftPlan, ContractError> {
    let plan = recipe.plan()?;

    if let Some(variant_id) = plan.legendary_variant {
        if has_crafted_legendary(storage, account, variant_id)? {
            return Err(ContractError::AlreadyCrafted { variant_id });
        }
    }

    for (token_id, amount) in &plan.consumes {
        tx.burn(storage, account, *token_id, *amount)?;
    }
    tx.mint(storage, account, plan.produces, Uint128::one())?;

    Ok(plan)
}
