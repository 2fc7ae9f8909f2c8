use cosmwasm_std::{Addr, Deps, MessageInfo};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Who may call an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Any account
    Player,
    /// The configured authority only
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Player => "player",
            Role::Owner => "owner",
        }
    }
}

pub fn assert_role(deps: Deps, caller: &Addr, required: Role) -> Result<(), ContractError> {
    match required {
        Role::Player => Ok(()),
        Role::Owner => {
            let config = CONFIG.load(deps.storage)?;
            if *caller != config.owner {
                return Err(ContractError::Unauthorized {
                    role: required.as_str().to_string(),
                });
            }
            Ok(())
        }
    }
}

pub fn assert_not_paused(deps: Deps) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

pub fn validate_cooldown(seconds: u64) -> Result<u64, ContractError> {
    if seconds == 0 {
        return Err(ContractError::InvalidCooldown);
    }
    Ok(seconds)
}

/// Entry gate shared by every execute message: no funds, role check, and
/// for player operations the pause switch.
pub fn authorize(deps: Deps, info: &MessageInfo, required: Role) -> Result<(), ContractError> {
    reject_funds(info)?;
    assert_role(deps, &info.sender, required)?;
    if required == Role::Player {
        assert_not_paused(deps)?;
    }
    Ok(())
}
