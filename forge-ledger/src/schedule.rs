//! Minimum-interval gate for the time reward. Time is always passed in; this
//! module never reads the clock.

use crate::error::ContractError;

/// Earliest second at which the next claim is allowed, `None` if it would
/// lie beyond `u64` seconds.
pub fn next_claim_at(last_claim: u64, cooldown_seconds: u64) -> Option<u64> {
    last_claim.checked_add(cooldown_seconds)
}

pub fn ensure_cooldown_elapsed(
    last_claim: u64,
    now: u64,
    cooldown_seconds: u64,
) -> Result<(), ContractError> {
    match next_claim_at(last_claim, cooldown_seconds) {
        Some(available_at) if now >= available_at => Ok(()),
        Some(available_at) => Err(ContractError::CooldownActive {
            available_at: available_at.to_string(),
        }),
        None => Err(ContractError::CooldownActive {
            available_at: u64::MAX.to_string(),
        }),
    }
}
