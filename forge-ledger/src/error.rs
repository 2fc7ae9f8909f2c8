use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("contract is paused")]
    Paused,

    #[error("contract is not paused")]
    NotPaused,

    #[error("insufficient balance of token {token_id}: need {required}, have {available}")]
    InsufficientBalance {
        token_id: u64,
        required: String,
        available: String,
    },

    #[error("starter pack already claimed")]
    AlreadyClaimed,

    #[error("legendary variant {variant_id} already crafted")]
    AlreadyCrafted { variant_id: u64 },

    #[error("reward cooldown active: next claim available at {available_at}")]
    CooldownActive { available_at: String },

    #[error("invalid legendary variant: {variant_id}")]
    InvalidVariant { variant_id: u64 },

    #[error("player index {index} out of range (count {count})")]
    IndexOutOfRange { index: u64, count: u64 },

    #[error("overflow in arithmetic operation")]
    Overflow,

    #[error("underflow in arithmetic operation")]
    Underflow,

    #[error("zero amount not allowed")]
    ZeroAmount,

    #[error("reward cooldown must be greater than zero")]
    InvalidCooldown,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
