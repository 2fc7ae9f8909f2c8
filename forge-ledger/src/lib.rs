pub mod contract;
pub mod crafting;
pub mod error;
pub mod flags;
pub mod helpers;
pub mod ledger;
pub mod loot;
pub mod msg;
pub mod registry;
pub mod schedule;
pub mod state;
pub mod tokens;
