//! State definitions for the bridged child token.
//!
//! Balance and token-info storage lives in cw20-base; only the bridge
//! bindings are kept here.

use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:child-token";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root-chain token this child token represents. Set at instantiation,
/// never changed.
pub const ROOT_TOKEN: Item<String> = Item::new("root_token");

/// The bridge predicate authorized to mint and burn. Set at instantiation,
/// never changed.
pub const CONTROLLER: Item<Addr> = Item::new("controller");
