//! State definitions for the child bridge predicate

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary};
use cw_storage_plus::{Item, Map};

/// Contract configuration, written exactly once by the system bootstrap
/// caller. All fields are immutable thereafter.
#[cw_serde]
pub struct Config {
    /// Address permitted to deliver inbound root-chain messages
    pub inbound_authority: Addr,
    /// Root-chain predicate whose messages are trusted (normalized hex)
    pub root_counterpart: String,
    /// Outbound state sender carrying withdrawal messages to the root chain
    pub outbound_transport: Addr,
    /// Code id of the child token template
    pub child_token_code_id: u64,
    /// Checksum of the child token template, fixed at initialization so
    /// address derivation stays stable across code uploads
    pub child_token_checksum: HexBinary,
    /// Genesis-wired native asset contract on this chain
    pub native_token: Addr,
    /// Root-chain token mapped to the native asset (normalized hex)
    pub native_root_token: String,
    /// Native asset display metadata, recorded for genesis wiring only
    pub native_name: String,
    pub native_symbol: String,
    pub native_decimals: u8,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:child-predicate";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Primary config storage; absent until initialization
pub const CONFIG: Item<Config> = Item::new("config");

/// Root token to child token mapping
/// Key: normalized root token hex, Value: child token address
pub const ROOT_TO_CHILD: Map<String, Addr> = Map::new("root_to_child");

/// Child token to root token mapping (inverse of ROOT_TO_CHILD)
/// Key: child token address, Value: normalized root token hex
pub const CHILD_TO_ROOT: Map<&Addr, String> = Map::new("child_to_root");

/// Reply id for the deposit mint submessage
pub const REPLY_DEPOSIT_MINT: u64 = 1;
/// Reply id for the withdrawal burn submessage
pub const REPLY_WITHDRAW_BURN: u64 = 2;
