//! Interface every bridged token exposes to the predicate.
//!
//! Both the standard child token and the genesis-wired native token accept
//! these messages. The predicate selects the target by address comparison;
//! the message shapes are identical on both paths.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Instantiate message for a bridged child token.
///
/// The instantiator becomes the token's controller and cw20 minter; the
/// root token binding is immutable for the token's lifetime.
#[cw_serde]
pub struct BridgeTokenInstantiateMsg {
    /// Root-chain address this token represents.
    pub root_token: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Mint/burn surface the predicate drives. Only the controller may call
/// either variant.
#[cw_serde]
pub enum BridgeTokenExecuteMsg {
    Mint { recipient: String, amount: Uint128 },
    Burn { holder: String, amount: Uint128 },
}

/// Wiring queries the predicate uses to verify a token's bindings.
#[cw_serde]
#[derive(QueryResponses)]
pub enum BridgeTokenQueryMsg {
    #[returns(RootTokenResponse)]
    RootToken {},
    #[returns(ControllerResponse)]
    Controller {},
}

#[cw_serde]
pub struct RootTokenResponse {
    pub root_token: String,
}

#[cw_serde]
pub struct ControllerResponse {
    pub controller: Addr,
}
