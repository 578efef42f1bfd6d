use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::{BalanceResponse, MinterResponse, TokenInfoResponse};

pub use common::token::{BridgeTokenInstantiateMsg as InstantiateMsg, ControllerResponse, RootTokenResponse};

#[cw_serde]
pub enum ExecuteMsg {
    /// Credit `recipient` with freshly minted tokens. Controller only.
    Mint { recipient: String, amount: Uint128 },
    /// Debit `holder` directly, reducing total supply. Controller only.
    Burn { holder: String, amount: Uint128 },
    /// Standard cw20 transfer.
    Transfer { recipient: String, amount: Uint128 },
    /// Standard cw20 send (transfer + receiver hook).
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(Option<MinterResponse>)]
    Minter {},
    #[returns(RootTokenResponse)]
    RootToken {},
    #[returns(ControllerResponse)]
    Controller {},
}
