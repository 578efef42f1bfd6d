use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, HexBinary, Uint128};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// One-time configuration, restricted to the system bootstrap caller.
    /// Also pre-registers the native asset mapping, which bypasses the
    /// ordinary deployment path.
    Initialize {
        inbound_authority: String,
        root_counterpart: String,
        outbound_transport: String,
        child_token_code_id: u64,
        native_token: String,
        native_root_token: String,
        native_name: String,
        native_symbol: String,
        native_decimals: u8,
    },
    /// Inbound deposit delivery. Only the inbound authority may call this;
    /// `sender` is the root-chain originator embedded by the transport and
    /// must equal the configured root counterpart. `sequence_id` is opaque
    /// here: exactly-once delivery is the transport's contract.
    OnReceiveMessage {
        sequence_id: u64,
        sender: String,
        payload: Binary,
    },
    /// Burn `amount` of `child_token` from the caller and emit a withdrawal
    /// message crediting the caller on the root chain.
    Withdraw {
        child_token: String,
        amount: Uint128,
    },
    /// Like `Withdraw`, crediting `receiver` on the root chain instead.
    WithdrawTo {
        child_token: String,
        receiver: String,
        amount: Uint128,
    },
    /// Deploy and map a new child token for `root_token`. The resulting
    /// address is a pure function of the template checksum and `salt`.
    DeployChildToken {
        root_token: String,
        salt: HexBinary,
        name: String,
        symbol: String,
        decimals: u8,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// Resolve the child token mapped to a root token, if any.
    #[returns(ChildTokenResponse)]
    ChildToken { root_token: String },
    /// Resolve the root token mapped to a child token, if any.
    #[returns(RootTokenResponse)]
    RootToken { child_token: String },
    #[returns(MappingsResponse)]
    Mappings {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub inbound_authority: Addr,
    pub root_counterpart: String,
    pub outbound_transport: Addr,
    pub child_token_code_id: u64,
    pub child_token_checksum: HexBinary,
    pub native_token: Addr,
    pub native_root_token: String,
    pub native_name: String,
    pub native_symbol: String,
    pub native_decimals: u8,
}

#[cw_serde]
pub struct ChildTokenResponse {
    pub child_token: Option<Addr>,
}

#[cw_serde]
pub struct RootTokenResponse {
    pub root_token: Option<String>,
}

#[cw_serde]
pub struct MappingResponse {
    pub root_token: String,
    pub child_token: Addr,
}

#[cw_serde]
pub struct MappingsResponse {
    pub mappings: Vec<MappingResponse>,
}
