//! Child Bridge Predicate implementation

use cosmwasm_std::{
    entry_point, instantiate2_address, to_json_binary, Addr, Binary, Deps, DepsMut, Env,
    HexBinary, MessageInfo, Order, Reply, Response, StdResult, SubMsg, SubMsgResult, Uint128,
    WasmMsg,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use common::token::{
    BridgeTokenExecuteMsg, BridgeTokenInstantiateMsg, BridgeTokenQueryMsg, ControllerResponse,
};
use common::wire::{self, StateSenderExecuteMsg};
use common::{normalize_root_token, SYSTEM_CALLER};

use crate::error::ContractError;
use crate::msg::{
    ChildTokenResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, MappingResponse,
    MappingsResponse, MigrateMsg, QueryMsg, RootTokenResponse,
};
use crate::state::{
    Config, CHILD_TO_ROOT, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REPLY_DEPOSIT_MINT,
    REPLY_WITHDRAW_BURN, ROOT_TO_CHILD,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // The predicate starts uninitialized; configuration arrives in a
    // dedicated one-time call from the system bootstrap caller.
    Ok(Response::new().add_attribute("method", "instantiate"))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize {
            inbound_authority,
            root_counterpart,
            outbound_transport,
            child_token_code_id,
            native_token,
            native_root_token,
            native_name,
            native_symbol,
            native_decimals,
        } => execute_initialize(
            deps,
            info,
            inbound_authority,
            root_counterpart,
            outbound_transport,
            child_token_code_id,
            native_token,
            native_root_token,
            native_name,
            native_symbol,
            native_decimals,
        ),
        ExecuteMsg::OnReceiveMessage {
            sequence_id,
            sender,
            payload,
        } => execute_on_receive_message(deps, env, info, sequence_id, sender, payload),
        ExecuteMsg::Withdraw {
            child_token,
            amount,
        } => {
            let receiver = info.sender.to_string();
            execute_withdraw(deps, env, info, child_token, receiver, amount)
        }
        ExecuteMsg::WithdrawTo {
            child_token,
            receiver,
            amount,
        } => execute_withdraw(deps, env, info, child_token, receiver, amount),
        ExecuteMsg::DeployChildToken {
            root_token,
            salt,
            name,
            symbol,
            decimals,
        } => execute_deploy_child_token(deps, env, root_token, salt, name, symbol, decimals),
    }
}

#[allow(clippy::too_many_arguments)]
fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    inbound_authority: String,
    root_counterpart: String,
    outbound_transport: String,
    child_token_code_id: u64,
    native_token: String,
    native_root_token: String,
    native_name: String,
    native_symbol: String,
    native_decimals: u8,
) -> Result<Response, ContractError> {
    if info.sender.as_str() != SYSTEM_CALLER {
        return Err(ContractError::Unauthorized {
            required: "SYSTEMCALL".to_string(),
        });
    }

    if CONFIG.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    // All configuration fields must be set in one shot; a partial
    // configuration is rejected wholesale.
    if inbound_authority.is_empty()
        || outbound_transport.is_empty()
        || native_token.is_empty()
        || child_token_code_id == 0
    {
        return Err(ContractError::BadInitialization);
    }
    let root_counterpart =
        normalize_root_token(&root_counterpart).ok_or(ContractError::BadInitialization)?;
    let native_root_token =
        normalize_root_token(&native_root_token).ok_or(ContractError::BadInitialization)?;

    let inbound_authority = deps.api.addr_validate(&inbound_authority)?;
    let outbound_transport = deps.api.addr_validate(&outbound_transport)?;
    let native_token = deps.api.addr_validate(&native_token)?;

    // Pin the template checksum now so derived child addresses stay stable
    // even if newer template code is uploaded later.
    let code_info = deps.querier.query_wasm_code_info(child_token_code_id)?;

    let config = Config {
        inbound_authority,
        root_counterpart,
        outbound_transport,
        child_token_code_id,
        child_token_checksum: HexBinary::from(code_info.checksum.as_slice()),
        native_token: native_token.clone(),
        native_root_token: native_root_token.clone(),
        native_name,
        native_symbol,
        native_decimals,
    };
    CONFIG.save(deps.storage, &config)?;

    // The native asset occupies a fixed, pre-registered mapping entry that
    // bypasses the deployment path.
    ROOT_TO_CHILD.save(deps.storage, native_root_token.clone(), &native_token)?;
    CHILD_TO_ROOT.save(deps.storage, &native_token, &native_root_token)?;

    Ok(Response::new()
        .add_attribute("method", "initialize")
        .add_attribute("inbound_authority", config.inbound_authority)
        .add_attribute("root_counterpart", config.root_counterpart)
        .add_attribute("outbound_transport", config.outbound_transport)
        .add_attribute("child_token_code_id", child_token_code_id.to_string())
        .add_attribute("native_token", native_token)
        .add_attribute("native_root_token", native_root_token))
}

fn execute_on_receive_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    sequence_id: u64,
    sender: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = load_config(deps.as_ref())?;

    if info.sender != config.inbound_authority {
        return Err(ContractError::OnlyInboundAuthority);
    }

    // The transport authenticates delivery, not origin; the embedded sender
    // must be the trusted root-chain counterpart.
    if normalize_root_token(&sender).as_deref() != Some(config.root_counterpart.as_str()) {
        return Err(ContractError::OnlyRootCounterpart);
    }

    let message = wire::decode_deposit(&payload)?;

    let child_token = deps.api.addr_validate(&message.child_token)?;
    ensure_contract(deps.as_ref(), &child_token)?;

    let root_token = normalize_root_token(&message.root_token);

    if child_token == config.native_token {
        if root_token.as_deref() != Some(config.native_root_token.as_str()) {
            return Err(ContractError::WrongDepositToken);
        }
        check_native_integrity(deps.as_ref(), &env, &config)?;
    } else {
        let mapped = CHILD_TO_ROOT.may_load(deps.storage, &child_token)?;
        if mapped.is_none() || mapped != root_token {
            return Err(ContractError::UnmappedToken {
                child_token: child_token.to_string(),
            });
        }
    }

    let mint = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: child_token.to_string(),
            msg: to_json_binary(&BridgeTokenExecuteMsg::Mint {
                recipient: message.receiver.clone(),
                amount: message.amount,
            })?,
            funds: vec![],
        },
        REPLY_DEPOSIT_MINT,
    );

    Ok(Response::new()
        .add_submessage(mint)
        .add_attribute("method", "deposit")
        .add_attribute("sequence_id", sequence_id.to_string())
        .add_attribute("root_token", message.root_token)
        .add_attribute("child_token", child_token)
        .add_attribute("sender", message.sender)
        .add_attribute("receiver", message.receiver)
        .add_attribute("amount", message.amount))
}

fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    child_token: String,
    receiver: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_config(deps.as_ref())?;

    let child_token = deps.api.addr_validate(&child_token)?;
    ensure_contract(deps.as_ref(), &child_token)?;

    let root_token = if child_token == config.native_token {
        check_native_integrity(deps.as_ref(), &env, &config)?;
        config.native_root_token.clone()
    } else {
        CHILD_TO_ROOT
            .may_load(deps.storage, &child_token)?
            .ok_or_else(|| ContractError::UnmappedToken {
                child_token: child_token.to_string(),
            })?
    };

    let burn = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: child_token.to_string(),
            msg: to_json_binary(&BridgeTokenExecuteMsg::Burn {
                holder: info.sender.to_string(),
                amount,
            })?,
            funds: vec![],
        },
        REPLY_WITHDRAW_BURN,
    );

    let payload = wire::encode_withdraw(
        root_token.clone(),
        child_token.to_string(),
        info.sender.to_string(),
        receiver.clone(),
        amount,
    )?;
    let outbound = WasmMsg::Execute {
        contract_addr: config.outbound_transport.to_string(),
        msg: to_json_binary(&StateSenderExecuteMsg::SyncState {
            receiver: config.root_counterpart,
            data: payload,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(burn)
        .add_message(outbound)
        .add_attribute("method", "withdraw")
        .add_attribute("root_token", root_token)
        .add_attribute("child_token", child_token)
        .add_attribute("sender", info.sender)
        .add_attribute("receiver", receiver)
        .add_attribute("amount", amount))
}

fn execute_deploy_child_token(
    deps: DepsMut,
    env: Env,
    root_token: String,
    salt: HexBinary,
    name: String,
    symbol: String,
    decimals: u8,
) -> Result<Response, ContractError> {
    let config = load_config(deps.as_ref())?;

    let root_token = normalize_root_token(&root_token).ok_or(ContractError::InvalidRootToken)?;

    // The mapping is a bijection. Address-derivation collisions would also
    // reject a duplicate, but the invariant is enforced explicitly here
    // rather than left to platform collision behavior.
    if ROOT_TO_CHILD.has(deps.storage, root_token.clone()) {
        return Err(ContractError::AlreadyMapped { root_token });
    }

    // The child address is a pure function of (template checksum, predicate,
    // salt); independent observers agree on it without trusting the deployer.
    let creator = deps.api.addr_canonicalize(env.contract.address.as_str())?;
    let canonical = instantiate2_address(
        config.child_token_checksum.as_slice(),
        &creator,
        salt.as_slice(),
    )?;
    let child_token = deps.api.addr_humanize(&canonical)?;

    if CHILD_TO_ROOT.has(deps.storage, &child_token) {
        return Err(ContractError::AlreadyMapped { root_token });
    }

    ROOT_TO_CHILD.save(deps.storage, root_token.clone(), &child_token)?;
    CHILD_TO_ROOT.save(deps.storage, &child_token, &root_token)?;

    let instantiate_child = WasmMsg::Instantiate2 {
        admin: None,
        code_id: config.child_token_code_id,
        label: format!("child token {symbol}"),
        msg: to_json_binary(&BridgeTokenInstantiateMsg {
            root_token: root_token.clone(),
            name,
            symbol,
            decimals,
        })?,
        funds: vec![],
        salt: salt.into(),
    };

    Ok(Response::new()
        .add_message(instantiate_child)
        .add_attribute("method", "deploy_child_token")
        .add_attribute("root_token", root_token)
        .add_attribute("child_token", child_token))
}

// ============================================================================
// Reply
// ============================================================================

// Mint/burn submessages are dispatched with reply_on_error so a collaborator
// failure is reported under this contract's own taxonomy; the whole
// transaction still rolls back as a unit.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let reason = match msg.result {
        SubMsgResult::Err(reason) => reason,
        SubMsgResult::Ok(_) => return Ok(Response::new()),
    };

    match msg.id {
        REPLY_DEPOSIT_MINT => Err(ContractError::MintFailed { reason }),
        REPLY_WITHDRAW_BURN => Err(ContractError::BurnFailed { reason }),
        id => Err(ContractError::Std(cosmwasm_std::StdError::generic_err(
            format!("unknown reply id {id}"),
        ))),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn load_config(deps: Deps) -> Result<Config, ContractError> {
    CONFIG
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized)
}

fn ensure_contract(deps: Deps, addr: &Addr) -> Result<(), ContractError> {
    deps.querier
        .query_wasm_contract_info(addr)
        .map_err(|_| ContractError::NotContract {
            addr: addr.to_string(),
        })?;
    Ok(())
}

/// The native asset is wired at genesis, outside this contract's control.
/// Before driving it, verify its recorded bindings; a mismatch means a
/// mis-wired genesis and is fatal, distinct from an ordinary mint/burn
/// failure.
fn check_native_integrity(deps: Deps, env: &Env, config: &Config) -> Result<(), ContractError> {
    let root: common::token::RootTokenResponse = deps
        .querier
        .query_wasm_smart(&config.native_token, &BridgeTokenQueryMsg::RootToken {})
        .map_err(|_| ContractError::IntegrityFault {
            reason: "native token does not expose its root token binding".to_string(),
        })?;
    if root.root_token != config.native_root_token {
        return Err(ContractError::IntegrityFault {
            reason: format!(
                "native token is bound to root token {}, expected {}",
                root.root_token, config.native_root_token
            ),
        });
    }

    let controller: ControllerResponse = deps
        .querier
        .query_wasm_smart(&config.native_token, &BridgeTokenQueryMsg::Controller {})
        .map_err(|_| ContractError::IntegrityFault {
            reason: "native token does not expose its controller binding".to_string(),
        })?;
    if controller.controller != env.contract.address {
        return Err(ContractError::IntegrityFault {
            reason: format!(
                "native token is controlled by {}, expected this predicate",
                controller.controller
            ),
        });
    }

    Ok(())
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ChildToken { root_token } => to_json_binary(&query_child_token(deps, root_token)?),
        QueryMsg::RootToken { child_token } => to_json_binary(&query_root_token(deps, child_token)?),
        QueryMsg::Mappings { start_after, limit } => {
            to_json_binary(&query_mappings(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        inbound_authority: config.inbound_authority,
        root_counterpart: config.root_counterpart,
        outbound_transport: config.outbound_transport,
        child_token_code_id: config.child_token_code_id,
        child_token_checksum: config.child_token_checksum,
        native_token: config.native_token,
        native_root_token: config.native_root_token,
        native_name: config.native_name,
        native_symbol: config.native_symbol,
        native_decimals: config.native_decimals,
    })
}

fn query_child_token(deps: Deps, root_token: String) -> StdResult<ChildTokenResponse> {
    let child_token = match normalize_root_token(&root_token) {
        Some(root) => ROOT_TO_CHILD.may_load(deps.storage, root)?,
        None => None,
    };
    Ok(ChildTokenResponse { child_token })
}

fn query_root_token(deps: Deps, child_token: String) -> StdResult<RootTokenResponse> {
    let child_token = deps.api.addr_validate(&child_token)?;
    let root_token = CHILD_TO_ROOT.may_load(deps.storage, &child_token)?;
    Ok(RootTokenResponse { root_token })
}

fn query_mappings(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<MappingsResponse> {
    let limit = limit.unwrap_or(10).min(50) as usize;
    let start = start_after.map(Bound::exclusive);

    let mappings: Vec<MappingResponse> = ROOT_TO_CHILD
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (root_token, child_token) = item?;
            Ok(MappingResponse {
                root_token,
                child_token,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MappingsResponse { mappings })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
