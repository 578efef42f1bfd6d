//! Bridged child token implementation

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use cw20::{Cw20Coin, MinterResponse};
use cw20_base::contract::{
    execute_mint, execute_send, execute_transfer, query_balance, query_minter, query_token_info,
};
use cw20_base::state::{BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::msg::{ControllerResponse, ExecuteMsg, InstantiateMsg, QueryMsg, RootTokenResponse};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, CONTROLLER, ROOT_TOKEN};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let root_token =
        common::normalize_root_token(&msg.root_token).ok_or(ContractError::InvalidRootToken)?;

    // The instantiating predicate controls mint and burn for the token's
    // whole lifetime.
    cw20_base::contract::instantiate(
        deps.branch(),
        env,
        info.clone(),
        cw20_base::msg::InstantiateMsg {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            initial_balances: Vec::<Cw20Coin>::new(),
            mint: Some(MinterResponse {
                minter: info.sender.to_string(),
                cap: None,
            }),
            marketing: None,
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    ROOT_TOKEN.save(deps.storage, &root_token)?;
    CONTROLLER.save(deps.storage, &info.sender)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("root_token", root_token)
        .add_attribute("controller", info.sender)
        .add_attribute("symbol", msg.symbol))
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
        ExecuteMsg::Mint { recipient, amount } => {
            execute_bridge_mint(deps, env, info, recipient, amount)
        }
        ExecuteMsg::Burn { holder, amount } => {
            execute_bridge_burn(deps, env, info, holder, amount)
        }
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
    }
}

fn execute_bridge_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let controller = CONTROLLER.load(deps.storage)?;
    if info.sender != controller {
        return Err(ContractError::Unauthorized);
    }

    // cw20-base enforces the minter binding again; controller == minter.
    Ok(execute_mint(deps, env, info, recipient, amount)?)
}

fn execute_bridge_burn(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    holder: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let controller = CONTROLLER.load(deps.storage)?;
    if info.sender != controller {
        return Err(ContractError::Unauthorized);
    }

    let holder_addr = deps.api.addr_validate(&holder)?;

    // Bridge burns debit the holder directly; an insufficient balance
    // surfaces as an overflow and aborts the operation.
    BALANCES.update(
        deps.storage,
        &holder_addr,
        |balance| -> Result<Uint128, ContractError> {
            Ok(balance.unwrap_or_default().checked_sub(amount)?)
        },
    )?;
    TOKEN_INFO.update(deps.storage, |mut token_info| -> Result<_, ContractError> {
        token_info.total_supply = token_info.total_supply.checked_sub(amount)?;
        Ok(token_info)
    })?;

    Ok(Response::new()
        .add_attribute("method", "burn")
        .add_attribute("holder", holder_addr)
        .add_attribute("amount", amount))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
        QueryMsg::RootToken {} => {
            let root_token = ROOT_TOKEN.load(deps.storage)?;
            to_json_binary(&RootTokenResponse { root_token })
        }
        QueryMsg::Controller {} => {
            let controller = CONTROLLER.load(deps.storage)?;
            to_json_binary(&ControllerResponse { controller })
        }
    }
}
