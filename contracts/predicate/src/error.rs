use cosmwasm_std::{Instantiate2AddressError, StdError};
use thiserror::Error;

use common::wire::CodecError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Instantiate2(#[from] Instantiate2AddressError),

    #[error("unauthorized: {required} required")]
    Unauthorized { required: String },

    #[error("not initialized")]
    NotInitialized,

    #[error("bad initialization: all configuration fields must be non-zero")]
    BadInitialization,

    #[error("already initialized")]
    AlreadyInitialized,

    #[error("invalid root token")]
    InvalidRootToken,

    #[error("invalid payload signature")]
    InvalidSignature,

    #[error("{addr} is not a deployed contract")]
    NotContract { addr: String },

    #[error("child token {child_token} is not mapped to the claimed root token")]
    UnmappedToken { child_token: String },

    #[error("deposit names the native asset but not its root token")]
    WrongDepositToken,

    #[error("root token {root_token} is already mapped")]
    AlreadyMapped { root_token: String },

    #[error("mint failed: {reason}")]
    MintFailed { reason: String },

    #[error("burn failed: {reason}")]
    BurnFailed { reason: String },

    #[error("only the inbound authority may deliver messages")]
    OnlyInboundAuthority,

    #[error("message sender is not the root counterpart")]
    OnlyRootCounterpart,

    #[error("native token integrity fault: {reason}")]
    IntegrityFault { reason: String },
}

impl From<CodecError> for ContractError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::InvalidSignature { .. } => ContractError::InvalidSignature,
            CodecError::Malformed(std_err) => ContractError::Std(std_err),
        }
    }
}
