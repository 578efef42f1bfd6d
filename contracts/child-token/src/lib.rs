//! Standard bridged child token.
//!
//! A cw20 token whose mint and burn entry points are reserved for the
//! bridge predicate that instantiated it. The token carries an immutable
//! binding to its root-chain counterpart; everything else (balances,
//! transfers, allowance-free sends) is plain cw20-base.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
