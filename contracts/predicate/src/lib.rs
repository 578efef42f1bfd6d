//! Child-Side Bridge Predicate
//!
//! This contract mints bridged tokens on the child chain when a deposit
//! message arrives from the root chain, and burns them on withdrawal while
//! emitting an outbound message back to the root chain.
//!
//! # Flow
//! 1. A user deposits tokens into the root-chain predicate
//! 2. The inbound state receiver delivers the deposit message to this contract
//! 3. This contract validates the message and mints the mapped child token
//!
//! # Reverse Flow
//! 1. A user withdraws by burning child tokens through this contract
//! 2. This contract hands the withdrawal message to the outbound state sender
//! 3. The root-chain predicate releases the original tokens
//!
//! # Security
//! - Three caller classes: system bootstrap caller, inbound authority,
//!   root-chain counterpart (checked against the embedded message sender)
//! - Fixed payload discriminants reject mistagged messages
//! - Deterministic child token addresses derived from the template checksum
//!   and a caller-chosen salt
//! - The native asset is genesis-wired and verified against its recorded
//!   bindings before every mint/burn

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
