//! Cross-chain message codec.
//!
//! Deposit and withdrawal messages share one fixed wire schema. The leading
//! `signature` field is a 32-byte discriminant (the SHA-256 digest of a
//! known literal) that distinguishes deposit from withdraw semantics; the
//! remaining fields are the token pair, the endpoints, and the amount.
//! Encoding is canonical JSON, so re-decoding an encoded message reproduces
//! the original fields exactly.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary, HexBinary, StdError, StdResult, Uint128};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Literal hashed into the deposit discriminant.
pub const DEPOSIT_TAG: &str = "DEPOSIT";
/// Literal hashed into the withdraw discriminant.
pub const WITHDRAW_TAG: &str = "WITHDRAW";

/// The 32-byte discriminant for deposit messages.
pub fn deposit_signature() -> HexBinary {
    signature_of(DEPOSIT_TAG)
}

/// The 32-byte discriminant for withdraw messages.
pub fn withdraw_signature() -> HexBinary {
    signature_of(WITHDRAW_TAG)
}

fn signature_of(tag: &str) -> HexBinary {
    HexBinary::from(Sha256::digest(tag.as_bytes()).to_vec())
}

/// The fixed deposit/withdraw wire schema.
///
/// `sender` and `receiver` are addresses on the chain the transfer
/// originates from and lands on respectively; `amount` carries no implicit
/// scaling. Messages are immutable and single-use; uniqueness and ordering
/// are the transport's responsibility.
#[cw_serde]
pub struct BridgeMessage {
    /// Discriminant tag; see [`deposit_signature`] and [`withdraw_signature`].
    pub signature: HexBinary,
    /// Token address on the root chain.
    pub root_token: String,
    /// Token address on the child chain.
    pub child_token: String,
    pub sender: String,
    pub receiver: String,
    pub amount: Uint128,
}

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("payload signature does not match the {expected} discriminant")]
    InvalidSignature { expected: &'static str },

    #[error("malformed payload: {0}")]
    Malformed(#[from] StdError),
}

/// Decodes an inbound deposit payload, rejecting any payload whose leading
/// tag is not the canonical deposit discriminant, even if the remaining
/// fields decode structurally.
pub fn decode_deposit(payload: &Binary) -> Result<BridgeMessage, CodecError> {
    decode_tagged(payload, DEPOSIT_TAG, deposit_signature())
}

/// Decodes a withdraw payload; inverse of [`encode_withdraw`].
pub fn decode_withdraw(payload: &Binary) -> Result<BridgeMessage, CodecError> {
    decode_tagged(payload, WITHDRAW_TAG, withdraw_signature())
}

fn decode_tagged(
    payload: &Binary,
    tag: &'static str,
    expected: HexBinary,
) -> Result<BridgeMessage, CodecError> {
    let message: BridgeMessage = from_json(payload)?;
    if message.signature != expected {
        return Err(CodecError::InvalidSignature { expected: tag });
    }
    Ok(message)
}

/// Encodes an outbound withdrawal message in its canonical form.
pub fn encode_withdraw(
    root_token: String,
    child_token: String,
    sender: String,
    receiver: String,
    amount: Uint128,
) -> StdResult<Binary> {
    to_json_binary(&BridgeMessage {
        signature: withdraw_signature(),
        root_token,
        child_token,
        sender,
        receiver,
        amount,
    })
}

/// Execute interface of the outbound state sender, the collaborator that
/// relays withdrawal messages back to the root chain.
#[cw_serde]
pub enum StateSenderExecuteMsg {
    SyncState { receiver: String, data: Binary },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_are_fixed_known_vectors() {
        assert_eq!(
            deposit_signature().to_hex(),
            "87f8690f69f44d6481bb2f90b6e1cc3af540c198569e37382440ed13c40b2dbe"
        );
        assert_eq!(
            withdraw_signature().to_hex(),
            "b1b8a4720ac3540c6693508f495215347567194adc0c8c0fb766ae39356b0fd7"
        );
    }

    #[test]
    fn withdraw_round_trips_exactly() {
        let encoded = encode_withdraw(
            "0xdeadbeef00000000000000000000000000000001".to_string(),
            "child_token_addr".to_string(),
            "withdrawer".to_string(),
            "0xcafe000000000000000000000000000000000002".to_string(),
            Uint128::new(250_000),
        )
        .unwrap();

        let decoded = decode_withdraw(&encoded).unwrap();
        assert_eq!(decoded.signature, withdraw_signature());
        assert_eq!(decoded.root_token, "0xdeadbeef00000000000000000000000000000001");
        assert_eq!(decoded.child_token, "child_token_addr");
        assert_eq!(decoded.sender, "withdrawer");
        assert_eq!(decoded.receiver, "0xcafe000000000000000000000000000000000002");
        assert_eq!(decoded.amount, Uint128::new(250_000));
    }

    #[test]
    fn deposit_decode_rejects_foreign_tag() {
        // Structurally valid message, but carrying the withdraw tag.
        let payload = to_json_binary(&BridgeMessage {
            signature: withdraw_signature(),
            root_token: "0xdeadbeef00000000000000000000000000000001".to_string(),
            child_token: "child_token_addr".to_string(),
            sender: "0xcafe000000000000000000000000000000000002".to_string(),
            receiver: "receiver".to_string(),
            amount: Uint128::new(1),
        })
        .unwrap();

        assert_eq!(
            decode_deposit(&payload).unwrap_err(),
            CodecError::InvalidSignature { expected: DEPOSIT_TAG }
        );
    }

    #[test]
    fn deposit_decode_rejects_garbage_tag() {
        let payload = to_json_binary(&BridgeMessage {
            signature: HexBinary::from(vec![0u8; 32]),
            root_token: "0xdeadbeef00000000000000000000000000000001".to_string(),
            child_token: "child_token_addr".to_string(),
            sender: "sender".to_string(),
            receiver: "receiver".to_string(),
            amount: Uint128::zero(),
        })
        .unwrap();

        assert!(matches!(
            decode_deposit(&payload).unwrap_err(),
            CodecError::InvalidSignature { .. }
        ));
    }

    #[test]
    fn malformed_payload_is_not_an_invalid_signature() {
        let err = decode_deposit(&Binary::from(b"not json".as_slice())).unwrap_err();
        assert!(matches!(err, CodecError::Malformed(_)));
    }

    #[test]
    fn deposit_decode_accepts_canonical_payload() {
        let payload = to_json_binary(&BridgeMessage {
            signature: deposit_signature(),
            root_token: "0xdeadbeef00000000000000000000000000000001".to_string(),
            child_token: "child_token_addr".to_string(),
            sender: "0xcafe000000000000000000000000000000000002".to_string(),
            receiver: "receiver".to_string(),
            amount: Uint128::new(500_000),
        })
        .unwrap();

        let decoded = decode_deposit(&payload).unwrap();
        assert_eq!(decoded.amount, Uint128::new(500_000));
    }
}
