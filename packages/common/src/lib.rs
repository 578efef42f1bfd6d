//! Shared types for the child bridge contracts.
//!
//! Holds everything both the predicate and the tokens it controls need to
//! agree on: the cross-chain wire codec, the mint/burn interface bridged
//! tokens expose, and the well-known addresses wired in at genesis.

pub mod token;
pub mod wire;

/// Well-known address of the system bootstrap caller. The chain injects
/// transactions from this account exactly once at genesis wiring time.
pub const SYSTEM_CALLER: &str = "system";

/// The root-chain zero address. Never a valid root token.
pub const ZERO_ROOT_TOKEN: &str = "0x0000000000000000000000000000000000000000";

/// Normalizes a root-chain token address to its canonical lowercase form.
///
/// Root tokens live on the root chain and are carried as `0x`-prefixed
/// 20-byte hex strings. Returns `None` for anything malformed or for the
/// zero address.
pub fn normalize_root_token(raw: &str) -> Option<String> {
    let addr = raw.trim().to_ascii_lowercase();
    if addr.len() != 42 || !addr.starts_with("0x") {
        return None;
    }
    if !addr[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    if addr == ZERO_ROOT_TOKEN {
        return None;
    }
    Some(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_accepts_checksummed_addresses() {
        let normalized = normalize_root_token("0xDEADbeef00000000000000000000000000000001").unwrap();
        assert_eq!(normalized, "0xdeadbeef00000000000000000000000000000001");
    }

    #[test]
    fn normalize_rejects_zero_address() {
        assert_eq!(normalize_root_token(ZERO_ROOT_TOKEN), None);
    }

    #[test]
    fn normalize_rejects_malformed_input() {
        assert_eq!(normalize_root_token(""), None);
        assert_eq!(normalize_root_token("0xabc"), None);
        assert_eq!(normalize_root_token("deadbeef00000000000000000000000000000001ab"), None);
        assert_eq!(normalize_root_token("0xzzzzbeef00000000000000000000000000000001"), None);
    }
}
