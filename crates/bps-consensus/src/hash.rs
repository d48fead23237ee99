use sha2::{Digest, Sha256};

pub type Hash256 = [u8; 32];

pub const ZERO_HASH: Hash256 = [0u8; 32];

/// SHA-256 applied twice, returned in internal byte order.
pub fn sha256d(b: &[u8]) -> Hash256 {
    let first = Sha256::digest(b);
    let second = Sha256::digest(first);
    let mut r = [0u8; 32];
    r.copy_from_slice(&second);
    r
}

/// Parses a hash written in display order (most significant byte first).
///
/// Accepts an optional `0x` prefix and fewer than 64 digits, which are
/// left-padded with zeros, so `"0x00"` is the zero hash.
pub fn hash256_from_hex(s: &str) -> Result<Hash256, String> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.len() > 64 {
        return Err(format!("hash hex too long: {} digits", digits.len()));
    }
    let padded = format!("{digits:0>64}");
    let mut bytes = hex::decode(&padded).map_err(|e| format!("hash hex: {e}"))?;
    bytes.reverse();
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Ok(out)
}

pub fn hash256_to_hex(h: &Hash256) -> String {
    let mut display = *h;
    display.reverse();
    hex::encode(display)
}
