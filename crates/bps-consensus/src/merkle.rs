use crate::hash::{sha256d, Hash256, ZERO_HASH};

/// Merkle root over txids. Odd levels pair the last entry with itself; a
/// single txid is its own root. An empty list yields the zero hash.
pub fn merkle_root_txids(txids: &[Hash256]) -> Hash256 {
    if txids.is_empty() {
        return ZERO_HASH;
    }

    let mut level: Vec<Hash256> = txids.to_vec();
    let mut node_preimage = [0u8; 64];
    while level.len() > 1 {
        let mut next: Vec<Hash256> = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            let right = if pair.len() == 2 { &pair[1] } else { &pair[0] };
            node_preimage[..32].copy_from_slice(&pair[0]);
            node_preimage[32..].copy_from_slice(right);
            next.push(sha256d(&node_preimage));
        }
        level = next;
    }

    level[0]
}
