use crate::compactsize::{encode_compact_size, encode_var_bytes};
use crate::hash::{sha256d, Hash256};
use crate::merkle::merkle_root_txids;
use crate::tx::{tx_bytes, txid, OutPoint, Tx};

/// Fixed-width prefix shared with the classic 80-byte header; the stake
/// prevout and signature follow it.
pub const BLOCK_HEADER_BASE_BYTES: usize = 80;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub prevout_stake: OutPoint,
    pub block_sig: Vec<u8>,
}

impl BlockHeader {
    pub fn is_proof_of_stake(&self) -> bool {
        !self.prevout_stake.is_null()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub txs: Vec<Tx>,
}

impl Block {
    pub fn hash(&self) -> Hash256 {
        block_hash(&self.header)
    }

    pub fn compute_merkle_root(&self) -> Hash256 {
        let ids: Vec<Hash256> = self.txs.iter().map(txid).collect();
        merkle_root_txids(&ids)
    }
}

pub fn block_header_bytes(h: &BlockHeader) -> Vec<u8> {
    let mut out = Vec::with_capacity(BLOCK_HEADER_BASE_BYTES + 36 + 1 + h.block_sig.len());
    out.extend_from_slice(&h.version.to_le_bytes());
    out.extend_from_slice(&h.prev_block_hash);
    out.extend_from_slice(&h.merkle_root);
    out.extend_from_slice(&h.time.to_le_bytes());
    out.extend_from_slice(&h.bits.to_le_bytes());
    out.extend_from_slice(&h.nonce.to_le_bytes());
    h.prevout_stake.encode_into(&mut out);
    encode_var_bytes(&h.block_sig, &mut out);
    out
}

pub fn block_hash(h: &BlockHeader) -> Hash256 {
    sha256d(&block_header_bytes(h))
}

pub fn block_bytes(b: &Block) -> Vec<u8> {
    let mut out = block_header_bytes(&b.header);
    encode_compact_size(b.txs.len() as u64, &mut out);
    for tx in &b.txs {
        out.extend_from_slice(&tx_bytes(tx));
    }
    out
}
