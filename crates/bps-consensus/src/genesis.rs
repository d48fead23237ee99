use tracing::error;

use crate::block::{Block, BlockHeader};
use crate::constants::GENESIS_SCRIPT_SIG_MARKER;
use crate::error::{ErrorCode, ParamsError};
use crate::hash::{hash256_to_hex, Hash256, ZERO_HASH};
use crate::script::ScriptBuilder;
use crate::tx::{OutPoint, Tx, TxInput, TxOutput, SEQUENCE_FINAL};

pub const GENESIS_TIMESTAMP: &str = "BitcoinS 02-OCT-2020 PoS and The Roadmap To Monetary Freedom";

pub fn genesis_script_sig(timestamp: &str) -> Vec<u8> {
    ScriptBuilder::new()
        .push_int(GENESIS_SCRIPT_SIG_MARKER)
        .push_num(4)
        .push_slice(timestamp.as_bytes())
        .into_bytes()
}

/// Builds the chain root: a single coinbase paying `reward` to
/// `output_script`, no predecessor and no stake input. The caller supplies a
/// `time`/`nonce` pair already known to satisfy `bits`.
pub fn build_genesis(
    timestamp: &str,
    output_script: &[u8],
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: i64,
) -> Block {
    let coinbase = Tx {
        version: 1,
        inputs: vec![TxInput {
            prevout: OutPoint::null(),
            script_sig: genesis_script_sig(timestamp),
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TxOutput {
            value: reward,
            script_pubkey: output_script.to_vec(),
        }],
        locktime: 0,
    };

    let mut block = Block {
        header: BlockHeader {
            version,
            prev_block_hash: ZERO_HASH,
            merkle_root: ZERO_HASH,
            time,
            bits,
            nonce,
            prevout_stake: OutPoint::null(),
            block_sig: Vec::new(),
        },
        txs: vec![coinbase],
    };
    block.header.merkle_root = block.compute_merkle_root();
    block
}

/// Genesis with the network-wide timestamp and an empty output script.
pub fn create_genesis_block(time: u32, nonce: u32, bits: u32, version: i32, reward: i64) -> Block {
    build_genesis(GENESIS_TIMESTAMP, &[], time, nonce, bits, version, reward)
}

/// Compares a freshly built genesis with the values the network was launched
/// with. Either mismatch is fatal: the binary disagrees with every peer.
pub fn verify_genesis(
    block: &Block,
    expected_hash: &Hash256,
    expected_merkle_root: &Hash256,
) -> Result<Hash256, ParamsError> {
    let hash = block.hash();
    if &hash != expected_hash {
        let msg = format!(
            "genesis hash {} != expected {}",
            hash256_to_hex(&hash),
            hash256_to_hex(expected_hash)
        );
        error!(%msg, "genesis verification failed");
        return Err(ParamsError::new(ErrorCode::GenesisErrHashMismatch, msg));
    }
    if &block.header.merkle_root != expected_merkle_root {
        let msg = format!(
            "genesis merkle root {} != expected {}",
            hash256_to_hex(&block.header.merkle_root),
            hash256_to_hex(expected_merkle_root)
        );
        error!(%msg, "genesis verification failed");
        return Err(ParamsError::new(ErrorCode::GenesisErrMerkleMismatch, msg));
    }
    Ok(hash)
}
