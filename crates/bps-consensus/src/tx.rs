use crate::compactsize::{encode_compact_size, encode_var_bytes};
use crate::hash::{sha256d, Hash256, ZERO_HASH};

pub const NULL_PREVOUT_VOUT: u32 = u32::MAX;
pub const SEQUENCE_FINAL: u32 = u32::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    /// The marker for "spends nothing": coinbase inputs and proof-of-work
    /// block headers use it.
    pub const fn null() -> Self {
        Self {
            txid: ZERO_HASH,
            vout: NULL_PREVOUT_VOUT,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid == ZERO_HASH && self.vout == NULL_PREVOUT_VOUT
    }

    pub(crate) fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.txid);
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    pub prevout: OutPoint,
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutput {
    pub value: i64,
    pub script_pubkey: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tx {
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub locktime: u32,
}

impl Tx {
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }
}

pub fn tx_bytes(tx: &Tx) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tx.version.to_le_bytes());
    encode_compact_size(tx.inputs.len() as u64, &mut out);
    for input in &tx.inputs {
        input.prevout.encode_into(&mut out);
        encode_var_bytes(&input.script_sig, &mut out);
        out.extend_from_slice(&input.sequence.to_le_bytes());
    }
    encode_compact_size(tx.outputs.len() as u64, &mut out);
    for output in &tx.outputs {
        out.extend_from_slice(&output.value.to_le_bytes());
        encode_var_bytes(&output.script_pubkey, &mut out);
    }
    out.extend_from_slice(&tx.locktime.to_le_bytes());
    out
}

pub fn txid(tx: &Tx) -> Hash256 {
    sha256d(&tx_bytes(tx))
}
