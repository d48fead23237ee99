use bps_consensus::constants::{GENESIS_REWARD, GENESIS_VERSION};
use bps_consensus::{create_genesis_block, meets_target, Block, Hash256};
use tracing::{debug, info};

const PROGRESS_EVERY: u32 = 0x0001_0000;

/// Searches `start_nonce..=max_nonce` for a genesis block at `time` whose
/// hash satisfies `bits` under `ceiling`. Returns the first hit.
pub fn mine_genesis(
    time: u32,
    bits: u32,
    start_nonce: u32,
    max_nonce: u32,
    ceiling: &Hash256,
) -> Option<Block> {
    let mut block =
        create_genesis_block(time, start_nonce, bits, GENESIS_VERSION, GENESIS_REWARD);
    info!(
        time,
        bits = %format!("{bits:#010x}"),
        start_nonce,
        max_nonce,
        "searching genesis nonce"
    );
    for nonce in start_nonce..=max_nonce {
        block.header.nonce = nonce;
        if meets_target(&block.hash(), bits, ceiling) {
            info!(nonce, "genesis nonce found");
            return Some(block);
        }
        if nonce % PROGRESS_EVERY == 0 {
            debug!(nonce, "genesis search progress");
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use bps_consensus::{ChainParams, MapArgs};

    #[test]
    fn finds_regtest_friendly_nonce() {
        let regtest = ChainParams::regtest(&MapArgs::new()).expect("regtest");
        let ceiling = regtest.consensus.pow_limit;
        // 0x207fffff admits about half of all hashes
        let found = mine_genesis(1_601_661_242, 0x207f_ffff, 0, 64, &ceiling).expect("found");
        assert!(meets_target(&found.hash(), 0x207f_ffff, &ceiling));
        assert!(found.header.nonce <= 64);
    }

    #[test]
    fn reproduces_published_main_nonce() {
        let main = ChainParams::main().expect("main");
        let nonce = main.genesis.header.nonce;
        let found = mine_genesis(
            main.genesis.header.time,
            main.genesis.header.bits,
            nonce,
            nonce,
            &main.consensus.pow_limit,
        )
        .expect("found");
        assert_eq!(found.hash(), *main.genesis_hash());
    }

    #[test]
    fn ceiling_below_target_finds_nothing() {
        let main = ChainParams::main().expect("main");
        let h = &main.genesis.header;
        let zero_ceiling = [0u8; 32];
        assert!(mine_genesis(h.time, h.bits, h.nonce, h.nonce, &zero_ceiling).is_none());
    }
}
