use bps_consensus::tx::tx_bytes;
use bps_consensus::block::block_bytes;
use bps_consensus::{block_header_bytes, hash256_to_hex, Block, ChainParams, DeploymentPos};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeploymentSummary {
    pub name: &'static str,
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
}

#[derive(Debug, Serialize)]
pub struct CheckpointSummary {
    pub height: i32,
    pub hash: String,
}

#[derive(Debug, Serialize)]
pub struct ParamsSummary {
    pub network: &'static str,
    pub genesis_hash: String,
    pub merkle_root: String,
    pub message_start: String,
    pub default_port: u16,
    pub bech32_hrp: String,
    pub pubkey_address_prefix: String,
    pub script_address_prefix: String,
    pub secret_key_prefix: String,
    pub ext_public_key_prefix: String,
    pub ext_secret_key_prefix: String,
    pub dns_seeds: Vec<String>,
    pub subsidy_halving_interval: i32,
    pub bip34_height: i32,
    pub bip65_height: i32,
    pub bip66_height: i32,
    pub csv_height: i32,
    pub segwit_height: i32,
    pub pow_limit: String,
    pub pos_limit: String,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub difficulty_adjustment_interval: i64,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub last_pow_block: i32,
    pub first_mpos_block: i32,
    pub deployments: Vec<DeploymentSummary>,
    pub checkpoints: Vec<CheckpointSummary>,
    pub chain_tx_time: i64,
    pub chain_tx_count: i64,
    pub chain_tx_rate: f64,
}

pub fn params_summary(p: &ChainParams) -> ParamsSummary {
    let c = &p.consensus;
    let prefixes = &p.base58_prefixes;
    ParamsSummary {
        network: p.network_id(),
        genesis_hash: hash256_to_hex(p.genesis_hash()),
        merkle_root: hash256_to_hex(&p.genesis.header.merkle_root),
        message_start: hex::encode(p.message_start),
        default_port: p.default_port,
        bech32_hrp: p.bech32_hrp.clone(),
        pubkey_address_prefix: hex::encode(&prefixes.pubkey_address),
        script_address_prefix: hex::encode(&prefixes.script_address),
        secret_key_prefix: hex::encode(&prefixes.secret_key),
        ext_public_key_prefix: hex::encode(&prefixes.ext_public_key),
        ext_secret_key_prefix: hex::encode(&prefixes.ext_secret_key),
        dns_seeds: p.dns_seeds.clone(),
        subsidy_halving_interval: c.subsidy_halving_interval,
        bip34_height: c.bip34_height,
        bip65_height: c.bip65_height,
        bip66_height: c.bip66_height,
        csv_height: c.csv_height,
        segwit_height: c.segwit_height,
        pow_limit: hash256_to_hex(&c.pow_limit),
        pos_limit: hash256_to_hex(&c.pos_limit),
        pow_target_timespan: c.pow_target_timespan,
        pow_target_spacing: c.pow_target_spacing,
        difficulty_adjustment_interval: c.difficulty_adjustment_interval(),
        rule_change_activation_threshold: c.rule_change_activation_threshold,
        miner_confirmation_window: c.miner_confirmation_window,
        last_pow_block: c.last_pow_block,
        first_mpos_block: c.first_mpos_block,
        deployments: DeploymentPos::ALL
            .iter()
            .map(|pos| {
                let d = c.deployment(*pos);
                DeploymentSummary {
                    name: pos.info().name,
                    bit: d.bit,
                    start_time: d.start_time,
                    timeout: d.timeout,
                }
            })
            .collect(),
        checkpoints: p
            .checkpoints
            .entries()
            .iter()
            .map(|(height, hash)| CheckpointSummary {
                height: *height,
                hash: hash256_to_hex(hash),
            })
            .collect(),
        chain_tx_time: p.chain_tx_data.time,
        chain_tx_count: p.chain_tx_data.tx_count,
        chain_tx_rate: p.chain_tx_data.tx_rate,
    }
}

#[derive(Debug, Serialize)]
pub struct GenesisReport {
    pub hash: String,
    pub merkle_root: String,
    pub time: u32,
    pub nonce: u32,
    pub bits: String,
    pub version: i32,
    pub header_hex: String,
    pub coinbase_hex: String,
    pub block_hex: String,
}

pub fn genesis_report(block: &Block) -> GenesisReport {
    let h = &block.header;
    GenesisReport {
        hash: hash256_to_hex(&block.hash()),
        merkle_root: hash256_to_hex(&h.merkle_root),
        time: h.time,
        nonce: h.nonce,
        bits: format!("{:#010x}", h.bits),
        version: h.version,
        header_hex: hex::encode(block_header_bytes(h)),
        coinbase_hex: block
            .txs
            .first()
            .map(|tx| hex::encode(tx_bytes(tx)))
            .unwrap_or_default(),
        block_hex: hex::encode(block_bytes(block)),
    }
}
