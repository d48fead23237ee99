use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use tracing::debug;

use crate::block::Block;
use crate::checkpoints::{ChainTxData, CheckpointData};
use crate::consensus::ConsensusRules;
use crate::constants::{COINBASE_MATURITY, GENESIS_BITS, GENESIS_REWARD, GENESIS_VERSION};
use crate::deployments::{Deployment, NO_TIMEOUT};
use crate::error::{ErrorCode, ParamsError};
use crate::genesis::{create_genesis_block, verify_genesis};
use crate::hash::{hash256_from_hex, Hash256, ZERO_HASH};
use crate::overrides::{apply_overrides, ArgLookup};

const GENESIS_MERKLE_ROOT: &str =
    "aa7c82960d1f8a8354b301053cf2c692a6b18a0af56afdf4dfa7aa7abd0723d8";
const MAIN_GENESIS_HASH: &str = "0000091185a04dbbcee63ad911d786ef77e4d9c2a06d51c2eaecd17234a6bb4c";
const TEST_GENESIS_HASH: &str = "00000aba6dbb5d4250ca76041f18c4939241e3f3d3bfff1e81e2866df3a2f995";
// Differs from the computed test genesis hash; kept as published.
const TEST_CHECKPOINT_0: &str = "00000fe2acf48e35c5b594d9ff7db2a7bbafa1b73205b2789a6833be70595818";

const MAIN_GENESIS_TIME: u32 = 1_602_160_971;
const MAIN_GENESIS_NONCE: u32 = 2_044_995;
const TEST_GENESIS_TIME: u32 = 1_601_661_242;
const TEST_GENESIS_NONCE: u32 = 4_559_986;

const TESTDUMMY_BIT: u8 = 28;
// 2008-01-01 .. 2008-12-31
const TESTDUMMY_START: i64 = 1_199_145_601;
const TESTDUMMY_TIMEOUT: i64 = 1_230_767_999;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Test,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| {
                ParamsError::new(ErrorCode::ParamsErrUnknownChain, format!("unknown chain: {s}"))
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
}

/// IPv6 (or IPv4-mapped) bootstrap address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

/// Everything one network pins down: consensus rules, wire identity,
/// address encoding and bootstrap data.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkParams {
    pub network: Network,
    pub consensus: ConsensusRules,
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub prune_after_height: u64,
    /// Gigabytes.
    pub assumed_blockchain_size: u64,
    pub assumed_chain_state_size: u64,
    pub genesis: Block,
    pub dns_seeds: Vec<String>,
    pub fixed_seeds: Vec<SeedSpec6>,
    pub base58_prefixes: Base58Prefixes,
    pub bech32_hrp: String,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub is_test_chain: bool,
    pub is_mockable_chain: bool,
    pub checkpoints: CheckpointData,
    pub chain_tx_data: ChainTxData,
}

impl NetworkParams {
    pub fn network_id(&self) -> &'static str {
        self.network.as_str()
    }

    pub fn genesis_hash(&self) -> &Hash256 {
        &self.consensus.hash_genesis_block
    }
}

/// The active ruleset. Only `Regtest` accepts operator overrides, and only
/// while it is being constructed.
#[derive(Clone, Debug, PartialEq)]
pub enum ChainParams {
    Main(NetworkParams),
    Test(NetworkParams),
    Regtest(NetworkParams),
}

impl Deref for ChainParams {
    type Target = NetworkParams;

    fn deref(&self) -> &NetworkParams {
        match self {
            ChainParams::Main(p) | ChainParams::Test(p) | ChainParams::Regtest(p) => p,
        }
    }
}

fn hash_const(s: &str) -> Result<Hash256, ParamsError> {
    hash256_from_hex(s).map_err(|e| ParamsError::new(ErrorCode::ParamsErrInvalidConstant, e))
}

fn first_mpos_block(last_pow_block: i32, recipients: i32) -> i32 {
    last_pow_block + recipients + COINBASE_MATURITY
}

fn testnet_prefixes() -> Base58Prefixes {
    Base58Prefixes {
        pubkey_address: vec![65],
        script_address: vec![78],
        secret_key: vec![130],
        ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
        ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
    }
}

fn main_consensus() -> Result<ConsensusRules, ParamsError> {
    let segwit_height = 1;
    let miner_confirmation_window: u32 = 2016;
    let last_pow_block = 5000;
    let mpos_reward_recipients = 10;
    let bps_reward_match_step = 40_000;
    Ok(ConsensusRules {
        hash_genesis_block: ZERO_HASH,
        subsidy_halving_interval: 700_000,
        bip16_exception: hash_const(
            "00000bcd2d9ccbb28606a8b2d962b97394f612bf6e021ce1d64d71cecb008029",
        )?,
        bip34_height: 1,
        bip34_hash: hash_const("00000b3b403a2b37780a8dc3813e02463cbaceab135efffe4aaacf0446f862d5")?,
        bip65_height: 1,
        bip66_height: 1,
        csv_height: 1,
        segwit_height,
        min_bip9_warning_height: segwit_height + miner_confirmation_window as i32,
        bps_reward_match_step,
        bps_reward_match_height: 3 * bps_reward_match_step,
        bps_diff_adj_height: 130_000,
        pow_limit: hash_const("00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pos_limit: hash_const("00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        // retarget every 10 blocks
        pow_target_timespan: 10 * 3 * 60,
        pow_target_spacing: 3 * 60,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        pos_no_retargeting: false,
        // 95% of the window
        rule_change_activation_threshold: 1916,
        miner_confirmation_window,
        last_pow_block,
        mpos_reward_recipients,
        first_mpos_block: first_mpos_block(last_pow_block, mpos_reward_recipients),
        enable_header_signature_height: 0,
        checkpoint_span: COINBASE_MATURITY,
        deployments: [Deployment {
            bit: TESTDUMMY_BIT,
            start_time: TESTDUMMY_START,
            timeout: TESTDUMMY_TIMEOUT,
        }],
        minimum_chain_work: hash_const("01")?,
        default_assume_valid: hash_const(
            "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        )?,
    })
}

fn test_consensus() -> Result<ConsensusRules, ParamsError> {
    let segwit_height = 1;
    let miner_confirmation_window: u32 = 2016;
    let last_pow_block = 501;
    let mpos_reward_recipients = 10;
    let bps_reward_match_step = 400;
    let genesis_checkpoint = hash_const(TEST_CHECKPOINT_0)?;
    Ok(ConsensusRules {
        hash_genesis_block: ZERO_HASH,
        subsidy_halving_interval: 700_000,
        bip16_exception: genesis_checkpoint,
        bip34_height: 1,
        bip34_hash: genesis_checkpoint,
        bip65_height: 1,
        bip66_height: 1,
        csv_height: 1,
        segwit_height,
        min_bip9_warning_height: segwit_height + miner_confirmation_window as i32,
        bps_reward_match_step,
        bps_reward_match_height: 3 * bps_reward_match_step,
        bps_diff_adj_height: 1500,
        pow_limit: hash_const("00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pos_limit: hash_const("0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?,
        pow_target_timespan: 10 * 3 * 60,
        pow_target_spacing: 3 * 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: false,
        pos_no_retargeting: false,
        // 75% for test chains
        rule_change_activation_threshold: 1512,
        miner_confirmation_window,
        last_pow_block,
        mpos_reward_recipients,
        first_mpos_block: first_mpos_block(last_pow_block, mpos_reward_recipients),
        enable_header_signature_height: 0,
        checkpoint_span: COINBASE_MATURITY,
        deployments: [Deployment {
            bit: TESTDUMMY_BIT,
            start_time: TESTDUMMY_START,
            timeout: TESTDUMMY_TIMEOUT,
        }],
        minimum_chain_work: ZERO_HASH,
        default_assume_valid: genesis_checkpoint,
    })
}

fn regtest_consensus() -> Result<ConsensusRules, ParamsError> {
    let bps_reward_match_step = 400;
    let limit = hash_const("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")?;
    Ok(ConsensusRules {
        hash_genesis_block: ZERO_HASH,
        subsidy_halving_interval: 150,
        bip16_exception: ZERO_HASH,
        bip34_height: 500,
        bip34_hash: ZERO_HASH,
        bip65_height: 1351,
        bip66_height: 1251,
        csv_height: 432,
        // always active unless overridden
        segwit_height: 0,
        min_bip9_warning_height: 0,
        bps_reward_match_step,
        bps_reward_match_height: 3 * bps_reward_match_step,
        bps_diff_adj_height: 1500,
        pow_limit: limit,
        pos_limit: limit,
        pow_target_timespan: 10 * 3 * 60,
        pow_target_spacing: 3 * 60,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        pos_no_retargeting: true,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        last_pow_block: i32::MAX,
        mpos_reward_recipients: 10,
        first_mpos_block: 5000,
        enable_header_signature_height: 0,
        checkpoint_span: COINBASE_MATURITY,
        deployments: [Deployment {
            bit: TESTDUMMY_BIT,
            start_time: 0,
            timeout: NO_TIMEOUT,
        }],
        minimum_chain_work: ZERO_HASH,
        default_assume_valid: ZERO_HASH,
    })
}

/// Builds and verifies the genesis block, then records its hash in `rules`.
fn verified_genesis(
    rules: &mut ConsensusRules,
    time: u32,
    nonce: u32,
    expected_hash: &str,
) -> Result<Block, ParamsError> {
    let genesis = create_genesis_block(time, nonce, GENESIS_BITS, GENESIS_VERSION, GENESIS_REWARD);
    rules.hash_genesis_block = verify_genesis(
        &genesis,
        &hash_const(expected_hash)?,
        &hash_const(GENESIS_MERKLE_ROOT)?,
    )?;
    rules.validate()?;
    Ok(genesis)
}

impl ChainParams {
    pub fn main() -> Result<ChainParams, ParamsError> {
        let mut consensus = main_consensus()?;
        let genesis = verified_genesis(
            &mut consensus,
            MAIN_GENESIS_TIME,
            MAIN_GENESIS_NONCE,
            MAIN_GENESIS_HASH,
        )?;
        let checkpoints = CheckpointData::new(vec![
            (0, hash_const(MAIN_GENESIS_HASH)?),
            (
                5000,
                hash_const("00000d13c755a4d0ac398322f93cfde68ca7ed2e959f06a57a2282497451698c")?,
            ),
        ])?;
        let dns_seeds = (1..=8)
            .map(|i| format!("seed{i}.bitcoinstaking.org"))
            .collect();

        debug!(network = "main", "chain parameters constructed");
        Ok(ChainParams::Main(NetworkParams {
            network: Network::Main,
            consensus,
            message_start: [0x9d, 0xf7, 0x2c, 0x1e],
            default_port: 8777,
            prune_after_height: 100_000,
            assumed_blockchain_size: 2,
            assumed_chain_state_size: 1,
            genesis,
            dns_seeds,
            fixed_seeds: Vec::new(),
            base58_prefixes: Base58Prefixes {
                pubkey_address: vec![0],
                script_address: vec![5],
                secret_key: vec![128],
                ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
                ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
            },
            bech32_hrp: "bc".to_string(),
            default_consistency_checks: false,
            require_standard: true,
            is_test_chain: false,
            is_mockable_chain: false,
            checkpoints,
            chain_tx_data: ChainTxData {
                time: 1_601_750_080,
                tx_count: 10_000,
                tx_rate: 0.058_181_438_950_625_15,
            },
        }))
    }

    pub fn test() -> Result<ChainParams, ParamsError> {
        let mut consensus = test_consensus()?;
        let genesis = verified_genesis(
            &mut consensus,
            TEST_GENESIS_TIME,
            TEST_GENESIS_NONCE,
            TEST_GENESIS_HASH,
        )?;
        let checkpoints = CheckpointData::new(vec![(0, hash_const(TEST_CHECKPOINT_0)?)])?;

        debug!(network = "test", "chain parameters constructed");
        Ok(ChainParams::Test(NetworkParams {
            network: Network::Test,
            consensus,
            message_start: [0xd5, 0x1f, 0x35, 0x29],
            default_port: 48932,
            prune_after_height: 1000,
            assumed_blockchain_size: 40,
            assumed_chain_state_size: 2,
            genesis,
            dns_seeds: vec![
                "testnet-seed1.bitcoinstaking.net".to_string(),
                "testnet-seed2.bitcoinstaking.net".to_string(),
            ],
            fixed_seeds: Vec::new(),
            base58_prefixes: testnet_prefixes(),
            bech32_hrp: "bt".to_string(),
            default_consistency_checks: false,
            require_standard: false,
            is_test_chain: true,
            is_mockable_chain: false,
            checkpoints,
            chain_tx_data: ChainTxData {
                time: 1_588_417_200,
                tx_count: 0,
                tx_rate: 0.0,
            },
        }))
    }

    /// Regtest rules with `segwitheight` / `vbparams` from `args` applied
    /// before anything else can observe them.
    pub fn regtest(args: &dyn ArgLookup) -> Result<ChainParams, ParamsError> {
        let mut consensus = regtest_consensus()?;
        apply_overrides(args, &mut consensus)?;
        let genesis = verified_genesis(
            &mut consensus,
            TEST_GENESIS_TIME,
            TEST_GENESIS_NONCE,
            TEST_GENESIS_HASH,
        )?;
        let checkpoints = CheckpointData::new(vec![(
            0,
            hash_const("2b8d445931aa4ea9b52db1488d3641fa2d4f7a3c1f8151bfa99d017493129e97")?,
        )])?;

        debug!(network = "regtest", "chain parameters constructed");
        Ok(ChainParams::Regtest(NetworkParams {
            network: Network::Regtest,
            consensus,
            message_start: [0xfa, 0xbf, 0xb5, 0xda],
            default_port: 48934,
            prune_after_height: 1000,
            assumed_blockchain_size: 0,
            assumed_chain_state_size: 0,
            genesis,
            dns_seeds: Vec::new(),
            fixed_seeds: Vec::new(),
            base58_prefixes: testnet_prefixes(),
            bech32_hrp: "bpt".to_string(),
            default_consistency_checks: true,
            require_standard: true,
            is_test_chain: true,
            is_mockable_chain: true,
            checkpoints,
            chain_tx_data: ChainTxData {
                time: 1_588_417_200,
                tx_count: 0,
                tx_rate: 0.0,
            },
        }))
    }

    pub fn for_network(network: Network, args: &dyn ArgLookup) -> Result<ChainParams, ParamsError> {
        match network {
            Network::Main => ChainParams::main(),
            Network::Test => ChainParams::test(),
            Network::Regtest => ChainParams::regtest(args),
        }
    }
}

/// Maps a chain name to its parameter set. `args` is only consulted for
/// regtest.
pub fn create_chain_params(name: &str, args: &dyn ArgLookup) -> Result<ChainParams, ParamsError> {
    ChainParams::for_network(name.parse()?, args)
}
