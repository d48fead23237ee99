pub mod block;
pub mod chainparams;
pub mod checkpoints;
mod compactsize;
pub mod consensus;
pub mod constants;
pub mod deployments;
pub mod error;
pub mod genesis;
pub mod hash;
pub mod merkle;
pub mod overrides;
pub mod pow;
pub mod registry;
pub mod script;
pub mod tx;

pub use block::{block_hash, block_header_bytes, Block, BlockHeader};
pub use chainparams::{
    create_chain_params, Base58Prefixes, ChainParams, Network, NetworkParams, SeedSpec6,
};
pub use checkpoints::{ChainTxData, CheckpointData};
pub use consensus::ConsensusRules;
pub use deployments::{Deployment, DeploymentPos, NO_TIMEOUT};
pub use error::{ErrorCode, ParamsError};
pub use genesis::{build_genesis, create_genesis_block, verify_genesis, GENESIS_TIMESTAMP};
pub use hash::{hash256_from_hex, hash256_to_hex, Hash256};
pub use overrides::{apply_overrides, ArgLookup, MapArgs};
pub use pow::{decode_compact, encode_compact, meets_target, CompactTarget};
pub use registry::{params, select_params, ParamsRegistry};

#[cfg(test)]
mod overrides_tests;
