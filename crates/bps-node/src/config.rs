use bps_consensus::{ArgLookup, Network};

use crate::args::ArgsManager;
use crate::error::NodeError;

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_MINE_START_NONCE: u32 = 0;
pub const DEFAULT_MINE_MAX_NONCE: u32 = 0x00ff_0000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeConfig {
    pub network: Network,
    /// Used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub mine_start_nonce: u32,
    pub mine_max_nonce: u32,
}

pub fn default_node_config(network: Network) -> NodeConfig {
    NodeConfig {
        network,
        log_filter: DEFAULT_LOG_FILTER.to_string(),
        mine_start_nonce: DEFAULT_MINE_START_NONCE,
        mine_max_nonce: DEFAULT_MINE_MAX_NONCE,
    }
}

impl NodeConfig {
    pub fn from_args(args: &ArgsManager) -> Result<Self, NodeError> {
        let mut cfg = default_node_config(args.network()?);
        if let Some(filter) = args.get_arg("loglevel") {
            cfg.log_filter = filter;
        }
        if let Some(v) = parse_u32_arg(args, "start-nonce")? {
            cfg.mine_start_nonce = v;
        }
        if let Some(v) = parse_u32_arg(args, "max-nonce")? {
            cfg.mine_max_nonce = v;
        }
        if cfg.mine_start_nonce > cfg.mine_max_nonce {
            return Err(NodeError::Usage(format!(
                "-start-nonce {} exceeds -max-nonce {}",
                cfg.mine_start_nonce, cfg.mine_max_nonce
            )));
        }
        Ok(cfg)
    }
}

/// Decimal, or hex with a `0x` prefix.
pub fn parse_u32(flag: &str, raw: &str) -> Result<u32, NodeError> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex_digits) => u32::from_str_radix(hex_digits, 16),
        None => raw.parse::<u32>(),
    };
    parsed.map_err(|e| NodeError::Usage(format!("-{flag}: {e}")))
}

pub fn parse_u32_arg(args: &ArgsManager, flag: &str) -> Result<Option<u32>, NodeError> {
    match args.get_arg(flag) {
        Some(raw) => parse_u32(flag, &raw).map(Some),
        None => Ok(None),
    }
}

pub fn required_arg(args: &ArgsManager, flag: &str) -> Result<String, NodeError> {
    args.get_arg(flag)
        .ok_or_else(|| NodeError::Usage(format!("missing required flag: -{flag}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> ArgsManager {
        let owned: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        ArgsManager::parse(&owned).expect("parse")
    }

    #[test]
    fn defaults() {
        let cfg = NodeConfig::from_args(&args(&[])).expect("config");
        assert_eq!(cfg, default_node_config(Network::Main));
        assert_eq!(cfg.mine_max_nonce, 0xff0000);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn overrides_and_ranges() {
        let cfg = NodeConfig::from_args(&args(&[
            "-testnet",
            "-loglevel=debug",
            "-start-nonce=10",
            "-max-nonce=0x20",
        ]))
        .expect("config");
        assert_eq!(cfg.network, Network::Test);
        assert_eq!(cfg.log_filter, "debug");
        assert_eq!((cfg.mine_start_nonce, cfg.mine_max_nonce), (10, 32));

        let err = NodeConfig::from_args(&args(&["-start-nonce=5", "-max-nonce=4"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = NodeConfig::from_args(&args(&["-max-nonce=lots"])).unwrap_err();
        assert!(err.to_string().starts_with("-max-nonce"));
    }

    #[test]
    fn bad_chain_is_a_user_error() {
        let err = NodeConfig::from_args(&args(&["-regtest", "-testnet"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("PARAMS_ERR_INVALID_CHAIN_COMBINATION"));
    }

    #[test]
    fn parse_u32_forms() {
        assert_eq!(parse_u32("bits", "0x1e0fffff").expect("hex"), 0x1e0f_ffff);
        assert_eq!(parse_u32("bits", "504365055").expect("dec"), 0x1e0f_ffff);
        assert!(parse_u32("bits", "0xzz").is_err());
    }
}
