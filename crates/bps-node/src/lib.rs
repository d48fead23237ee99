pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod mine;
pub mod report;

pub use args::ArgsManager;
pub use config::{default_node_config, NodeConfig, DEFAULT_MINE_MAX_NONCE};
pub use error::NodeError;
pub use logging::init_logging;
pub use mine::mine_genesis;
pub use report::{genesis_report, params_summary, GenesisReport, ParamsSummary};
