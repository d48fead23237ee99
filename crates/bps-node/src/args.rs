use bps_consensus::{ArgLookup, ErrorCode, MapArgs, Network, ParamsError};

use crate::error::NodeError;

/// Command-line options in `-name=value` form.
///
/// One or two leading dashes are accepted, a bare `-flag` stores `"1"`, and
/// repeated options keep every value in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgsManager {
    values: MapArgs,
}

impl ArgsManager {
    pub fn parse(tokens: &[String]) -> Result<Self, NodeError> {
        let mut out = ArgsManager::default();
        for token in tokens {
            let body = token
                .strip_prefix("--")
                .or_else(|| token.strip_prefix('-'))
                .ok_or_else(|| NodeError::Usage(format!("unexpected argument: {token}")))?;
            let (name, value) = match body.split_once('=') {
                Some((n, v)) => (n, v),
                None => (body, "1"),
            };
            if name.is_empty() {
                return Err(NodeError::Usage(format!("empty option name: {token}")));
            }
            out.values.push(name, value);
        }
        Ok(out)
    }

    /// `0`, `false` and `no` are false; any other value of a set flag is
    /// true.
    pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
        match self.get_arg(key) {
            Some(v) => !matches!(v.as_str(), "0" | "false" | "no"),
            None => default,
        }
    }

    pub fn get_arg_or(&self, key: &str, default: &str) -> String {
        self.get_arg(key).unwrap_or_else(|| default.to_string())
    }

    /// Resolves `-regtest`, `-testnet` and `-chain=` to one network.
    pub fn network(&self) -> Result<Network, ParamsError> {
        let regtest = self.get_bool_arg("regtest", false);
        let testnet = self.get_bool_arg("testnet", false);
        match (regtest, testnet) {
            (true, true) => Err(ParamsError::new(
                ErrorCode::ParamsErrInvalidChainCombination,
                "invalid combination of -regtest and -testnet",
            )),
            (true, false) => Ok(Network::Regtest),
            (false, true) => Ok(Network::Test),
            (false, false) => self.get_arg_or("chain", Network::Main.as_str()).parse(),
        }
    }
}

impl ArgLookup for ArgsManager {
    fn is_arg_set(&self, key: &str) -> bool {
        self.values.is_arg_set(key)
    }

    fn get_arg(&self, key: &str) -> Option<String> {
        self.values.get_arg(key)
    }

    fn get_args(&self, key: &str) -> Vec<String> {
        self.values.get_args(key)
    }
}
