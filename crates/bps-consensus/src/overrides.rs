use std::collections::BTreeMap;
use std::num::{IntErrorKind, ParseIntError};

use tracing::info;

use crate::consensus::ConsensusRules;
use crate::deployments::DeploymentPos;
use crate::error::{ErrorCode, ParamsError};

pub const ARG_SEGWIT_HEIGHT: &str = "segwitheight";
pub const ARG_VBPARAMS: &str = "vbparams";

/// Read-only view of operator arguments. Keys carry no leading dash.
pub trait ArgLookup {
    fn is_arg_set(&self, key: &str) -> bool;
    /// Last value given for `key`.
    fn get_arg(&self, key: &str) -> Option<String>;
    /// Every value given for `key`, in order.
    fn get_args(&self, key: &str) -> Vec<String>;
}

/// In-memory [`ArgLookup`], mostly for tests and embedding callers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapArgs {
    values: BTreeMap<String, Vec<String>>,
}

impl MapArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: &str, value: &str) {
        self.values
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }
}

impl ArgLookup for MapArgs {
    fn is_arg_set(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(|v| !v.is_empty())
    }

    fn get_arg(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(|v| v.last().cloned())
    }

    fn get_args(&self, key: &str) -> Vec<String> {
        self.values.get(key).cloned().unwrap_or_default()
    }
}

/// Applies `segwitheight` and `vbparams` to regtest rules. Stops at the
/// first bad entry; the caller must discard `rules` on error.
pub fn apply_overrides(
    args: &dyn ArgLookup,
    rules: &mut ConsensusRules,
) -> Result<(), ParamsError> {
    if args.is_arg_set(ARG_SEGWIT_HEIGHT) {
        if let Some(raw) = args.get_arg(ARG_SEGWIT_HEIGHT) {
            rules.segwit_height = parse_segwit_height(&raw)?;
        }
    }

    for entry in args.get_args(ARG_VBPARAMS) {
        let (pos, start_time, timeout) = parse_vbparams(&entry)?;
        rules.update_version_bits_parameters(pos, start_time, timeout);
        info!(
            deployment = pos.info().name,
            start = start_time,
            timeout,
            "setting version bits activation parameters"
        );
    }
    Ok(())
}

/// `-1` disables segwit by mapping to a height that is never reached.
pub fn parse_segwit_height(raw: &str) -> Result<i32, ParamsError> {
    let height: i64 = raw.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParamsError::new(
            ErrorCode::ParamsErrActivationHeightOutOfRange,
            format!(
                "activation height {} for segwit is out of valid range; use -1 to disable segwit",
                raw.trim()
            ),
        ),
        _ => ParamsError::new(
            ErrorCode::ParamsErrInvalidActivationHeight,
            format!("activation height {raw:?} for segwit is not an integer"),
        ),
    })?;
    if height < -1 || height >= i64::from(i32::MAX) {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrActivationHeightOutOfRange,
            format!(
                "activation height {height} for segwit is out of valid range; use -1 to disable segwit"
            ),
        ));
    }
    if height == -1 {
        info!("segwit disabled for testing");
        return Ok(i32::MAX);
    }
    Ok(height as i32)
}

/// Parses one `name:start:timeout` entry.
pub fn parse_vbparams(entry: &str) -> Result<(DeploymentPos, i64, i64), ParamsError> {
    let fields: Vec<&str> = entry.split(':').collect();
    if fields.len() != 3 {
        return Err(ParamsError::new(
            ErrorCode::ParamsErrVbParamsMalformed,
            format!("version bits parameters malformed ({entry}), expecting deployment:start:end"),
        ));
    }
    let start_time: i64 = fields[1].parse().map_err(|_| {
        ParamsError::new(
            ErrorCode::ParamsErrInvalidStartTime,
            format!("invalid start time ({})", fields[1]),
        )
    })?;
    let timeout: i64 = fields[2].parse().map_err(|_| {
        ParamsError::new(
            ErrorCode::ParamsErrInvalidTimeout,
            format!("invalid timeout ({})", fields[2]),
        )
    })?;
    let pos = DeploymentPos::from_name(fields[0]).ok_or_else(|| {
        ParamsError::new(
            ErrorCode::ParamsErrUnknownDeployment,
            format!("unknown deployment ({})", fields[0]),
        )
    })?;
    Ok((pos, start_time, timeout))
}
