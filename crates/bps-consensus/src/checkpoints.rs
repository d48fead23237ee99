use crate::error::{ErrorCode, ParamsError};
use crate::hash::{hash256_to_hex, Hash256};

/// Hardcoded (height, hash) pairs. Heights are strictly increasing, which
/// [`CheckpointData::new`] enforces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckpointData {
    checkpoints: Vec<(i32, Hash256)>,
}

impl CheckpointData {
    pub fn new(checkpoints: Vec<(i32, Hash256)>) -> Result<Self, ParamsError> {
        for pair in checkpoints.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(ParamsError::new(
                    ErrorCode::ParamsErrCheckpointOrder,
                    format!(
                        "checkpoint height {} ({}) does not follow {}",
                        pair[1].0,
                        hash256_to_hex(&pair[1].1),
                        pair[0].0
                    ),
                ));
            }
        }
        Ok(Self { checkpoints })
    }

    pub fn entries(&self) -> &[(i32, Hash256)] {
        &self.checkpoints
    }

    pub fn get(&self, height: i32) -> Option<&Hash256> {
        self.checkpoints
            .binary_search_by_key(&height, |(h, _)| *h)
            .ok()
            .map(|i| &self.checkpoints[i].1)
    }

    pub fn last_height(&self) -> Option<i32> {
        self.checkpoints.last().map(|(h, _)| *h)
    }
}

/// Transaction-count snapshot used to estimate sync progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainTxData {
    pub time: i64,
    pub tx_count: i64,
    pub tx_rate: f64,
}
