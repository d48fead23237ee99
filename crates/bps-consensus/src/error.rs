#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ParamsErrUnknownChain,
    ParamsErrAlreadySelected,
    ParamsErrInvalidChainCombination,
    ParamsErrActivationHeightOutOfRange,
    ParamsErrInvalidActivationHeight,
    ParamsErrVbParamsMalformed,
    ParamsErrInvalidStartTime,
    ParamsErrInvalidTimeout,
    ParamsErrUnknownDeployment,
    ParamsErrDeploymentConflict,

    ParamsErrInvalidConstant,
    ParamsErrCheckpointOrder,
    GenesisErrHashMismatch,
    GenesisErrMerkleMismatch,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ParamsErrUnknownChain => "PARAMS_ERR_UNKNOWN_CHAIN",
            ErrorCode::ParamsErrAlreadySelected => "PARAMS_ERR_ALREADY_SELECTED",
            ErrorCode::ParamsErrInvalidChainCombination => "PARAMS_ERR_INVALID_CHAIN_COMBINATION",
            ErrorCode::ParamsErrActivationHeightOutOfRange => {
                "PARAMS_ERR_ACTIVATION_HEIGHT_OUT_OF_RANGE"
            }
            ErrorCode::ParamsErrInvalidActivationHeight => "PARAMS_ERR_INVALID_ACTIVATION_HEIGHT",
            ErrorCode::ParamsErrVbParamsMalformed => "PARAMS_ERR_VBPARAMS_MALFORMED",
            ErrorCode::ParamsErrInvalidStartTime => "PARAMS_ERR_INVALID_START_TIME",
            ErrorCode::ParamsErrInvalidTimeout => "PARAMS_ERR_INVALID_TIMEOUT",
            ErrorCode::ParamsErrUnknownDeployment => "PARAMS_ERR_UNKNOWN_DEPLOYMENT",
            ErrorCode::ParamsErrDeploymentConflict => "PARAMS_ERR_DEPLOYMENT_CONFLICT",

            ErrorCode::ParamsErrInvalidConstant => "PARAMS_ERR_INVALID_CONSTANT",
            ErrorCode::ParamsErrCheckpointOrder => "PARAMS_ERR_CHECKPOINT_ORDER",
            ErrorCode::GenesisErrHashMismatch => "GENESIS_ERR_HASH_MISMATCH",
            ErrorCode::GenesisErrMerkleMismatch => "GENESIS_ERR_MERKLE_MISMATCH",
        }
    }

    /// Fatal codes mean the binary carries constants that disagree with the
    /// deployed network. They are never caused by operator input.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            ErrorCode::ParamsErrInvalidConstant
                | ErrorCode::ParamsErrCheckpointOrder
                | ErrorCode::GenesisErrHashMismatch
                | ErrorCode::GenesisErrMerkleMismatch
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}: {msg}", .code.as_str())]
pub struct ParamsError {
    pub code: ErrorCode,
    pub msg: String,
}

impl ParamsError {
    pub fn new(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}
