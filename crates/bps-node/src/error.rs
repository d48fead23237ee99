use bps_consensus::ParamsError;

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// Bad or missing command-line input.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error("logging: {0}")]
    Logging(String),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl NodeError {
    /// `1` when the binary itself is inconsistent or output failed, `2`
    /// when the operator can fix the invocation.
    pub fn exit_code(&self) -> i32 {
        match self {
            NodeError::Usage(_) => 2,
            NodeError::Params(e) if e.is_fatal() => 1,
            NodeError::Params(_) => 2,
            NodeError::Logging(_) | NodeError::Json(_) => 1,
        }
    }
}
