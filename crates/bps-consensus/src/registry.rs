use once_cell::sync::OnceCell;
use tracing::info;

use crate::chainparams::{create_chain_params, ChainParams};
use crate::error::{ErrorCode, ParamsError};
use crate::hash::hash256_to_hex;
use crate::overrides::ArgLookup;

/// Assign-once holder for the active parameter set.
///
/// `select` publishes exactly one [`ChainParams`]; every later `select` is
/// rejected, successful or not. `OnceCell` orders the publishing write
/// before any read on another thread.
#[derive(Debug, Default)]
pub struct ParamsRegistry {
    cell: OnceCell<ChainParams>,
}

impl ParamsRegistry {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn select(&self, name: &str, args: &dyn ArgLookup) -> Result<&ChainParams, ParamsError> {
        if let Some(active) = self.cell.get() {
            return Err(already_selected(name, active));
        }
        let params = create_chain_params(name, args)?;
        let genesis = hash256_to_hex(params.genesis_hash());
        let mut fresh = false;
        let active = self.cell.get_or_init(|| {
            fresh = true;
            params
        });
        if !fresh {
            return Err(already_selected(name, active));
        }
        info!(network = active.network_id(), genesis = %genesis, "selected chain parameters");
        Ok(active)
    }

    pub fn is_selected(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn try_current(&self) -> Option<&ChainParams> {
        self.cell.get()
    }

    /// # Panics
    ///
    /// If no network has been selected yet. Reading parameters before
    /// selection is a programming error.
    pub fn current(&self) -> &ChainParams {
        match self.cell.get() {
            Some(p) => p,
            None => panic!("chain parameters read before a network was selected"),
        }
    }
}

fn already_selected(requested: &str, active: &ChainParams) -> ParamsError {
    ParamsError::new(
        ErrorCode::ParamsErrAlreadySelected,
        format!(
            "chain parameters already selected ({}); cannot select {requested}",
            active.network_id()
        ),
    )
}

static GLOBAL_PARAMS: ParamsRegistry = ParamsRegistry::new();

/// Selects the process-wide network. Call once at startup.
pub fn select_params(name: &str, args: &dyn ArgLookup) -> Result<&'static ChainParams, ParamsError> {
    GLOBAL_PARAMS.select(name, args)
}

/// The process-wide parameter set. Panics before [`select_params`].
pub fn params() -> &'static ChainParams {
    GLOBAL_PARAMS.current()
}

pub fn params_selected() -> bool {
    GLOBAL_PARAMS.is_selected()
}
