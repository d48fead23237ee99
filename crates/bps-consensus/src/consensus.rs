use crate::deployments::{
    validate_deployments, Deployment, DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS,
};
use crate::error::{ErrorCode, ParamsError};
use crate::hash::Hash256;

/// Consensus rules shared by every validation component of one network.
///
/// Heights are block heights. Limits and chain-work values are 256-bit
/// integers held in internal byte order.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusRules {
    pub hash_genesis_block: Hash256,
    pub subsidy_halving_interval: i32,
    /// Block whose P2SH evaluation is exempt from BIP16.
    pub bip16_exception: Hash256,
    pub bip34_height: i32,
    pub bip34_hash: Hash256,
    pub bip65_height: i32,
    pub bip66_height: i32,
    pub csv_height: i32,
    /// `i32::MAX` means segwit never activates.
    pub segwit_height: i32,
    pub min_bip9_warning_height: i32,
    pub bps_reward_match_step: i32,
    pub bps_reward_match_height: i32,
    pub bps_diff_adj_height: i32,
    pub pow_limit: Hash256,
    pub pos_limit: Hash256,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub pos_no_retargeting: bool,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub last_pow_block: i32,
    pub mpos_reward_recipients: i32,
    pub first_mpos_block: i32,
    pub enable_header_signature_height: i32,
    pub checkpoint_span: i32,
    pub deployments: [Deployment; MAX_VERSION_BITS_DEPLOYMENTS],
    pub minimum_chain_work: Hash256,
    pub default_assume_valid: Hash256,
}

impl ConsensusRules {
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    pub fn deployment(&self, pos: DeploymentPos) -> &Deployment {
        &self.deployments[pos.index()]
    }

    pub fn update_version_bits_parameters(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) {
        let d = &mut self.deployments[pos.index()];
        d.start_time = start_time;
        d.timeout = timeout;
    }

    /// Internal consistency of the literal tables; failures here are build
    /// defects, never operator mistakes.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.pow_target_spacing <= 0 || self.pow_target_timespan < self.pow_target_spacing {
            return Err(ParamsError::new(
                ErrorCode::ParamsErrInvalidConstant,
                format!(
                    "target timespan {} / spacing {} invalid",
                    self.pow_target_timespan, self.pow_target_spacing
                ),
            ));
        }
        if self.miner_confirmation_window == 0
            || self.rule_change_activation_threshold > self.miner_confirmation_window
        {
            return Err(ParamsError::new(
                ErrorCode::ParamsErrInvalidConstant,
                format!(
                    "activation threshold {} exceeds confirmation window {}",
                    self.rule_change_activation_threshold, self.miner_confirmation_window
                ),
            ));
        }
        validate_deployments(&self.deployments)
    }
}
