use crate::constants::VERSIONBITS_NUM_BITS;
use crate::error::{ErrorCode, ParamsError};

/// Timeout sentinel for deployments that never expire.
pub const NO_TIMEOUT: i64 = i64::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeploymentPos {
    TestDummy,
}

pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = 1;

impl DeploymentPos {
    pub const ALL: [DeploymentPos; MAX_VERSION_BITS_DEPLOYMENTS] = [DeploymentPos::TestDummy];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static DeploymentInfo {
        &VERSION_BITS_DEPLOYMENT_INFO[self.index()]
    }

    /// Exact, case-sensitive lookup in the deployment name table.
    pub fn from_name(name: &str) -> Option<DeploymentPos> {
        DeploymentPos::ALL
            .into_iter()
            .find(|pos| pos.info().name == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploymentInfo {
    pub name: &'static str,
    /// Whether block templates may assume support without client opt-in.
    pub gbt_force: bool,
}

pub const VERSION_BITS_DEPLOYMENT_INFO: [DeploymentInfo; MAX_VERSION_BITS_DEPLOYMENTS] =
    [DeploymentInfo {
        name: "testdummy",
        gbt_force: true,
    }];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
}

impl Deployment {
    fn overlaps(&self, other: &Deployment) -> bool {
        self.start_time <= other.timeout && other.start_time <= self.timeout
    }
}

fn deployment_label(i: usize) -> String {
    match DeploymentPos::ALL.get(i) {
        Some(pos) => pos.info().name.to_string(),
        None => format!("#{i}"),
    }
}

/// Checks every deployment uses a signalling bit in range, and that no two
/// deployments with overlapping windows share a bit.
pub fn validate_deployments(deployments: &[Deployment]) -> Result<(), ParamsError> {
    for (i, d) in deployments.iter().enumerate() {
        if d.bit >= VERSIONBITS_NUM_BITS {
            return Err(ParamsError::new(
                ErrorCode::ParamsErrInvalidConstant,
                format!(
                    "deployment {} uses bit {} (max {})",
                    deployment_label(i),
                    d.bit,
                    VERSIONBITS_NUM_BITS - 1
                ),
            ));
        }
        for (j, other) in deployments.iter().enumerate().skip(i + 1) {
            if d.bit == other.bit && d.overlaps(other) {
                return Err(ParamsError::new(
                    ErrorCode::ParamsErrDeploymentConflict,
                    format!(
                        "deployments {} and {} both signal on bit {} with overlapping windows",
                        deployment_label(i),
                        deployment_label(j),
                        d.bit
                    ),
                ));
            }
        }
    }
    Ok(())
}
