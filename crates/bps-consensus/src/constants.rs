pub const COIN: i64 = 100_000_000;

/// Blocks a coinbase or coinstake output must wait before it can be spent.
pub const COINBASE_MATURITY: i32 = 500;

/// Version-bits deployments may use bits 0..=28; the top three header
/// version bits are reserved for the signalling marker.
pub const VERSIONBITS_NUM_BITS: u8 = 29;

pub const GENESIS_BITS: u32 = 0x1e0f_ffff;
pub const GENESIS_VERSION: i32 = 1;
pub const GENESIS_REWARD: i64 = 50 * COIN;

/// Numeric literal pushed first in the genesis coinbase script sig.
pub const GENESIS_SCRIPT_SIG_MARKER: i64 = 486_604_799;
