#![no_main]

use bps_consensus::overrides::{parse_segwit_height, parse_vbparams};
use libfuzzer_sys::fuzz_target;

// Override parsing takes operator text: it may reject, never panic.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(h) = parse_segwit_height(s) {
        assert!(h >= 0);
    }
    if let Ok((pos, _, _)) = parse_vbparams(s) {
        assert!(s.starts_with(pos.info().name));
    }
});
