#![no_main]

use libfuzzer_sys::fuzz_target;

// meets_target must never panic and must reject anything above the ceiling.
// Fixed input: 32 bytes hash + 4 bytes bits + 32 bytes ceiling = 68 bytes.
fuzz_target!(|data: &[u8]| {
    if data.len() < 68 {
        return;
    }

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&data[..32]);
    let bits = u32::from_le_bytes([data[32], data[33], data[34], data[35]]);
    let mut ceiling = [0u8; 32];
    ceiling.copy_from_slice(&data[36..68]);

    if bps_consensus::meets_target(&hash, bits, &ceiling) {
        let target = bps_consensus::decode_compact(bits);
        assert!(!target.negative && !target.overflow);
        let h = num_bigint::BigUint::from_bytes_le(&hash);
        let c = num_bigint::BigUint::from_bytes_le(&ceiling);
        assert!(h <= target.value, "hash above target accepted");
        assert!(target.value <= c, "target above ceiling accepted");
    }
});
