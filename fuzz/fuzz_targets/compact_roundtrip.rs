#![no_main]

use libfuzzer_sys::fuzz_target;

// Any decodable compact value survives encode -> decode unchanged, and the
// encoding is canonical after one pass.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let bits = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);

    let t = bps_consensus::decode_compact(bits);
    if t.negative || t.overflow {
        return;
    }

    let c = bps_consensus::encode_compact(&t.value);
    let again = bps_consensus::decode_compact(c);
    assert!(!again.negative && !again.overflow);
    assert_eq!(again.value, t.value, "compact value changed: {bits:#010x} -> {c:#010x}");
    assert_eq!(bps_consensus::encode_compact(&again.value), c, "encoding not canonical");
});
