#![no_main]

use libfuzzer_sys::fuzz_target;
use splitrs::{chunk_file_name, order_key};

fuzz_target!(|data: &[u8]| {
    // Parsing an arbitrary name must never panic
    if let Ok(name) = std::str::from_utf8(data) {
        let _ = order_key(name);
    }

    // Encode -> parse is the identity for any base and index
    let index = data
        .iter()
        .fold(0u64, |acc, &b| acc.wrapping_mul(31).wrapping_add(b as u64));
    for base in ["x", "report_split", "a_b", "99"] {
        let name = chunk_file_name(base, index);
        assert_eq!(order_key(&name).unwrap(), index);
    }
});
