#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the snapshot loader.
///
/// Feeds arbitrary UTF-8 strings to `parse_snapshot_str`. Every input must
/// either decode or fail with an error; the loader must never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = topo_tools::parsers::parse_snapshot_str(s);
    }
});
