#![no_main]
use libfuzzer_sys::fuzz_target;
use topo_tools::diff::DiffEngine;

/// Fuzz the identity law.
///
/// Any input that loads as a snapshot must diff against a fresh copy of
/// itself with no changes, in both sequential and parallel mode.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(before) = topo_tools::parsers::parse_snapshot_str(s) else {
        return;
    };
    let mut after = before.clone();
    // Skip the content-hash shortcut so the full comparison runs
    after.content_hash = 0;

    for engine in [DiffEngine::new(), DiffEngine::new().parallel(true)] {
        let result = engine.diff(&before, &after).expect("loaded snapshots diff cleanly");
        assert!(!result.has_changes(), "snapshot differs from itself");
    }
});
