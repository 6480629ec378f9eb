#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest parsing and plan resolution must never panic
        if let Ok(mut manifest) = toml::from_str::<assetgen::Manifest>(content) {
            // No directory walks from fuzzed input
            manifest.scan = None;
            let _ = assetgen::config::build_plan(
                &manifest,
                std::path::Path::new("/fuzz"),
                &assetgen::Overrides::default(),
            );
        }
    }
});
