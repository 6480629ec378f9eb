#![no_main]

use assetgen::{choose_delimiter, DelimiterChoice};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let payload = String::from_utf8_lossy(data);
    if let DelimiterChoice::Chosen(delimiter) = choose_delimiter(&payload) {
        assert!(!payload.contains(&delimiter.close()));
    }
});
