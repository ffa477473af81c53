#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &str| {
    // Resolution must never panic, whatever the token looks like and
    // whatever the oracle answers.
    let _ = ccs::decode::resolve_encoded(data, &|_: &Path| false);
    let _ = ccs::decode::resolve_encoded(data, &|_: &Path| true);
});
