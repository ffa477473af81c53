#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    // Matching arbitrary patterns against arbitrary text must not panic,
    // including non-ASCII input.
    let (pattern, text) = data;
    let _ = ccs::query::fuzzy_match(pattern, text);
});
