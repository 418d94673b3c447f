#![no_main]

use libfuzzer_sys::fuzz_target;
use simple_encrypt::{AesKey, AesTransformer};

fuzz_target!(|data: &str| {
    // Parsing arbitrary text should never panic
    let _ = AesKey::try_from(data);
    let _ = AesTransformer::new(data);
});
