#![no_main]

use libfuzzer_sys::fuzz_target;
use simple_encrypt::core::block::{parse_block, KeyBlockType};
use simple_encrypt::RsaTransformer;

fuzz_target!(|data: &str| {
    let _ = parse_block(data, KeyBlockType::RsaPrivateKey);
    let _ = RsaTransformer::new(data);
});
