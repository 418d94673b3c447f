#![no_main]

use libfuzzer_sys::fuzz_target;
use simple_encrypt::core::block::{parse_block, KeyBlockType};
use simple_encrypt::RsaEncryptor;

fuzz_target!(|data: &str| {
    let _ = parse_block(data, KeyBlockType::RsaPublicKey);
    let _ = RsaEncryptor::new(data);
});
