#![no_main]

use libfuzzer_sys::fuzz_target;
use simple_encrypt::{AesTransformer, Decryptor};

// 32 bytes of 0x00..0x1f
const KEY: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

fuzz_target!(|data: &str| {
    if let Ok(transformer) = AesTransformer::new(KEY) {
        let _ = transformer.decrypt(data);
    }
});
