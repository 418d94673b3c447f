#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use simple_encrypt::{generate_rsa_keys, Decryptor, RsaTransformer};

fn transformer() -> Option<&'static RsaTransformer> {
    static TRANSFORMER: OnceLock<Option<RsaTransformer>> = OnceLock::new();
    TRANSFORMER
        .get_or_init(|| {
            let (_, private_key) = generate_rsa_keys(2048).ok()?;
            RsaTransformer::new(&private_key).ok()
        })
        .as_ref()
}

fuzz_target!(|data: &str| {
    if let Some(transformer) = transformer() {
        let _ = transformer.decrypt(data);
    }
});
