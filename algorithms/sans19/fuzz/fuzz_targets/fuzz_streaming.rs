#![no_main]

use libfuzzer_sys::fuzz_target;
use sans19::{CacheMode, Hasher};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Chunk size is derived from the first byte (1 to 255)
    let chunk_size = (data[0] as usize % 255) + 1;
    let body = &data[1..];

    // Two engines fed the same chunks must agree bit for bit.
    let run = || {
        let mut hasher = Hasher::new();
        for chunk in body.chunks(chunk_size) {
            hasher.update(chunk);
        }
        hasher
    };

    let mut a = run();
    let mut b = run();
    assert_eq!(a.finalize_short(), b.finalize_short(), "Short digests diverged");
    assert_eq!(a.finalize_wide(), b.finalize_wide(), "Wide digests diverged");

    // The cache must mask any later update.
    let cached = a.finalize_short();
    a.update(body);
    assert_eq!(a.finalize_short(), cached, "Cache leaked an update");

    a.reset_cache(CacheMode::Both);
    let _ = a.finalize_short();
    let _ = a.finalize_wide();
});
