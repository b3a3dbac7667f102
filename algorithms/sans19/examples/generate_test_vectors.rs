//! Generator for SANS19 test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! The named string vectors come from the embedded self-test table; the
//! synthetic ones cover longer uniform inputs.
#![allow(clippy::unwrap_used)]
use serde_json::json;

fn vector(name: &str, input: &str, bytes: &[u8]) -> serde_json::Value {
    json!({
        "name": name,
        "input": input,
        "hash": hex::encode(sans19::hash(bytes)),
        "wide": hex::encode(sans19::hash_wide(bytes)),
    })
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. SELF-TEST STRINGS
    // =========================================================================

    let names = [
        "empty",
        "sans19",
        "phonk",
        "taking_too_long",
        "gapped_long",
        "lowercase",
        "lowercase_extended",
        "too_bright",
        "taking_too_too",
        "gapped_too_too",
    ];
    for (name, (input, _)) in names.iter().zip(sans19::SELF_TEST_VECTORS) {
        vectors.push(vector(name, input, input.as_bytes()));
    }

    // =========================================================================
    // 2. SYNTHETIC INPUTS
    // =========================================================================

    vectors.push(vector("basic", "abc", b"abc"));
    vectors.push(vector("large", "LARGE_1KB", &[0x41u8; 1024]));
    vectors.push(vector("exact_64_zero", "EXACT_64_ZERO", &[0x00u8; 64]));
    vectors.push(vector("medium_256", "MEDIUM_256_A", &[0x41u8; 256]));
    vectors.push(vector("unaligned_63", "UNALIGNED_63_TWO", &[0x02u8; 63]));

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
