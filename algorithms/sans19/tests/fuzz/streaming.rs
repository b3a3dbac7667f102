use bolero::check;
use sans19::{hash, hash_wide, Hasher};

#[test]
fn fuzz_streaming_determinism() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = hash(data);
        let expected_wide = hash_wide(data);
        assert_eq!(expected.len(), 38);
        assert_eq!(expected_wide.len(), 32);

        // =============================================================================
        // SINGLE UPDATE
        // =============================================================================

        // Only a single call reproduces the one-shot digest.
        let mut hasher = Hasher::new();
        hasher.update(data);
        assert_eq!(hasher.finalize_short(), expected, "Single update mismatch");

        let mut hasher = Hasher::new();
        hasher.update(data);
        assert_eq!(hasher.finalize_wide(), expected_wide, "Single update wide mismatch");

        // =============================================================================
        // REPEATED SPLITS
        // =============================================================================

        // The same split fed to two engines must agree with itself.
        if data.len() > 1 {
            let (first, second) = data.split_at(data.len() / 2);
            let run = || {
                let mut hasher = Hasher::new();
                hasher.update(first);
                hasher.update(second);
                hasher.finalize_short()
            };
            assert_eq!(run(), run(), "Split feed is not deterministic");
        }
    });
}
