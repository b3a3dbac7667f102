use bolero::check;
use sans19::{hash, hash_wide, hexdigest, verify, verify_wide};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let h = hash(data);
        assert!(verify(data, &h), "verify() failed on correct data");

        let w = hash_wide(data);
        assert!(verify_wide(data, &w), "verify_wide() failed on correct data");

        // =============================================================================
        // NEGATIVE TEST (CORRUPTION)
        // =============================================================================

        let mut bad_h = h;
        bad_h[0] ^= 0xFF;
        assert!(!verify(data, &bad_h), "verify() succeeded on corrupted hash");

        // =============================================================================
        // HEX ROUND TRIP
        // =============================================================================

        let decoded = hex::decode(hexdigest(data)).unwrap_or_default();
        assert_eq!(decoded, h, "hex round trip lost bytes");
    });
}
