//! Self-Test
//!
//! Regression oracle: each input is absorbed by a fresh engine in a single
//! `update` call and its short digest is compared with the recorded hex.

use crate::streaming::Sans19Hasher;
use crate::types::SelfTestFailure;

// =============================================================================
// VECTORS
// =============================================================================

/// Recorded `(input, short digest hex)` pairs.
#[rustfmt::skip]
pub const SELF_TEST_VECTORS: &[(&str, &str)] = &[
    (
        "",
        "0c456ff7e1f868b1dfff984ad91c12b9cb5aade6ecb3a67613007a7159f009034df241b34a46",
    ),
    (
        "sans19",
        "8688f8a19ba65ea8ec1b4b0987e8e4c49852811e1a1b7a6a6ac7f5fe2224644c174aff0d4dc0",
    ),
    (
        "Can y'all stop hating phonk? Seriously, half the time people trash the \
             genre without even understanding what it is. They hear a distorted \
             bassline or a gritty Memphis sample and immediately write it off as \
             noise. But phonk isn't just a style—it's a vibe, a whole culture rooted \
             in underground hip-hop, street racing, and raw emotion. It's the \
             soundtrack of rebellion, of late nights drifting through neon-lit \
             streets, of headphones blasting while the world fades away. From \
             classic phonk with its lo-fi, eerie aesthetic to drift phonk with its \
             aggressive energy, there's variety and depth if you take a second to \
             actually listen. Artists pour their soul into this music, blending \
             nostalgia, grit, and adrenaline into something that's more than just \
             sound—it's atmosphere. Dismissing it just because it doesn't sound like \
             chart-toppers or your favorite genre is lazy. Music is meant to \
             challenge, to evoke, to make you feel something real, even if it's dark \
             or chaotic. And phonk does exactly that. So before you keep riding the \
             hate train, maybe dive a little deeper into the scene. Watch a drift \
             montage synced to KSLV Noh or DVRST and feel the momentum. Because \
             let's be real—you can't hate something you don't know.",
        "1d072b15aad3dbdc39cced615342e12a813dbe6333ad825fe9d48dc12526e5646c156e88150b",
    ),
    (
        "YOUR TAKING TOO LONG",
        "df716e09b3e77def0ac1d45c5a8a162c4f64ddad71f917196bbfa2b26ef3423540dcb632c94b",
    ),
    (
        "YOUR         LONG",
        "baf11bd3e308919a3d94de28b65c346c63feff2d757d01a809d12334d2b160a6f346335aa973",
    ),
    (
        "your taking too long :)",
        "1c5336a6c12a20e47420ce2eda45c1d5d32e4e81a03ad41ac2094c0d3cbd020acdef1023e89e",
    ),
    (
        "your taking too long :) IS TAKING TOO LONG",
        "1ec3e1b29df7c4167067c79a3777e45caa188d73dbc21562a0c2b5af76acdc4def53cdeae180",
    ),
    (
        "YOUR TOO BRIGHT",
        "2422a0f2fcd2918876e02cf18640823329af60d682937747d9be2bc5222b114f9d112463c162",
    ),
    (
        "YOUR TAKING TOO TOO",
        "4219785422452e16aee093438637cc7f9dcc8ec76d9ace56855103f693956a127a579dcbd292",
    ),
    (
        "YOUR         TOO TOO",
        "04d5a0017a95a90adb62cf8a5bf16431d74bffca018f4cb67dec5eee025792dc42623d01212e",
    ),
];

// =============================================================================
// RUNNER
// =============================================================================

/// Run every vector, stopping at the first mismatch.
///
/// # Errors
/// Returns the first vector whose digest drifted.
pub fn self_test_report() -> Result<(), SelfTestFailure> {
    let mut expected = [0u8; crate::constants::HASH_SIZE];
    for (index, &(input, hex_digest)) in SELF_TEST_VECTORS.iter().enumerate() {
        let mut hasher = Sans19Hasher::new();
        hasher.update(input.as_bytes());

        let matches = hex::decode_to_slice(hex_digest, &mut expected).is_ok()
            && hasher.finalize_short() == expected;
        if !matches {
            return Err(SelfTestFailure::new(index, input));
        }
    }
    Ok(())
}

/// `true` when every recorded vector still reproduces.
#[must_use]
pub fn self_test() -> bool {
    self_test_report().is_ok()
}
