use bolero::check;
use sans19::{CacheMode, Hasher};

#[test]
fn fuzz_cache_masks_updates() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(head, extra)| {
            let mut hasher = Hasher::new();
            hasher.update(head);
            let short = hasher.finalize_short();
            let wide = hasher.finalize_wide();

            hasher.update(extra);
            assert_eq!(hasher.finalize_short(), short, "short cache leaked an update");
            assert_eq!(hasher.finalize_wide(), wide, "wide cache leaked an update");

            // Invalidation never touches the byte count.
            hasher.reset_cache(CacheMode::Both);
            assert_eq!(hasher.len(), (head.len() + extra.len()) as u64);
        });
}
