//! Tests for the word supplier fallback path.

use gallows::{FALLBACK_WORDS, WordSupplier};

#[tokio::test]
async fn test_unreachable_service_falls_back_to_local_list() {
    // Nothing listens on the discard port; the single attempt fails and
    // the word must come from the local list.
    let supplier = WordSupplier::with_base_url("http://127.0.0.1:9/words.json/randomWord".into());

    let word = supplier.random_word().await;
    assert!(FALLBACK_WORDS.contains(&word.as_str()));
}

#[tokio::test]
async fn test_supplier_always_yields_a_playable_word() {
    let supplier = WordSupplier::with_base_url("http://127.0.0.1:9/words.json/randomWord".into());

    for _ in 0..5 {
        let word = supplier.random_word().await;
        assert!(word.len() >= 3);
        assert!(word.chars().all(|c| c.is_ascii_uppercase()));
    }
}

#[test]
fn test_fallback_words_are_uppercase_alphabetic() {
    assert_eq!(FALLBACK_WORDS.len(), 48);
    for word in FALLBACK_WORDS {
        assert!(word.len() >= 3, "{word} too short to play");
        assert!(word.chars().all(|c| c.is_ascii_uppercase()), "{word}");
    }
}
