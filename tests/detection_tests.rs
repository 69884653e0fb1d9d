//! End-to-end detection tests against the public API.
//!
//! Every message goes through the full pipeline: normalization, look-alike
//! substitution, keyboard-layout reconstruction, decomposition and canon
//! folding, then substring matching against the bad-form index.

use filter_core::core::codec::{decode, encode};
use filter_core::core::decompose::decompose;
use filter_core::core::normalize::normalize;
use filter_core::core::types::{Lead, Trail, Vowel};
use filter_core::{FilterConfig, FilterEngine};

/// Types a Hangul word on the 2-set layout, key by key.
fn typed(word: &str) -> String {
    const KEYS: [(char, char); 33] = [
        ('ㄱ', 'r'), ('ㄲ', 'R'), ('ㄴ', 's'), ('ㄷ', 'e'), ('ㄸ', 'E'), ('ㄹ', 'f'), ('ㅁ', 'a'),
        ('ㅂ', 'q'), ('ㅃ', 'Q'), ('ㅅ', 't'), ('ㅆ', 'T'), ('ㅇ', 'd'), ('ㅈ', 'w'), ('ㅉ', 'W'),
        ('ㅊ', 'c'), ('ㅋ', 'z'), ('ㅌ', 'x'), ('ㅍ', 'v'), ('ㅎ', 'g'), ('ㅏ', 'k'), ('ㅐ', 'o'),
        ('ㅑ', 'i'), ('ㅒ', 'O'), ('ㅓ', 'j'), ('ㅔ', 'p'), ('ㅕ', 'u'), ('ㅖ', 'P'), ('ㅗ', 'h'),
        ('ㅛ', 'y'), ('ㅜ', 'n'), ('ㅠ', 'b'), ('ㅡ', 'm'), ('ㅣ', 'l'),
    ];
    decompose(word)
        .chars()
        .map(|c| KEYS.iter().find(|(j, _)| *j == c).map_or(c, |(_, k)| *k))
        .collect()
}

fn tripled(word: &str) -> String {
    word.chars().flat_map(|c| [c, c, c]).collect()
}

#[test]
fn test_every_seed_word_is_detected_in_all_disguises() {
    let engine = FilterEngine::new();
    for seed in &engine.config().seed_words {
        assert!(engine.detect(seed), "plain {seed}");
        assert!(engine.detect(&typed(seed)), "typed {seed} as {}", typed(seed));
        assert!(engine.detect(&tripled(seed)), "tripled {seed}");
        assert!(engine.detect(&format!("너 진짜 {seed} 같다")), "embedded {seed}");
    }
}

#[test]
fn test_typed_helper_matches_layout() {
    assert_eq!(typed("씨발"), "Tlqkf");
    assert_eq!(typed("병신"), "qudtls");
}

#[test]
fn test_benign_messages_pass() {
    let engine = FilterEngine::new();
    for message in [
        "",
        "completely unrelated benign sentence",
        "hello world",
        "안녕하세요",
        "고맙습니다",
        "Привет мир",
        "🙂🙂🙂",
    ] {
        assert!(!engine.detect(message), "false positive on {message:?}");
    }
}

#[test]
fn test_punctuation_and_spacing_evasion() {
    let engine = FilterEngine::new();
    assert!(engine.detect("씨-발"));
    assert!(engine.detect("병 신 아"));
    assert!(engine.detect("ㅅ.ㅂ"));
    assert!(engine.detect("t l q k f"));
}

#[test]
fn test_canon_map_catches_plain_spelling_of_tense_seed() {
    let config = FilterConfig::default()
        .with_seed_words(["씨발"])
        .with_canon([('ㅆ', 'ㅅ')]);
    let engine = FilterEngine::with_config(config).unwrap();
    // 시발 only meets the index through the folded form of 씨발.
    assert!(engine.detect("시발"));

    let strict = FilterEngine::with_config(FilterConfig::default().with_seed_words(["씨발"])).unwrap();
    assert!(!strict.detect("시발"));
}

#[test]
fn test_shifted_keys_are_read_as_plain_keys() {
    // Reconstruction runs on the lowercased text, so a shifted key types
    // its plain jamo: "Tlqkf" is rebuilt from "tlqkf", never from ㅆ.
    let tense_only = FilterConfig::default().with_seed_words(["씨발"]);
    let strict = FilterEngine::with_config(tense_only.clone()).unwrap();
    assert!(!strict.detect("Tlqkf"));
    assert!(!strict.forms("Tlqkf").iter().any(|form| form.contains('ㅆ')));

    let folded = FilterEngine::with_config(tense_only.with_canon([('ㅆ', 'ㅅ')])).unwrap();
    assert!(folded.detect("Tlqkf"));
}

#[test]
fn test_index_is_deterministic() {
    let a = FilterEngine::new();
    let b = FilterEngine::new();
    assert_eq!(a.bad_forms(), b.bad_forms());
}

#[test]
fn test_codec_and_decomposer_agree() {
    for l in Lead::all() {
        for v in Vowel::all() {
            for t in std::iter::once(None).chain(Trail::all().map(Some)) {
                let block = encode(l, v, t);
                let slots = decode(block).unwrap();
                assert_eq!((slots.lead, slots.vowel, slots.trail), (l, v, t));
                assert_eq!(decompose(&block.to_string()).chars().count(), 2 + t.is_some() as usize);
            }
        }
    }
}

#[test]
fn test_normalizer_properties() {
    assert_eq!(normalize("aaa"), "aa");
    assert_eq!(normalize("aaaa"), normalize("aa"));
    assert_eq!(normalize("a!@#b"), "ab");
    let once = normalize("ㅋㅋㅋㅋ ZZZ!!! 좆좆좆");
    assert_eq!(normalize(&once), once);
}
