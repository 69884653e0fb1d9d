// src/core/normalize.rs
use crate::core::types::{is_jamo, is_syllable};

/// Longest run of one character kept by [`normalize`].
const MAX_RUN: usize = 2;

/// ASCII alphanumerics, syllable blocks and standalone jamo.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_syllable(c) || is_jamo(c)
}

/// Lowercases ASCII, drops everything outside the allow-list, then cuts
/// runs of three or more identical characters down to two.
///
/// Stripping happens before collapsing, so `a!a!a` becomes `aa`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = None;
    let mut run = 0;
    for c in text
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|&c| is_allowed(c))
    {
        if last == Some(c) {
            run += 1;
        } else {
            last = Some(c);
            run = 1;
        }
        if run <= MAX_RUN {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_runs() {
        assert_eq!(normalize("aaa"), "aa");
        assert_eq!(normalize("aaaa"), normalize("aa"));
        assert_eq!(normalize("씨씨씨발발발"), "씨씨발발");
        assert_eq!(normalize("aabbbcccc"), "aabbcc");
    }

    #[test]
    fn test_strip_disallowed() {
        assert_eq!(normalize("a!@#b"), "ab");
        assert_eq!(normalize("씨 발"), "씨발");
        assert_eq!(normalize("ㅅ.ㅂ"), "ㅅㅂ");
        assert_eq!(normalize("héllo wörld"), "hllowrld");
        assert_eq!(normalize("日本語"), "");
    }

    #[test]
    fn test_strip_then_collapse() {
        assert_eq!(normalize("a!a!a!a"), "aa");
    }

    #[test]
    fn test_lowercases_ascii() {
        assert_eq!(normalize("TLQKF"), "tlqkf");
        assert_eq!(normalize("Hello World 42"), "helloworld42");
    }

    #[test]
    fn test_idempotent() {
        for s in ["", "aaaa", "A!!!bbb  ccc", "씨씨씨ㅂㅂㅂ발", "tLqKf 1234", "ㅋㅋㅋㅋㅋ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent on {s:?}");
        }
    }
}
