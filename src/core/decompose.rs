// src/core/decompose.rs
use crate::core::codec::Syllable;

/// Splits every syllable block into its jamo. Anything else is kept as-is.
pub fn decompose(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        match Syllable::decode(c) {
            Some(syllable) => out.extend(syllable.jamo()),
            None => out.push(c),
        }
    }
    out
}
