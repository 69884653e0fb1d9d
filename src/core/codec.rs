// src/core/codec.rs
//! Arithmetic mapping between a precomposed syllable and its three slots.

use crate::core::types::{is_syllable, Lead, Trail, Vowel, SYLLABLE_FIRST};

/// Codepoints spanned by one lead (21 vowels * 28 trail indices).
const LEAD_STRIDE: u32 = 588;
/// Codepoints spanned by one vowel (27 trails plus "absent").
const VOWEL_STRIDE: u32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllable {
    pub lead: Lead,
    pub vowel: Vowel,
    pub trail: Option<Trail>,
}

impl Syllable {
    pub fn new(lead: Lead, vowel: Vowel, trail: Option<Trail>) -> Self {
        Self { lead, vowel, trail }
    }

    pub fn encode(self) -> char {
        let code = SYLLABLE_FIRST
            + LEAD_STRIDE * self.lead.index()
            + VOWEL_STRIDE * self.vowel.index()
            + self.trail.map_or(0, Trail::index);
        // Typed slot indices keep `code` inside U+AC00..=U+D7A3.
        char::from_u32(code).expect("syllable codepoint lies inside the Hangul block")
    }

    /// `None` for anything outside the syllable block.
    pub fn decode(c: char) -> Option<Self> {
        if !is_syllable(c) {
            return None;
        }
        let code = c as u32 - SYLLABLE_FIRST;
        Some(Self {
            lead: Lead::from_index(code / LEAD_STRIDE)?,
            vowel: Vowel::from_index((code % LEAD_STRIDE) / VOWEL_STRIDE)?,
            trail: Trail::from_index(code % VOWEL_STRIDE),
        })
    }

    /// The slots as standalone jamo, skipping an absent trail.
    pub fn jamo(self) -> impl Iterator<Item = char> {
        [
            Some(self.lead.to_char()),
            Some(self.vowel.to_char()),
            self.trail.map(Trail::to_char),
        ]
        .into_iter()
        .flatten()
    }
}

pub fn encode(lead: Lead, vowel: Vowel, trail: Option<Trail>) -> char {
    Syllable::new(lead, vowel, trail).encode()
}

pub fn decode(c: char) -> Option<Syllable> {
    Syllable::decode(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(c: char) -> Lead {
        Lead::from_char(c).unwrap()
    }

    fn vowel(c: char) -> Vowel {
        Vowel::from_char(c).unwrap()
    }

    fn trail(c: char) -> Trail {
        Trail::from_char(c).unwrap()
    }

    #[test]
    fn test_round_trip_over_every_triple() {
        let mut seen = 0;
        for l in Lead::all() {
            for v in Vowel::all() {
                let trails = std::iter::once(None).chain(Trail::all().map(Some));
                for t in trails {
                    let c = encode(l, v, t);
                    assert_eq!(decode(c), Some(Syllable::new(l, v, t)));
                    seen += 1;
                }
            }
        }
        assert_eq!(seen, 19 * 21 * 28);
    }

    #[test]
    fn test_range_endpoints() {
        assert_eq!(encode(lead('ㄱ'), vowel('ㅏ'), None), '가');
        assert_eq!(encode(lead('ㅎ'), vowel('ㅣ'), Some(trail('ㅎ'))), '힣');
    }

    #[test]
    fn test_known_syllables() {
        assert_eq!(encode(lead('ㅆ'), vowel('ㅣ'), None), '씨');
        assert_eq!(encode(lead('ㅂ'), vowel('ㅏ'), Some(trail('ㄹ'))), '발');
        assert_eq!(encode(lead('ㄷ'), vowel('ㅏ'), Some(trail('ㄺ'))), '닭');
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        assert_eq!(decode('a'), None);
        assert_eq!(decode('ㄱ'), None);
        assert_eq!(decode('\u{ABFF}'), None);
        assert_eq!(decode('\u{D7A4}'), None);
    }

    #[test]
    fn test_jamo_skips_absent_trail() {
        let open: String = decode('시').unwrap().jamo().collect();
        assert_eq!(open, "ㅅㅣ");
        let closed: String = decode('병').unwrap().jamo().collect();
        assert_eq!(closed, "ㅂㅕㅇ");
    }
}
