// src/core/types.rs
use std::collections::BTreeSet;

/// Every canonical variant generated for one input string.
/// Ordered so that snapshots and logs are stable between runs.
pub type FormSet = BTreeSet<String>;

/// Lead consonants in codec order.
pub const LEAD_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

/// Vowels in codec order.
pub const VOWEL_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants in codec order. Codec index 0 means "no trail",
/// so the jamo at position `i` here encodes as index `i + 1`.
pub const TRAIL_JAMO: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ',
    'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// First and last codepoints of the precomposed syllable block.
pub const SYLLABLE_FIRST: u32 = 0xAC00;
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// First and last standalone (compatibility) jamo.
pub const JAMO_FIRST: char = 'ㄱ';
pub const JAMO_LAST: char = 'ㅣ';

/// A lead consonant, the first slot of a syllable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lead(u8);

impl Lead {
    pub fn from_char(c: char) -> Option<Self> {
        LEAD_JAMO.iter().position(|&j| j == c).map(|i| Self(i as u8))
    }

    pub fn from_index(index: u32) -> Option<Self> {
        (index < LEAD_JAMO.len() as u32).then_some(Self(index as u8))
    }

    pub fn index(self) -> u32 {
        self.0 as u32
    }

    pub fn to_char(self) -> char {
        LEAD_JAMO[self.0 as usize]
    }

    pub fn all() -> impl Iterator<Item = Lead> {
        (0..LEAD_JAMO.len() as u8).map(Self)
    }
}

/// A vowel, the middle slot of a syllable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vowel(u8);

impl Vowel {
    pub fn from_char(c: char) -> Option<Self> {
        VOWEL_JAMO.iter().position(|&j| j == c).map(|i| Self(i as u8))
    }

    pub fn from_index(index: u32) -> Option<Self> {
        (index < VOWEL_JAMO.len() as u32).then_some(Self(index as u8))
    }

    pub fn index(self) -> u32 {
        self.0 as u32
    }

    pub fn to_char(self) -> char {
        VOWEL_JAMO[self.0 as usize]
    }

    pub fn all() -> impl Iterator<Item = Vowel> {
        (0..VOWEL_JAMO.len() as u8).map(Self)
    }
}

/// A present trailing consonant. An absent trail is `Option::<Trail>::None`
/// and never a value of this type, so the index is always in `1..=27`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Trail(u8);

impl Trail {
    pub fn from_char(c: char) -> Option<Self> {
        TRAIL_JAMO
            .iter()
            .position(|&j| j == c)
            .map(|i| Self(i as u8 + 1))
    }

    /// Index 0 is the absent trail and yields `None`.
    pub fn from_index(index: u32) -> Option<Self> {
        (1..=TRAIL_JAMO.len() as u32)
            .contains(&index)
            .then_some(Self(index as u8))
    }

    pub fn index(self) -> u32 {
        self.0 as u32
    }

    pub fn to_char(self) -> char {
        TRAIL_JAMO[self.0 as usize - 1]
    }

    pub fn all() -> impl Iterator<Item = Trail> {
        (1..=TRAIL_JAMO.len() as u8).map(Self)
    }
}

/// How the streaming composer sees one input character.
///
/// Lead and Trail alphabets overlap: `ㄱ` is both, `ㄸ` is lead-only and
/// `ㄳ` is trail-only, so a consonant carries whichever roles it can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Vowel(Vowel),
    Consonant {
        jamo: char,
        lead: Option<Lead>,
        trail: Option<Trail>,
    },
    /// Anything outside the phonetic alphabets, passed through verbatim.
    Other(char),
}

impl Unit {
    pub fn classify(c: char) -> Self {
        if let Some(vowel) = Vowel::from_char(c) {
            return Unit::Vowel(vowel);
        }
        match (Lead::from_char(c), Trail::from_char(c)) {
            (None, None) => Unit::Other(c),
            (lead, trail) => Unit::Consonant { jamo: c, lead, trail },
        }
    }
}

pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&(c as u32))
}

/// True for standalone jamo, i.e. any unit of the three alphabets.
pub fn is_jamo(c: char) -> bool {
    (JAMO_FIRST..=JAMO_LAST).contains(&c)
}
