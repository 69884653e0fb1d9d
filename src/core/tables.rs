// src/core/tables.rs
use crate::core::types::{Lead, Trail, Vowel};
use crate::error::ConfigError;
use std::collections::HashMap;

/// Standard 2-set (Dubeolsik) layout: Latin key -> jamo.
pub const DUBEOLSIK: [(char, char); 33] = [
    // consonants
    ('r', 'ㄱ'), ('R', 'ㄲ'), ('s', 'ㄴ'), ('e', 'ㄷ'), ('E', 'ㄸ'), ('f', 'ㄹ'), ('a', 'ㅁ'),
    ('q', 'ㅂ'), ('Q', 'ㅃ'), ('t', 'ㅅ'), ('T', 'ㅆ'), ('d', 'ㅇ'), ('w', 'ㅈ'), ('W', 'ㅉ'),
    ('c', 'ㅊ'), ('z', 'ㅋ'), ('x', 'ㅌ'), ('v', 'ㅍ'), ('g', 'ㅎ'),
    // vowels
    ('k', 'ㅏ'), ('o', 'ㅐ'), ('i', 'ㅑ'), ('O', 'ㅒ'), ('j', 'ㅓ'), ('p', 'ㅔ'), ('u', 'ㅕ'),
    ('P', 'ㅖ'), ('h', 'ㅗ'), ('y', 'ㅛ'), ('n', 'ㅜ'), ('b', 'ㅠ'), ('m', 'ㅡ'), ('l', 'ㅣ'),
];

/// (first, second) -> diphthong.
pub const VOWEL_COMBINATIONS: [(char, char, char); 7] = [
    ('ㅗ', 'ㅏ', 'ㅘ'), ('ㅗ', 'ㅐ', 'ㅙ'), ('ㅗ', 'ㅣ', 'ㅚ'),
    ('ㅜ', 'ㅓ', 'ㅝ'), ('ㅜ', 'ㅔ', 'ㅞ'), ('ㅜ', 'ㅣ', 'ㅟ'),
    ('ㅡ', 'ㅣ', 'ㅢ'),
];

/// (first, second) -> compound trail.
pub const TRAIL_COMBINATIONS: [(char, char, char); 11] = [
    ('ㄱ', 'ㅅ', 'ㄳ'), ('ㄴ', 'ㅈ', 'ㄵ'), ('ㄴ', 'ㅎ', 'ㄶ'),
    ('ㄹ', 'ㄱ', 'ㄺ'), ('ㄹ', 'ㅁ', 'ㄻ'), ('ㄹ', 'ㅂ', 'ㄼ'),
    ('ㄹ', 'ㅅ', 'ㄽ'), ('ㄹ', 'ㅌ', 'ㄾ'), ('ㄹ', 'ㅍ', 'ㄿ'),
    ('ㄹ', 'ㅎ', 'ㅀ'), ('ㅂ', 'ㅅ', 'ㅄ'),
];

/// Maps an alternate-layout key to the jamo it types.
/// Keys outside the layout pass through unchanged.
#[derive(Debug, Clone)]
pub struct KeyboardMap {
    keys: HashMap<char, char>,
}

impl KeyboardMap {
    pub fn dubeolsik() -> Self {
        Self {
            keys: DUBEOLSIK.into_iter().collect(),
        }
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut keys = HashMap::new();
        for (key, target) in pairs {
            if Lead::from_char(target).is_none() && Vowel::from_char(target).is_none() {
                return Err(ConfigError::KeyboardTarget { key, target });
            }
            keys.insert(key, target);
        }
        Ok(Self { keys })
    }

    pub fn map(&self, c: char) -> char {
        self.keys.get(&c).copied().unwrap_or(c)
    }
}

impl Default for KeyboardMap {
    fn default() -> Self {
        Self::dubeolsik()
    }
}

/// Pair tables merging two vowels into a diphthong and two trails into a
/// compound trail. Pairs not listed do not combine.
#[derive(Debug, Clone)]
pub struct CombinationTables {
    vowels: HashMap<(Vowel, Vowel), Vowel>,
    trails: HashMap<(Trail, Trail), Trail>,
}

impl CombinationTables {
    pub fn standard() -> Self {
        Self::from_entries(&VOWEL_COMBINATIONS, &TRAIL_COMBINATIONS)
            .expect("built-in combination tables only use alphabet members")
    }

    pub fn from_entries(
        vowel_entries: &[(char, char, char)],
        trail_entries: &[(char, char, char)],
    ) -> Result<Self, ConfigError> {
        let vowel = |c: char| Vowel::from_char(c).ok_or(ConfigError::NotAVowel(c));
        let trail = |c: char| Trail::from_char(c).ok_or(ConfigError::NotATrail(c));

        let mut vowels = HashMap::new();
        for &(first, second, combined) in vowel_entries {
            let key = (vowel(first)?, vowel(second)?);
            insert_unique(&mut vowels, key, vowel(combined)?, Vowel::to_char, (first, second))?;
        }

        let mut trails = HashMap::new();
        for &(first, second, combined) in trail_entries {
            let key = (trail(first)?, trail(second)?);
            insert_unique(&mut trails, key, trail(combined)?, Trail::to_char, (first, second))?;
        }

        Ok(Self { vowels, trails })
    }

    pub fn combine_vowels(&self, first: Vowel, second: Vowel) -> Option<Vowel> {
        self.vowels.get(&(first, second)).copied()
    }

    pub fn combine_trails(&self, first: Trail, second: Trail) -> Option<Trail> {
        self.trails.get(&(first, second)).copied()
    }
}

impl Default for CombinationTables {
    fn default() -> Self {
        Self::standard()
    }
}

/// Repeating an identical entry is harmless; a pair with two different
/// results is a configuration defect.
fn insert_unique<K, V>(
    table: &mut HashMap<K, V>,
    key: K,
    value: V,
    to_char: fn(V) -> char,
    (first, second): (char, char),
) -> Result<(), ConfigError>
where
    K: std::hash::Hash + Eq,
    V: Copy + PartialEq,
{
    match table.get(&key) {
        Some(&existing) if existing != value => Err(ConfigError::ConflictingCombination {
            first,
            second,
            existing: to_char(existing),
            replacement: to_char(value),
        }),
        _ => {
            table.insert(key, value);
            Ok(())
        }
    }
}
