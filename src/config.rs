// src/config.rs
use crate::core::leet::DIGIT_LOOKALIKES;
use crate::core::tables::{DUBEOLSIK, TRAIL_COMBINATIONS, VOWEL_COMBINATIONS};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Offensive root words the stock index is built from.
pub const DEFAULT_SEED_WORDS: [&str; 6] = ["씨발", "시발", "ㅅㅂ", "병신", "지랄", "좆"];

/// Static data the engine is built from. Every field is optional in the
/// JSON file and falls back to the stock value.
///
/// ```json
/// {
///   "seed_words": ["씨발", "병신"],
///   "canon": { "ㅆ": "ㅅ", "ㄲ": "ㄱ" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub seed_words: Vec<String>,
    /// Alternate-layout key -> lead consonant or vowel.
    pub keyboard: BTreeMap<char, char>,
    /// `[first, second, diphthong]`
    pub vowel_combinations: Vec<(char, char, char)>,
    /// `[first, second, compound trail]`
    pub trail_combinations: Vec<(char, char, char)>,
    /// Confusable jamo -> representative. Empty means identity.
    pub canon: BTreeMap<char, char>,
    /// Look-alike symbol -> letter.
    pub leet: BTreeMap<char, char>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            seed_words: DEFAULT_SEED_WORDS.iter().map(|w| w.to_string()).collect(),
            keyboard: DUBEOLSIK.into_iter().collect(),
            vowel_combinations: VOWEL_COMBINATIONS.to_vec(),
            trail_combinations: TRAIL_COMBINATIONS.to_vec(),
            canon: BTreeMap::new(),
            leet: DIGIT_LOOKALIKES.into_iter().collect(),
        }
    }
}

impl FilterConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn with_seed_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seed_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_canon<I>(mut self, folds: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        self.canon = folds.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_has_stock_data() {
        let config = FilterConfig::default();
        assert_eq!(config.seed_words.len(), 6);
        assert_eq!(config.keyboard.get(&'t'), Some(&'ㅅ'));
        assert_eq!(config.vowel_combinations.len(), 7);
        assert_eq!(config.trail_combinations.len(), 11);
        assert!(config.canon.is_empty());
        assert_eq!(config.leet.get(&'0'), Some(&'o'));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config =
            FilterConfig::from_json_str(r#"{ "seed_words": ["바보"], "canon": { "ㅆ": "ㅅ" } }"#)
                .unwrap();
        assert_eq!(config.seed_words, vec!["바보".to_string()]);
        assert_eq!(config.canon.get(&'ㅆ'), Some(&'ㅅ'));
        assert_eq!(config.keyboard, FilterConfig::default().keyboard);
    }

    #[test]
    fn test_combination_triples_from_json() {
        let config =
            FilterConfig::from_json_str(r#"{ "vowel_combinations": [["ㅗ", "ㅏ", "ㅘ"]] }"#).unwrap();
        assert_eq!(config.vowel_combinations, vec![('ㅗ', 'ㅏ', 'ㅘ')]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed_words": ["멍청이"] }}"#).unwrap();
        let config = FilterConfig::load(file.path()).unwrap();
        assert_eq!(config.seed_words, vec!["멍청이".to_string()]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(FilterConfig::from_json_str("{ seed_words: ").is_err());
    }
}
