// src/core/canon.rs
use crate::core::types::is_jamo;
use crate::error::ConfigError;
use std::collections::{BTreeMap, HashMap};

/// Folds confusable jamo (e.g. tense/plain pairs) onto one representative.
/// Unmapped characters are left alone, so the empty map is the identity.
#[derive(Debug, Clone, Default)]
pub struct CanonMap {
    folds: HashMap<char, char>,
}

impl CanonMap {
    pub fn identity() -> Self {
        Self::default()
    }

    /// Rejects entries that are not jamo and maps that are not idempotent
    /// (a target that is itself folded somewhere else).
    pub fn from_map(entries: &BTreeMap<char, char>) -> Result<Self, ConfigError> {
        for (&from, &to) in entries {
            if !is_jamo(from) || !is_jamo(to) {
                return Err(ConfigError::CanonNotJamo { from, to });
            }
            if let Some(&next) = entries.get(&to) {
                if next != to {
                    return Err(ConfigError::NonIdempotentCanon { from, to, next });
                }
            }
        }
        Ok(Self {
            folds: entries.iter().map(|(&k, &v)| (k, v)).collect(),
        })
    }

    pub fn canonical(&self, c: char) -> char {
        self.folds.get(&c).copied().unwrap_or(c)
    }

    pub fn fold(&self, text: &str) -> String {
        text.chars().map(|c| self.canonical(c)).collect()
    }

    pub fn is_identity(&self) -> bool {
        self.folds.iter().all(|(k, v)| k == v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(char, char)]) -> BTreeMap<char, char> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_identity_fold() {
        let canon = CanonMap::identity();
        assert!(canon.is_identity());
        assert_eq!(canon.fold("ㅆㅣㅂㅏㄹ"), "ㅆㅣㅂㅏㄹ");
    }

    #[test]
    fn test_tense_to_plain() {
        let canon = CanonMap::from_map(&map(&[('ㅆ', 'ㅅ'), ('ㄲ', 'ㄱ')])).unwrap();
        assert_eq!(canon.fold("ㅆㅣㅂㅏㄹ"), "ㅅㅣㅂㅏㄹ");
        assert_eq!(canon.fold("ㄲㅏ abc"), "ㄱㅏ abc");
    }

    #[test]
    fn test_fold_is_idempotent() {
        let canon = CanonMap::from_map(&map(&[('ㅆ', 'ㅅ'), ('ㅐ', 'ㅔ'), ('ㅔ', 'ㅔ')])).unwrap();
        let once = canon.fold("ㅆㅐㅅㅔ");
        assert_eq!(canon.fold(&once), once);
    }

    #[test]
    fn test_rejects_chained_folds() {
        let err = CanonMap::from_map(&map(&[('ㅆ', 'ㅅ'), ('ㅅ', 'ㅈ')])).unwrap_err();
        assert_eq!(err, ConfigError::NonIdempotentCanon { from: 'ㅆ', to: 'ㅅ', next: 'ㅈ' });
    }

    #[test]
    fn test_rejects_non_jamo() {
        let err = CanonMap::from_map(&map(&[('a', 'ㅏ')])).unwrap_err();
        assert_eq!(err, ConfigError::CanonNotJamo { from: 'a', to: 'ㅏ' });
    }
}
