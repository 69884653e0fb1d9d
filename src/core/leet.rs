// src/core/leet.rs
use crate::error::ConfigError;
use std::collections::{BTreeMap, HashMap};

/// Digit -> look-alike Latin letter. This is the stock table; deployments
/// swap in their own through the config file.
pub const DIGIT_LOOKALIKES: [(char, char); 8] = [
    ('0', 'o'),
    ('1', 'i'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('7', 't'),
    ('8', 'b'),
    ('9', 'g'),
];

/// Character-for-character substitution of look-alike symbols.
#[derive(Debug, Clone)]
pub struct LeetTable {
    substitutions: HashMap<char, char>,
}

impl LeetTable {
    pub fn digits() -> Self {
        Self {
            substitutions: DIGIT_LOOKALIKES.into_iter().collect(),
        }
    }

    pub fn from_map(entries: &BTreeMap<char, char>) -> Result<Self, ConfigError> {
        for (&from, &to) in entries {
            let visible = |c: char| !c.is_whitespace() && !c.is_control();
            if !visible(from) || !visible(to) {
                return Err(ConfigError::InvalidLeet { from, to });
            }
        }
        Ok(Self {
            substitutions: entries.iter().map(|(&k, &v)| (k, v)).collect(),
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.substitutions.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

impl Default for LeetTable {
    fn default() -> Self {
        Self::digits()
    }
}
