// src/core/forms.rs
use crate::config::FilterConfig;
use crate::core::canon::CanonMap;
use crate::core::converter::PhoneticReconstructor;
use crate::core::decompose::decompose;
use crate::core::leet::LeetTable;
use crate::core::normalize::normalize;
use crate::core::tables::{CombinationTables, KeyboardMap};
use crate::core::types::FormSet;
use crate::error::ConfigError;

/// The three base variants every form is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVariants {
    /// Normalized input.
    pub cleaned: String,
    /// Normalized input after look-alike substitution.
    pub leet: String,
    /// Normalized input re-read as alternate-layout typing.
    pub reconstructed: String,
}

impl BaseVariants {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.cleaned.as_str(), self.leet.as_str(), self.reconstructed.as_str()].into_iter()
    }
}

/// Produces the closed set of textual variants checked for one input.
#[derive(Debug, Clone, Default)]
pub struct FormSetGenerator {
    reconstructor: PhoneticReconstructor,
    leet: LeetTable,
    canon: CanonMap,
}

impl FormSetGenerator {
    pub fn new(reconstructor: PhoneticReconstructor, leet: LeetTable, canon: CanonMap) -> Self {
        Self { reconstructor, leet, canon }
    }

    /// Validates every table in `config`.
    pub fn from_config(config: &FilterConfig) -> Result<Self, ConfigError> {
        let keyboard = KeyboardMap::from_pairs(config.keyboard.iter().map(|(&k, &v)| (k, v)))?;
        let combinations =
            CombinationTables::from_entries(&config.vowel_combinations, &config.trail_combinations)?;
        Ok(Self {
            reconstructor: PhoneticReconstructor::new(keyboard, combinations),
            leet: LeetTable::from_map(&config.leet)?,
            canon: CanonMap::from_map(&config.canon)?,
        })
    }

    pub fn base_variants(&self, raw: &str) -> BaseVariants {
        let cleaned = normalize(raw);
        let leet = self.leet.normalize(&cleaned);
        let reconstructed = normalize(&self.reconstructor.reconstruct(&cleaned));
        BaseVariants { cleaned, leet, reconstructed }
    }

    /// Each base variant, its decomposition, and the canon fold of that
    /// decomposition.
    pub fn generate(&self, raw: &str) -> FormSet {
        let mut forms = FormSet::new();
        for base in self.base_variants(raw).iter() {
            let jamo = decompose(base);
            if !self.canon.is_identity() {
                forms.insert(self.canon.fold(&jamo));
            }
            forms.insert(jamo);
            forms.insert(base.to_string());
        }
        forms
    }
}
