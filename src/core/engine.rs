use crate::config::FilterConfig;
use crate::core::forms::FormSetGenerator;
use crate::core::index::BadFormIndex;
use crate::core::types::FormSet;
use crate::error::Result;
use crate::persistence::{load_snapshot, Snapshot, SNAPSHOT_VERSION};
use std::path::Path;
use tracing::{debug, info, warn};

// The engine owns the validated tables and the bad-form index.
// Nothing in here mutates after construction, so it is shared freely across threads.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    config: FilterConfig,
    generator: FormSetGenerator,
    bad_forms: BadFormIndex,
}

impl FilterEngine {
    /// Stock tables and seed words.
    pub fn new() -> Self {
        Self::with_config(FilterConfig::default()).expect("stock configuration is valid")
    }

    pub fn with_config(config: FilterConfig) -> Result<Self> {
        let generator = FormSetGenerator::from_config(&config)?;
        let bad_forms = BadFormIndex::build(&generator, &config.seed_words);
        if bad_forms.is_empty() {
            warn!("bad-form index is empty; every message will pass");
        }
        info!(
            seeds = config.seed_words.len(),
            forms = bad_forms.len(),
            "bad-form index built"
        );
        Ok(Self { config, generator, bad_forms })
    }

    pub fn from_config_file(path: &Path) -> Result<Self> {
        Self::with_config(FilterConfig::load(path)?)
    }

    /// Reuses a snapshot at `path` when it was built from the same config,
    /// otherwise builds the index from scratch. The flag is true when the
    /// snapshot was reused.
    pub fn from_snapshot_or_build(config: FilterConfig, path: &Path) -> Result<(Self, bool)> {
        match load_snapshot(path) {
            Ok(snapshot) if snapshot.config == config => {
                let generator = FormSetGenerator::from_config(&config)?;
                info!(path = %path.display(), forms = snapshot.bad_forms.len(), "loaded bad-form snapshot");
                Ok((Self { config, generator, bad_forms: snapshot.bad_forms }, true))
            }
            Ok(_) => {
                warn!(path = %path.display(), "snapshot was built from a different config, rebuilding");
                Ok((Self::with_config(config)?, false))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "no usable snapshot, rebuilding");
                Ok((Self::with_config(config)?, false))
            }
        }
    }

    /// True when any indexed bad form occurs inside any form of `message`.
    pub fn detect(&self, message: &str) -> bool {
        let forms = self.generator.generate(message);
        let hit = forms.iter().any(|form| self.bad_forms.occurs_in(form));
        if hit {
            debug!(message, "bad word detected");
        }
        hit
    }

    /// Every indexed bad form found in `message`, deduplicated and sorted.
    pub fn find_hits(&self, message: &str) -> Vec<String> {
        let forms = self.generator.generate(message);
        let hits: FormSet = forms
            .iter()
            .flat_map(|form| self.bad_forms.matches_in(form))
            .map(str::to_string)
            .collect();
        hits.into_iter().collect()
    }

    pub fn forms(&self, message: &str) -> FormSet {
        self.generator.generate(message)
    }

    pub fn generator(&self) -> &FormSetGenerator {
        &self.generator
    }

    pub fn bad_forms(&self) -> &BadFormIndex {
        &self.bad_forms
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            config: self.config.clone(),
            bad_forms: self.bad_forms.clone(),
        }
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
