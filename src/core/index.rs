// src/core/index.rs
use crate::core::forms::FormSetGenerator;
use crate::core::types::FormSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Union of the form sets of every seed word. Built once, read-only after.
/// An empty form would match every message, so none is ever admitted,
/// including through deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FormSet", into = "FormSet")]
pub struct BadFormIndex {
    forms: FormSet,
}

impl BadFormIndex {
    pub fn build<I, S>(generator: &FormSetGenerator, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut forms = FormSet::new();
        for seed in seeds {
            let seed_forms = generator.generate(seed.as_ref());
            debug!(seed = seed.as_ref(), forms = seed_forms.len(), "indexed seed word");
            forms.extend(seed_forms.into_iter().filter(|f| !f.is_empty()));
        }
        Self { forms }
    }

    /// Indexed forms occurring as a substring of `form`.
    pub fn matches_in<'a>(&'a self, form: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.forms
            .iter()
            .map(String::as_str)
            .filter(move |bad| form.contains(bad))
    }

    pub fn occurs_in(&self, form: &str) -> bool {
        self.matches_in(form).next().is_some()
    }

    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains(form)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl TryFrom<FormSet> for BadFormIndex {
    type Error = &'static str;

    fn try_from(forms: FormSet) -> Result<Self, Self::Error> {
        if forms.contains("") {
            return Err("bad-form index contains an empty form");
        }
        Ok(Self { forms })
    }
}

impl From<BadFormIndex> for FormSet {
    fn from(index: BadFormIndex) -> Self {
        index.forms
    }
}
