// src/error.rs
use thiserror::Error;

/// A table or map entry that breaks the engine's invariants.
/// Raised once while the engine is built, never per message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Keyboard key '{key}' maps to '{target}', which is neither a lead consonant nor a vowel")]
    KeyboardTarget { key: char, target: char },

    #[error("Vowel combination uses '{0}', which is not a vowel")]
    NotAVowel(char),

    #[error("Trail combination uses '{0}', which is not a trailing consonant")]
    NotATrail(char),

    #[error("Combination '{first}' + '{second}' is listed as both '{existing}' and '{replacement}'")]
    ConflictingCombination {
        first: char,
        second: char,
        existing: char,
        replacement: char,
    },

    #[error("Canon map entry '{from}' -> '{to}' must map a jamo to a jamo")]
    CanonNotJamo { from: char, to: char },

    #[error("Canon map is not idempotent: '{from}' -> '{to}' but '{to}' -> '{next}'")]
    NonIdempotentCanon { from: char, to: char, next: char },

    #[error("Leet substitution '{from}' -> '{to}' must use visible characters")]
    InvalidLeet { from: char, to: char },
}

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Snapshot format version {found} is not supported (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },

    #[error("Bad-form index is already initialized")]
    AlreadyInitialized,

    #[error("Bad-form index has not been initialized")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, FilterError>;
