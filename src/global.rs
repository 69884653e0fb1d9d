// src/global.rs
//! The process-wide engine: built once at startup, read-only afterwards.

use crate::config::FilterConfig;
use crate::core::engine::FilterEngine;
use crate::error::{FilterError, Result};
use once_cell::sync::OnceCell;

static ENGINE: OnceCell<FilterEngine> = OnceCell::new();

/// Builds the engine from `config`. Fails if it was already initialized;
/// reconfiguring means restarting the process.
pub fn init(config: FilterConfig) -> Result<&'static FilterEngine> {
    install(FilterEngine::with_config(config)?)
}

/// Installs an engine built elsewhere, e.g. from a snapshot.
pub fn install(built: FilterEngine) -> Result<&'static FilterEngine> {
    ENGINE
        .set(built)
        .map_err(|_| FilterError::AlreadyInitialized)?;
    engine()
}

pub fn engine() -> Result<&'static FilterEngine> {
    ENGINE.get().ok_or(FilterError::NotInitialized)
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

/// Detection against the process-wide index.
pub fn detect(message: &str) -> Result<bool> {
    Ok(engine()?.detect(message))
}
