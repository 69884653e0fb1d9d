// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod global;
pub mod persistence;
pub mod skill;

pub use crate::config::FilterConfig;
pub use crate::core::engine::FilterEngine;
pub use crate::core::types::FormSet;
pub use crate::error::{ConfigError, FilterError};
