// src/core/mod.rs
pub mod canon;
pub mod codec;
pub mod converter;
pub mod decompose;
pub mod engine;
pub mod forms;
pub mod index;
pub mod leet;
pub mod normalize;
pub mod tables;
pub mod types;
