// src/core/mod.rs
pub mod analyzer;
pub mod converter;
pub mod engine;
pub mod normalizer;
pub mod report;
pub mod tables;
pub mod types;
