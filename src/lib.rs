// src/lib.rs
//! Arabic transliteration and simplified Tajweed annotation.

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod protocol;
pub mod translation;

pub use crate::config::EngineConfig;
pub use crate::core::analyzer::TajweedAnalyzer;
pub use crate::core::converter::TransliterationEngine;
pub use crate::core::engine::TajweedEngine;
pub use crate::core::normalizer::{contains_arabic, normalize};
pub use crate::core::report::ReportFormatter;
pub use crate::core::types::{AnalysisResult, Locale, RuleCategory, RuleOccurrence};
pub use crate::error::{Result, TajweedError};
pub use crate::translation::{resolve_translation, GlossaryTranslator, TranslationError, Translator};

/// Transliterates already normalized text with the fixed table.
pub fn transliterate(text: &str) -> String {
    TransliterationEngine::new().transliterate(text)
}

/// Rule occurrences for normalized text, with English descriptions.
pub fn analyze(text: &str) -> Vec<RuleOccurrence> {
    TajweedAnalyzer::default().analyze(text)
}

/// Formats a report with the default locale and context radius.
pub fn format(
    text: &str,
    transliteration: &str,
    rules: &[RuleOccurrence],
    translation: Option<&str>,
) -> String {
    ReportFormatter::default().format(text, transliteration, rules, translation)
}
