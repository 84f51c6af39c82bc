// src/core/converter.rs
use crate::core::tables::TRANSLITERATION_TABLE;

/// A stateless Arabic to Latin transliterator.
///
/// Every char is mapped on its own; chars missing from the table pass
/// through unchanged. Digraphs and empty diacritic mappings mean the
/// output length is not tied to the input length.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransliterationEngine;

impl TransliterationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Transliterates a full (already normalized) string.
    pub fn transliterate(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            match TRANSLITERATION_TABLE.get(&c) {
                Some(latin) => result.push_str(latin),
                None => result.push(c),
            }
        }
        result
    }
}
