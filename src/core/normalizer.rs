// src/core/normalizer.rs
use crate::core::tables::TATWEEL;

/// Drops every tatweel and trims surrounding whitespace.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&c| c != TATWEEL)
        .collect::<String>()
        .trim()
        .to_string()
}

/// True when the text carries at least one char of the Arabic block.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}
