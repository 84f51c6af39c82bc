// src/core/analyzer.rs
use crate::core::tables::{
    is_diacritic, is_tanwin, IDGHAM_GHUNNAH, IDGHAM_NO_GHUNNAH, IKHFA, IQLAB, IZHAR, NUN,
    QALQALAH, SHADDA,
};
use crate::core::types::{Locale, RuleCategory, RuleOccurrence};

/// Classifies the letter following a nun or tanwin.
/// Sets overlap on ب and ل, so the first match in this order wins.
pub fn classify_follower(next: char) -> Option<RuleCategory> {
    if IDGHAM_GHUNNAH.contains(&next) {
        Some(RuleCategory::IdghamGhunnah)
    } else if IDGHAM_NO_GHUNNAH.contains(&next) {
        Some(RuleCategory::IdghamNoGhunnah)
    } else if IQLAB.contains(&next) {
        Some(RuleCategory::Iqlab)
    } else if IZHAR.contains(&next) {
        Some(RuleCategory::Izhar)
    } else if IKHFA.contains(&next) {
        Some(RuleCategory::Ikhfa)
    } else {
        None
    }
}

/// Single-pass, char-local Tajweed classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TajweedAnalyzer {
    locale: Locale,
}

impl TajweedAnalyzer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Scans normalized text and returns occurrences in position order.
    /// At one position the checks run as shaddah, nun/tanwin, qalqalah.
    pub fn analyze(&self, text: &str) -> Vec<RuleOccurrence> {
        let chars: Vec<char> = text.chars().collect();
        let mut rules = Vec::new();

        for (i, &c) in chars.iter().enumerate() {
            if c == SHADDA {
                rules.push(RuleOccurrence::new(i, RuleCategory::Shaddah, self.locale));
            }

            if c == NUN || is_tanwin(c) {
                let next = chars[i + 1..].iter().copied().find(|&n| !is_diacritic(n));
                if let Some(category) = next.and_then(classify_follower) {
                    rules.push(RuleOccurrence::new(i, category, self.locale));
                }
            }

            if QALQALAH.contains(&c) {
                rules.push(RuleOccurrence::new(i, RuleCategory::Qalqalah, self.locale));
            }
        }

        rules
    }
}
