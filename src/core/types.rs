// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language used for rule descriptions and report headings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "ru" | "russian" => Some(Self::Russian),
            _ => None,
        }
    }
}

/// The simplified Tajweed rule categories the analyzer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    Shaddah,
    IdghamGhunnah,
    IdghamNoGhunnah,
    Iqlab,
    Izhar,
    Ikhfa,
    Qalqalah,
}

impl RuleCategory {
    /// Latin name of the rule as shown in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Shaddah => "Shaddah",
            Self::IdghamGhunnah => "Idgham + Ghunnah",
            Self::IdghamNoGhunnah => "Idgham",
            Self::Iqlab => "Iqlab",
            Self::Izhar => "Izhar",
            Self::Ikhfa => "Ikhfa",
            Self::Qalqalah => "Qalqalah",
        }
    }

    pub fn description(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Self::Shaddah) => "Doubled consonant",
            (Locale::English, Self::IdghamGhunnah) => "Assimilation with nasalization",
            (Locale::English, Self::IdghamNoGhunnah) => "Assimilation without nasalization",
            (Locale::English, Self::Iqlab) => "Conversion (ن → م)",
            (Locale::English, Self::Izhar) => "Clear pronunciation",
            (Locale::English, Self::Ikhfa) => "Hidden with nasalization",
            (Locale::English, Self::Qalqalah) => "Echoing release",
            (Locale::Russian, Self::Shaddah) => "Удвоение согласной",
            (Locale::Russian, Self::IdghamGhunnah) => "Идгам с гунной",
            (Locale::Russian, Self::IdghamNoGhunnah) => "Идгам без гунны",
            (Locale::Russian, Self::Iqlab) => "Икляб (ن → م)",
            (Locale::Russian, Self::Izhar) => "Ясное произношение",
            (Locale::Russian, Self::Ikhfa) => "Скрытие с гунной",
            (Locale::Russian, Self::Qalqalah) => "Отскок звука",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One rule firing at a character position of the normalized text.
/// `position` counts chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOccurrence {
    pub position: usize,
    pub category: RuleCategory,
    pub description: String,
}

impl RuleOccurrence {
    pub fn new(position: usize, category: RuleCategory, locale: Locale) -> Self {
        Self {
            position,
            category,
            description: category.description(locale).to_string(),
        }
    }
}

/// Everything produced for a single request. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub normalized_text: String,
    pub transliteration: String,
    pub rules: Vec<RuleOccurrence>,
    pub translation: Option<String>,
}
