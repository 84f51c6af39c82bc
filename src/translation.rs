// File: src/translation.rs
//! The optional translation collaborator. Failures never reach the
//! report: `resolve_translation` turns them into `None`.
use crate::core::normalizer::normalize;
use crate::error::Result;
use log::{debug, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("No translations available for language '{language}'")]
    Unsupported { language: String },

    #[error("No translation found")]
    NotFound,

    #[error("Translation backend failed: {0}")]
    Backend(String),
}

pub trait Translator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError>;
}

/// Calls the translator at most once and swallows any failure.
pub fn resolve_translation(
    translator: Option<&dyn Translator>,
    text: &str,
    target_language: &str,
) -> Option<String> {
    let translator = translator?;
    match translator.translate(text, target_language) {
        Ok(tr) if tr.trim().is_empty() => None,
        Ok(tr) => Some(tr),
        Err(TranslationError::NotFound) => {
            debug!("No translation for {:?} into '{}'", text, target_language);
            None
        }
        Err(e) => {
            warn!("Translation into '{}' skipped: {}", target_language, e);
            None
        }
    }
}

/// Offline phrase table keyed by language, then by normalized Arabic text.
#[derive(Debug, Clone, Default)]
pub struct GlossaryTranslator {
    entries: HashMap<String, HashMap<String, String>>,
}

impl GlossaryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `{"<lang>": {"<arabic>": "<translation>"}}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_reader(reader)?;
        let mut glossary = Self::new();
        for (language, phrases) in raw {
            for (arabic, translation) in phrases {
                glossary.insert(&language, &arabic, &translation);
            }
        }
        debug!("Loaded glossary from '{}'", path.display());
        Ok(glossary)
    }

    pub fn insert(&mut self, language: &str, arabic: &str, translation: &str) {
        self.entries
            .entry(language.to_string())
            .or_default()
            .insert(normalize(arabic), translation.to_string());
    }
}

impl Translator for GlossaryTranslator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError> {
        let phrases = self
            .entries
            .get(target_language)
            .ok_or_else(|| TranslationError::Unsupported {
                language: target_language.to_string(),
            })?;
        phrases
            .get(&normalize(text))
            .cloned()
            .ok_or(TranslationError::NotFound)
    }
}
