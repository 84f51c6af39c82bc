// File: src/config.rs
use crate::core::report::DEFAULT_CONTEXT_RADIUS;
use crate::core::types::Locale;
use crate::error::{Result, TajweedError};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const ENV_TARGET_LANG: &str = "TAJWEED_TARGET_LANG";
pub const ENV_LOCALE: &str = "TAJWEED_LOCALE";
pub const ENV_GLOSSARY: &str = "TAJWEED_GLOSSARY";
pub const ENV_ARCHIVE: &str = "TAJWEED_ARCHIVE";

const DEFAULT_TARGET_LANGUAGE: &str = "ru";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Language requested from the translator.
    pub target_language: String,
    pub locale: Locale,
    /// Chars shown on each side of a rule in the report.
    pub context_radius: usize,
    pub glossary_path: Option<PathBuf>,
    pub archive_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            locale: Locale::default(),
            context_radius: DEFAULT_CONTEXT_RADIUS,
            glossary_path: None,
            archive_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with the `TAJWEED_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key/value source. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(lang) = get(ENV_TARGET_LANG) {
            self.target_language = lang.trim().to_string();
        }
        if let Some(locale) = get(ENV_LOCALE) {
            self.locale = Locale::parse(&locale)
                .ok_or_else(|| TajweedError::Config(format!("unknown locale '{locale}'")))?;
        }
        if let Some(path) = get(ENV_GLOSSARY) {
            self.glossary_path = Some(PathBuf::from(path));
        }
        if let Some(path) = get(ENV_ARCHIVE) {
            self.archive_path = Some(PathBuf::from(path));
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.target_language.trim().is_empty() {
            return Err(TajweedError::Config("target language is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_match_the_bot() {
        let config = EngineConfig::default();
        assert_eq!(config.target_language, "ru");
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.context_radius, 3);
    }

    #[test]
    fn overrides_apply_and_blank_values_are_ignored() {
        let vars = HashMap::from([
            (ENV_TARGET_LANG, "en"),
            (ENV_LOCALE, "ru"),
            (ENV_ARCHIVE, "  "),
        ]);
        let config = EngineConfig::default()
            .with_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.target_language, "en");
        assert_eq!(config.locale, Locale::Russian);
        assert_eq!(config.archive_path, None);
    }

    #[test]
    fn unknown_locale_is_a_config_error() {
        let err = EngineConfig::default()
            .with_overrides(|k| (k == ENV_LOCALE).then(|| "klingon".to_string()))
            .unwrap_err();
        assert!(matches!(err, TajweedError::Config(_)));
    }

    #[test]
    fn loads_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"locale": "russian", "context_radius": 5}}"#).unwrap();
        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.locale, Locale::Russian);
        assert_eq!(config.context_radius, 5);
        assert_eq!(config.target_language, "ru");
    }

    #[test]
    fn empty_target_language_in_json_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"target_language": ""}}"#).unwrap();
        assert!(EngineConfig::from_json_file(file.path()).is_err());
    }
}
