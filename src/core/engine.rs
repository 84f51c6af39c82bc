use crate::config::EngineConfig;
use crate::core::analyzer::TajweedAnalyzer;
use crate::core::converter::TransliterationEngine;
use crate::core::normalizer::normalize;
use crate::core::report::ReportFormatter;
use crate::core::types::AnalysisResult;
use crate::error::Result;
use crate::translation::{resolve_translation, GlossaryTranslator, Translator};
use log::{debug, info};

pub type SharedTranslator = Box<dyn Translator + Send + Sync>;

// The engine composes the pure pipeline stages with the optional translator.
// It holds no per-request state, so one instance can serve many threads.
pub struct TajweedEngine {
    pub transliterator: TransliterationEngine,
    pub analyzer: TajweedAnalyzer,
    pub formatter: ReportFormatter,
    translator: Option<SharedTranslator>,
    target_language: String,
}

impl TajweedEngine {
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self::build(&config, None)
    }

    /// Builds the engine and loads the glossary named in the config, if any.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let translator: Option<SharedTranslator> = match &config.glossary_path {
            Some(path) => {
                info!("Using glossary translator from '{}'", path.display());
                Some(Box::new(GlossaryTranslator::from_json_file(path)?))
            }
            None => None,
        };
        Ok(Self::build(config, translator))
    }

    fn build(config: &EngineConfig, translator: Option<SharedTranslator>) -> Self {
        Self {
            transliterator: TransliterationEngine::new(),
            analyzer: TajweedAnalyzer::new(config.locale),
            formatter: ReportFormatter::new(config.locale, config.context_radius),
            translator,
            target_language: config.target_language.clone(),
        }
    }

    pub fn with_translator(mut self, translator: SharedTranslator) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// Runs the full pipeline on raw input.
    pub fn analyze_text(&self, raw: &str) -> AnalysisResult {
        let normalized_text = normalize(raw);
        let transliteration = self.transliterator.transliterate(&normalized_text);
        let rules = self.analyzer.analyze(&normalized_text);
        debug!(
            "Analyzed {} chars, {} rule occurrences",
            normalized_text.chars().count(),
            rules.len()
        );

        let translation = resolve_translation(
            self.translator.as_deref().map(|t| t as &dyn Translator),
            &normalized_text,
            &self.target_language,
        );

        AnalysisResult {
            normalized_text,
            transliteration,
            rules,
            translation,
        }
    }

    pub fn render(&self, result: &AnalysisResult) -> String {
        self.formatter.format(
            &result.normalized_text,
            &result.transliteration,
            &result.rules,
            result.translation.as_deref(),
        )
    }

    /// Analyze and format in one call.
    pub fn report(&self, raw: &str) -> String {
        self.render(&self.analyze_text(raw))
    }
}

impl Default for TajweedEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RuleCategory;

    #[test]
    fn pipeline_normalizes_before_everything_else() {
        let engine = TajweedEngine::new();
        let result = engine.analyze_text("  مـِنْ بَعْدِ ");
        assert_eq!(result.normalized_text, "مِنْ بَعْدِ");
        assert_eq!(result.transliteration, "min baʿdi");
        assert_eq!(result.translation, None);
        // nun followed by a space: no nun rule. ب and د are qalqalah letters.
        let found: Vec<_> = result.rules.iter().map(|r| (r.position, r.category)).collect();
        assert_eq!(
            found,
            vec![(5, RuleCategory::Qalqalah), (9, RuleCategory::Qalqalah)]
        );
    }

    #[test]
    fn translator_feeds_the_last_section() {
        let mut glossary = GlossaryTranslator::new();
        glossary.insert("ru", "قل", "Скажи");
        let engine = TajweedEngine::new().with_translator(Box::new(glossary));
        assert!(engine.has_translator());
        assert!(engine.report("قل").ends_with("\nСкажи"));
        assert!(!engine.report("رب").contains("Translation"));
    }
}
