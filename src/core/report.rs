// src/core/report.rs
use crate::core::types::{Locale, RuleOccurrence};

pub const DEFAULT_CONTEXT_RADIUS: usize = 3;

struct Headings {
    source: &'static str,
    transliteration: &'static str,
    tajweed: &'static str,
    no_rules: &'static str,
    translation: &'static str,
}

fn headings(locale: Locale) -> Headings {
    match locale {
        Locale::English => Headings {
            source: "📖 Source text:",
            transliteration: "🔤 Transliteration:",
            tajweed: "📘 Tajweed (simplified):",
            no_rules: "— no rules found",
            translation: "🌍 Translation:",
        },
        Locale::Russian => Headings {
            source: "📖 Исходный текст:",
            transliteration: "🔤 Транслитерация:",
            tajweed: "📘 Таджвид (упрощённо):",
            no_rules: "— правила не найдены",
            translation: "🌍 Перевод:",
        },
    }
}

/// Renders the user-facing text report.
#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    locale: Locale,
    context_radius: usize,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(Locale::default(), DEFAULT_CONTEXT_RADIUS)
    }
}

impl ReportFormatter {
    pub fn new(locale: Locale, context_radius: usize) -> Self {
        Self { locale, context_radius }
    }

    /// Chars from `radius` before through `radius` after `position`, clipped.
    pub fn context(&self, chars: &[char], position: usize) -> String {
        let start = position.saturating_sub(self.context_radius);
        let end = position
            .saturating_add(self.context_radius)
            .saturating_add(1)
            .min(chars.len());
        if start >= end {
            return String::new();
        }
        chars[start..end].iter().collect()
    }

    pub fn format(
        &self,
        text: &str,
        transliteration: &str,
        rules: &[RuleOccurrence],
        translation: Option<&str>,
    ) -> String {
        let h = headings(self.locale);
        let chars: Vec<char> = text.chars().collect();

        let mut output = vec![
            h.source.to_string(),
            text.to_string(),
            String::new(),
            h.transliteration.to_string(),
            transliteration.to_string(),
            String::new(),
            h.tajweed.to_string(),
        ];

        if rules.is_empty() {
            output.push(h.no_rules.to_string());
        }
        for rule in rules {
            output.push(format!(
                "- {}: {} ( «{}» )",
                rule.category.name(),
                rule.description,
                self.context(&chars, rule.position)
            ));
        }

        if let Some(tr) = translation {
            output.push(String::new());
            output.push(h.translation.to_string());
            output.push(tr.to_string());
        }

        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RuleCategory;

    #[test]
    fn empty_rules_show_placeholder() {
        let report = ReportFormatter::default().format("abc", "abc", &[], None);
        assert!(report.contains("— no rules found"));
        assert!(!report.contains("- "));
        assert!(!report.contains("Translation"));
    }

    #[test]
    fn context_window_is_clipped() {
        let f = ReportFormatter::default();
        let chars: Vec<char> = "abcdefghij".chars().collect();
        assert_eq!(f.context(&chars, 0), "abcd");
        assert_eq!(f.context(&chars, 5), "cdefghi");
        assert_eq!(f.context(&chars, 9), "ghij");
        assert_eq!(f.context(&chars, 20), "");
    }

    #[test]
    fn rule_lines_carry_name_description_and_context() {
        let rules = vec![RuleOccurrence::new(0, RuleCategory::Iqlab, Locale::English)];
        let report = ReportFormatter::default().format("نب", "nb", &rules, None);
        assert!(report.contains("- Iqlab: Conversion (ن → م) ( «نب» )"));
        assert!(!report.contains("no rules found"));
    }

    #[test]
    fn translation_appended_as_last_section() {
        let f = ReportFormatter::default();
        let without = f.format("قل", "ql", &[], None);
        let with = f.format("قل", "ql", &[], Some("say"));
        assert_eq!(with, format!("{without}\n\n🌍 Translation:\nsay"));
    }

    #[test]
    fn russian_headings() {
        let report = ReportFormatter::new(Locale::Russian, 3).format("x", "x", &[], None);
        assert!(report.starts_with("📖 Исходный текст:\nx\n"));
        assert!(report.ends_with("— правила не найдены"));
    }
}
