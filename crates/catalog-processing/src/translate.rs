//! Optional text transform applied to free-text fields.
//!
//! The normalizer runs without a translator by default. When one is
//! configured it is invoked once per scalar text field (`groups`, `name`,
//! `ingredients`, `packaging`, `categories`) after that field's own rules.
//! A failing translation leaves the text unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_processing::translate::TextTranslator;
//!
//! struct Dictionary(std::collections::HashMap<String, String>);
//!
//! impl TextTranslator for Dictionary {
//!     fn translate(&self, text: &str) -> anyhow::Result<String> {
//!         self.0.get(text).cloned().ok_or_else(|| anyhow::anyhow!("no entry"))
//!     }
//!     fn name(&self) -> &str { "dictionary" }
//! }
//! ```

use anyhow::Result;
use tracing::debug;

/// A text-to-English transform.
///
/// Implementations must be `Send + Sync` so a [`Pipeline`](crate::Pipeline)
/// holding one stays `Send`.
pub trait TextTranslator: Send + Sync {
    /// Translate `text`, returning the English rendering.
    fn translate(&self, text: &str) -> Result<String>;

    /// Translator name for logging.
    fn name(&self) -> &str;
}

/// Translator that only lower-cases, for text already known to be English.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowercaseTranslator;

impl TextTranslator for LowercaseTranslator {
    fn translate(&self, text: &str) -> Result<String> {
        Ok(text.to_lowercase())
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}

/// Apply `translator` to an optional field, falling back to the input text.
pub(crate) fn translate_field(
    translator: Option<&dyn TextTranslator>,
    field: Option<String>,
) -> Option<String> {
    let Some(translator) = translator else {
        return field;
    };
    let Some(text) = field.as_deref() else {
        return None;
    };
    match translator.translate(text) {
        Ok(translated) => Some(translated),
        Err(e) => {
            debug!("{} translation failed, keeping original text: {}", translator.name(), e);
            field
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl TextTranslator for Failing {
        fn translate(&self, _text: &str) -> Result<String> {
            Err(anyhow::anyhow!("service unavailable"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_no_translator_passes_through() {
        assert_eq!(translate_field(None, Some("Lait".into())), Some("Lait".to_string()));
    }

    #[test]
    fn test_missing_field_stays_missing() {
        assert_eq!(translate_field(Some(&LowercaseTranslator), None), None);
    }

    #[test]
    fn test_translation_applies() {
        assert_eq!(
            translate_field(Some(&LowercaseTranslator), Some("Milk".into())),
            Some("milk".to_string())
        );
    }

    #[test]
    fn test_failure_falls_back_to_original() {
        assert_eq!(
            translate_field(Some(&Failing), Some("Fromage".into())),
            Some("Fromage".to_string())
        );
    }
}
