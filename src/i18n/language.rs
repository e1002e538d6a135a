//! Language type: validated language representation.
//!
//! A `Language` can only be constructed from a code the catalog knows about,
//! so downstream code never handles unvetted codes.

use crate::errors::Error;
use crate::i18n::{LanguageConfig, LanguageRegistry};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is known and the language is enabled
    /// * `Err(Error::Validation)` otherwise
    pub fn from_code(code: &str) -> Result<Language, Error> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => Err(Error::Validation(format!(
                "language '{}' is not enabled",
                code
            ))),
            None => Err(Error::Validation(format!(
                "unknown language code: '{}'",
                code
            ))),
        }
    }

    /// The language new rating rows start out with.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the catalog.
    ///
    /// # Panics
    /// Panics if the code is not in the catalog. This cannot happen for a
    /// Language constructed via `from_code` or `default_language`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}
