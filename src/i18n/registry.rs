//! Language catalog: single source of truth for the supported languages.
//!
//! Rating comments are tagged with the language they were written in, so the
//! set of accepted codes has to live in one place. The catalog uses a
//! singleton pattern with `OnceLock` for thread-safe initialization.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Whether this language is currently accepted for new ratings
    pub enabled: bool,
}

/// Global language catalog singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in catalog order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The language new rating rows are created with before the submitted
    /// payload overwrites them.
    ///
    /// # Panics
    /// Panics if the catalog has no enabled language (a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.enabled)
            .expect("no enabled language in catalog")
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default language configurations.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            enabled: true,
        },
        LanguageConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            enabled: true,
        },
        LanguageConfig {
            code: "nl",
            name: "Dutch",
            native_name: "Nederlands",
            enabled: true,
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            enabled: true,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            enabled: true,
        },
    ]
}
