//! Supported-language catalog.
//!
//! The rating workflow consumes exactly two things from here: the set of
//! accepted language codes and their localized display names. There is no
//! translation machinery.
//!
//! # Example
//!
//! ```rust,ignore
//! use appstore_ratings::i18n::{list_language_codes, Language};
//!
//! // Validate a submitted code
//! let language = Language::from_code("es")?;
//!
//! // Codes and native names for a language picker
//! let choices = list_language_codes();
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};

/// List the enabled language codes with their native display names, in
/// catalog order. Codes are unique within the returned sequence.
pub fn list_language_codes() -> Vec<(&'static str, &'static str)> {
    LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|lang| (lang.code, lang.native_name))
        .collect()
}

/// Native display name for a single code. Unknown codes yield no entry.
pub fn local_name(code: &str) -> Option<&'static str> {
    LanguageRegistry::get()
        .get_by_code(code)
        .map(|lang| lang.native_name)
}
