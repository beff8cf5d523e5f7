//! Language registry: Single source of truth for all supported languages.
//!
//! Each language carries the numeric selector used by legacy builds
//! (`LANGUAGE == TR`), the DOS code page its text was authored in, and its
//! compiled string table. The registry is a `OnceLock` singleton and never
//! changes after initialization.

use crate::error::StringTableError;
use crate::i18n::strings::{ENGLISH_STRINGS, TURKISH_STRINGS};
use crate::i18n::{CodePage, LanguageStrings};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "tr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Turkish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Türkçe")
    pub native_name: &'static str,

    /// Value of the `LANGUAGE` selector constant that activates this table
    pub selector: u32,

    /// Symbolic name of the selector constant in legacy headers (e.g., "TR")
    pub selector_name: &'static str,

    /// DOS code page the strings are rendered in
    pub code_page: CodePage,

    /// Whether this is the canonical language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Compiled string table
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code (exact match).
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language configuration by its selector value.
    pub fn get_by_selector(&self, selector: u32) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.selector == selector)
    }

    /// Get a language configuration by its selector constant name (e.g., "TR").
    pub fn get_by_selector_name(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.selector_name.eq_ignore_ascii_case(name))
    }

    /// Select the active language for a `LANGUAGE` selector value.
    ///
    /// Exactly one enabled language may match. There is no fallback: an
    /// unknown or disabled selector is an error.
    pub fn select(&self, selector: u32) -> Result<&LanguageConfig, StringTableError> {
        match self.get_by_selector(selector) {
            Some(config) if config.enabled => Ok(config),
            Some(config) => Err(StringTableError::LanguageDisabled(config.code.to_string())),
            None => Err(StringTableError::UnknownSelector(selector)),
        }
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default language configurations.
///
/// Selector values match the constants of the legacy language headers.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            selector: 1,
            selector_name: "EN",
            code_page: CodePage::Cp437,
            is_canonical: true,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "tr",
            name: "Turkish",
            native_name: "Türkçe",
            selector: 2,
            selector_name: "TR",
            code_page: CodePage::Cp857,
            is_canonical: false,
            enabled: true,
            strings: &TURKISH_STRINGS,
        },
    ]
}
