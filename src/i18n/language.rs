//! Language type: a validated handle onto a registry entry.

use crate::error::StringTableError;
use crate::i18n::{CodePage, LanguageConfig, LanguageRegistry, LanguageStrings};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A validated language.
///
/// Only codes that exist in the registry and are enabled can be turned into
/// a `Language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "tr")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const TURKISH: Language = Language { code: "tr" };

    /// Create a Language from a language code or locale string.
    ///
    /// Accepts "tr", "TR", "tr-TR" and POSIX forms such as "tr_TR.UTF-8".
    pub fn from_code(code: &str) -> Result<Language, StringTableError> {
        let primary = primary_subtag(code);
        let registry = LanguageRegistry::get();

        match registry.get_by_code(&primary) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => Err(StringTableError::LanguageDisabled(code.to_string())),
            None => Err(StringTableError::UnknownLanguage(code.to_string())),
        }
    }

    /// Create a Language from the numeric `LANGUAGE` selector value.
    pub fn from_selector(selector: u32) -> Result<Language, StringTableError> {
        let config = LanguageRegistry::get().select(selector)?;
        Ok(Language { code: config.code })
    }

    /// Get the canonical language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built through `from_code`, `from_selector` or the
    /// constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn selector(&self) -> u32 {
        self.config().selector
    }

    pub fn code_page(&self) -> CodePage {
        self.config().code_page
    }

    /// Compiled string table for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Language {
    type Err = StringTableError;

    /// Parses either a language code ("tr") or a selector value ("2").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<u32>() {
            Ok(selector) => Language::from_selector(selector),
            Err(_) => Language::from_code(trimmed),
        }
    }
}

/// "tr_TR.UTF-8" -> "tr", "EN-us" -> "en"
fn primary_subtag(code: &str) -> String {
    code.trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
