use crate::i18n::{load_header_file, CodePage, Language, LocalizedStringTable};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Active language (the `LANGUAGE` selector of the legacy build)
    pub language: Language,

    /// Legacy language header to load instead of the built-in table
    pub strings_file: Option<PathBuf>,

    /// Code page of `strings_file`, when it cannot be inferred from its gate
    pub code_page: Option<CodePage>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_language(None)
    }

    /// Like [`Config::from_env`], but `language` (when given) takes the place
    /// of FDOSTUI_LANGUAGE and the variable is never read.
    pub fn from_env_with_language(language: Option<&str>) -> Result<Self> {
        Self::from_lookup_with_language(language, |name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_language(None, var)
    }

    pub fn from_lookup_with_language<F>(language: Option<&str>, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let language = match language {
            Some(value) => value
                .parse::<Language>()
                .with_context(|| format!("Invalid language override '{}'", value))?,
            None => match non_empty(var("FDOSTUI_LANGUAGE")) {
                Some(value) => value
                    .parse::<Language>()
                    .with_context(|| format!("FDOSTUI_LANGUAGE has an invalid value '{}'", value))?,
                None => detect_system_language().unwrap_or_else(Language::canonical),
            },
        };

        let strings_file = non_empty(var("FDOSTUI_STRINGS_FILE")).map(PathBuf::from);

        let code_page = non_empty(var("FDOSTUI_CODE_PAGE"))
            .map(|value| value.parse::<CodePage>())
            .transpose()
            .context("FDOSTUI_CODE_PAGE is invalid")?;

        Ok(Self {
            language,
            strings_file,
            code_page,
        })
    }

    /// Build the string table for the configured language.
    pub fn string_table(&self) -> Result<LocalizedStringTable> {
        let Some(path) = &self.strings_file else {
            info!(language = self.language.code(), "Using built-in string table");
            return Ok(LocalizedStringTable::builtin(self.language));
        };

        match load_header_file(path, self.language, self.code_page)? {
            Some(table) => Ok(table),
            None => bail!(
                "String file {} does not define strings for language '{}'",
                path.display(),
                self.language
            ),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Guess the language from the OS locale.
fn detect_system_language() -> Option<Language> {
    let locale = sys_locale::get_locale()?;
    let language = Language::from_code(&locale).ok();
    debug!(locale = %locale, detected = ?language, "Detected system locale");
    language
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{render_header, StringKey};
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_language_by_code() {
        let config = Config::from_lookup(lookup_from(&[("FDOSTUI_LANGUAGE", "tr")])).unwrap();
        assert_eq!(config.language, Language::TURKISH);
        assert_eq!(config.strings_file, None);
        assert_eq!(config.code_page, None);
    }

    #[test]
    fn test_language_by_selector() {
        let config = Config::from_lookup(lookup_from(&[("FDOSTUI_LANGUAGE", "2")])).unwrap();
        assert_eq!(config.language, Language::TURKISH);
    }

    #[test]
    fn test_invalid_language_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("FDOSTUI_LANGUAGE", "xx")])).unwrap_err();
        assert!(err.to_string().contains("FDOSTUI_LANGUAGE"));
    }

    #[test]
    fn test_blank_language_falls_back_to_detection() {
        let config = Config::from_lookup(lookup_from(&[("FDOSTUI_LANGUAGE", "  ")])).unwrap();
        assert!(config.language.config().enabled);
    }

    #[test]
    fn test_language_override_skips_invalid_env() {
        let config = Config::from_lookup_with_language(
            Some("tr"),
            lookup_from(&[("FDOSTUI_LANGUAGE", "xx"), ("FDOSTUI_CODE_PAGE", "857")]),
        )
        .unwrap();
        assert_eq!(config.language, Language::TURKISH);
        assert_eq!(config.code_page, Some(CodePage::Cp857));
    }

    #[test]
    fn test_invalid_language_override() {
        let err = Config::from_lookup_with_language(Some("xx"), lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("language override 'xx'"));
    }

    #[test]
    fn test_strings_file_and_code_page() {
        let config = Config::from_lookup(lookup_from(&[
            ("FDOSTUI_LANGUAGE", "tr"),
            ("FDOSTUI_STRINGS_FILE", "lang/tr.h"),
            ("FDOSTUI_CODE_PAGE", "cp857"),
        ]))
        .unwrap();
        assert_eq!(config.strings_file, Some(PathBuf::from("lang/tr.h")));
        assert_eq!(config.code_page, Some(CodePage::Cp857));
    }

    #[test]
    fn test_invalid_code_page() {
        let err = Config::from_lookup(lookup_from(&[
            ("FDOSTUI_LANGUAGE", "tr"),
            ("FDOSTUI_CODE_PAGE", "utf-16"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("FDOSTUI_CODE_PAGE"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var("FDOSTUI_LANGUAGE", "tr");
        std::env::remove_var("FDOSTUI_STRINGS_FILE");
        std::env::remove_var("FDOSTUI_CODE_PAGE");

        let config = Config::from_env().unwrap();
        assert_eq!(config.language, Language::TURKISH);

        std::env::remove_var("FDOSTUI_LANGUAGE");
    }

    // ==================== Table Loading Tests ====================

    #[test]
    fn test_string_table_builtin() {
        let config = Config {
            language: Language::TURKISH,
            strings_file: None,
            code_page: None,
        };
        let table = config.string_table().unwrap();
        assert_eq!(table.lookup(StringKey::Delete), "Sil");
    }

    #[test]
    fn test_string_table_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tr.h");
        let builtin = LocalizedStringTable::builtin(Language::TURKISH);
        std::fs::write(&path, render_header(&builtin).unwrap()).unwrap();

        let config = Config {
            language: Language::TURKISH,
            strings_file: Some(path),
            code_page: None,
        };
        assert_eq!(config.string_table().unwrap(), builtin);
    }

    #[test]
    fn test_string_table_file_for_other_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tr.h");
        let builtin = LocalizedStringTable::builtin(Language::TURKISH);
        std::fs::write(&path, render_header(&builtin).unwrap()).unwrap();

        let config = Config {
            language: Language::ENGLISH,
            strings_file: Some(path),
            code_page: None,
        };
        let err = config.string_table().unwrap_err();
        assert!(err.to_string().contains("does not define strings"));
    }
}
