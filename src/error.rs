//! Error taxonomy for building and loading string tables.
//!
//! Lookups on a constructed table never fail. Every variant here is raised
//! while a table is being built, loaded from a resource, or written back out.

use crate::i18n::CodePage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringTableError {
    /// A key of the closed enumeration has no value in the table being built.
    #[error("language '{language}' has no translation for {key}")]
    MissingTranslationKey {
        language: &'static str,
        key: &'static str,
    },

    #[error("{key} is defined more than once (line {line})")]
    DuplicateKey { key: &'static str, line: usize },

    #[error("{key} has an empty value")]
    EmptyValue { key: &'static str },

    /// A `STRING_*` name outside the closed key set.
    #[error("unknown string key '{name}' (line {line})")]
    UnknownKey { name: String, line: usize },

    /// A key name given outside any header, e.g. on the command line.
    #[error("unknown string key '{0}'")]
    UnknownKeyName(String),

    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("language '{0}' is not enabled")]
    LanguageDisabled(String),

    #[error("no language is registered for selector {0}")]
    UnknownSelector(u32),

    #[error("byte 0x{byte:02X} at offset {offset} is undefined in {code_page}")]
    UndefinedByte {
        code_page: CodePage,
        byte: u8,
        offset: usize,
    },

    #[error("character {ch:?} cannot be encoded in {code_page}")]
    Unencodable { code_page: CodePage, ch: char },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}
