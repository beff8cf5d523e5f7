//! Translation quality validation module.
//!
//! Compares a language table with the canonical one and flags strings that
//! would render badly in the DOS shell: characters missing from the code
//! page, control characters, stray whitespace, punctuation that differs from
//! the canonical label, and labels too wide for a menu.

use crate::i18n::{CodePage, Language, LocalizedStringTable, StringKey};
use regex::Regex;
use std::sync::OnceLock;

/// Widest label, in character cells, that fits a shell menu.
pub const MAX_LABEL_WIDTH: usize = 40;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that corrupt or break the displayed text
    pub errors: Vec<String>,

    /// Cosmetic issues worth a look
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
#[derive(Debug, Clone, Copy)]
pub struct TranslationValidator;

static CONTROL_REGEX: OnceLock<Regex> = OnceLock::new();
static TERMINAL_PUNCT_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every string of `table` against the canonical language.
    pub fn validate(table: &LocalizedStringTable) -> ValidationReport {
        let canonical = Language::canonical().strings();
        let code_page = table.language().code_page();

        let mut report = ValidationReport::new();
        for (key, text) in table.iter() {
            report.merge(Self::validate_text(key, canonical.get(key), text, code_page));
        }
        report
    }

    /// Validate a single string against its canonical counterpart.
    pub fn validate_text(
        key: StringKey,
        reference: &str,
        text: &str,
        code_page: CodePage,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        if text.is_empty() {
            report.errors.push(format!("{}: empty value", key));
            return report;
        }

        let unencodable: Vec<char> = text
            .chars()
            .filter(|ch| code_page.encode_char(*ch).is_none())
            .collect();
        if !unencodable.is_empty() {
            report.errors.push(format!(
                "{}: characters {:?} are not in {}",
                key, unencodable, code_page
            ));
        }

        let control = CONTROL_REGEX.get_or_init(|| Regex::new(r"\p{Cc}").unwrap());
        if control.is_match(text) {
            report
                .errors
                .push(format!("{}: contains control characters", key));
        }

        if text.trim() != text {
            report
                .warnings
                .push(format!("{}: leading or trailing whitespace", key));
        }

        let orig_punct = Self::terminal_punctuation(reference);
        let trans_punct = Self::terminal_punctuation(text);
        if orig_punct != trans_punct {
            report.warnings.push(format!(
                "{}: punctuation mismatch: original ends with {:?}, translation ends with {:?}",
                key, orig_punct, trans_punct
            ));
        }

        let width = text.chars().count();
        if width > MAX_LABEL_WIDTH {
            report.warnings.push(format!(
                "{}: {} cells wide, menus fit {}",
                key, width, MAX_LABEL_WIDTH
            ));
        }

        report
    }

    /// Trailing ':' '.' or '…', if any
    fn terminal_punctuation(text: &str) -> Option<String> {
        let regex = TERMINAL_PUNCT_REGEX.get_or_init(|| Regex::new(r"[:.…]+$").unwrap());

        regex
            .find(text.trim_end())
            .map(|m| m.as_str().to_string())
    }
}
