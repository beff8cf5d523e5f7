//! Legacy language header files.
//!
//! The DOS shell shipped one C header per language:
//!
//! ```text
//! #define TR 2
//!
//! #if LANGUAGE == TR
//!    #define STRING_BACK "Geri"
//!    ...
//! #endif
//! ```
//!
//! Headers are raw bytes in the language's DOS code page. They are decoded to
//! UTF-8 at load time and turned into a [`LocalizedStringTable`]. A header
//! whose gate names a different language than the active one contributes
//! nothing.

use crate::error::StringTableError;
use crate::i18n::{CodePage, Language, LanguageRegistry, LocalizedStringTable, LookupMetrics, StringKey};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

static SELECTOR_REGEX: OnceLock<Regex> = OnceLock::new();
static GATE_REGEX: OnceLock<Regex> = OnceLock::new();
static ENDIF_REGEX: OnceLock<Regex> = OnceLock::new();
static STRING_REGEX: OnceLock<Regex> = OnceLock::new();
static STRING_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn selector_regex() -> &'static Regex {
    SELECTOR_REGEX
        .get_or_init(|| Regex::new(r"^#\s*define\s+([A-Z][A-Z0-9_]*)\s+(\d+)$").unwrap())
}

fn gate_regex() -> &'static Regex {
    GATE_REGEX.get_or_init(|| Regex::new(r"^#\s*if\s+LANGUAGE\s*==\s*([A-Z][A-Z0-9_]*)$").unwrap())
}

fn endif_regex() -> &'static Regex {
    ENDIF_REGEX.get_or_init(|| Regex::new(r"^#\s*endif\b").unwrap())
}

fn string_regex() -> &'static Regex {
    STRING_REGEX.get_or_init(|| {
        Regex::new(r#"^#\s*define\s+(STRING_[A-Z0-9_]+)\s+"((?:[^"\\]|\\.)*)"$"#).unwrap()
    })
}

/// Any `#define STRING_*`, quoted or not.
fn string_name_regex() -> &'static Regex {
    STRING_NAME_REGEX.get_or_init(|| Regex::new(r"^#\s*define\s+(STRING_[A-Z0-9_]*)\b").unwrap())
}

/// One `#define STRING_* "..."` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub key: StringKey,
    pub value: String,
    /// 1-based source line
    pub line: usize,
}

/// A parsed (UTF-8) language header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyHeader {
    /// Selector constant named by the gate (e.g., "TR")
    pub selector_name: String,
    /// Value of that constant (e.g., 2)
    pub selector: u32,
    pub entries: Vec<HeaderEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Before,
    Inside,
    After,
}

impl LegacyHeader {
    /// Parse header text that has already been decoded to UTF-8.
    ///
    /// The gate's selector constant is resolved when the `#if` line is read,
    /// from an earlier `#define` in the header or, failing that, through the
    /// language registry. Only string definitions may appear inside the gate.
    pub fn parse(text: &str) -> Result<Self, StringTableError> {
        let mut defines: HashMap<String, u32> = HashMap::new();
        let mut gate: Option<(String, u32)> = None;
        let mut state = GateState::Before;
        let mut entries: Vec<HeaderEntry> = Vec::new();
        let mut seen: HashMap<StringKey, usize> = HashMap::new();
        let mut in_comment = false;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let code = strip_comments(raw, &mut in_comment);
            let code = code.trim();
            if code.is_empty() {
                continue;
            }

            if let Some(caps) = string_regex().captures(code) {
                if state != GateState::Inside {
                    return Err(parse_error(line, "string definition outside the language gate"));
                }
                let key = known_key(&caps[1], line)?;
                if seen.insert(key, line).is_some() {
                    return Err(StringTableError::DuplicateKey {
                        key: key.legacy_name(),
                        line,
                    });
                }
                let value = unescape(&caps[2]).map_err(|message| parse_error(line, message))?;
                entries.push(HeaderEntry { key, value, line });
            } else if let Some(caps) = string_name_regex().captures(code) {
                if state != GateState::Inside {
                    return Err(parse_error(line, "string definition outside the language gate"));
                }
                let key = known_key(&caps[1], line)?;
                return Err(parse_error(
                    line,
                    format!("{} must be defined as a quoted string", key.legacy_name()),
                ));
            } else if let Some(caps) = selector_regex().captures(code) {
                if state == GateState::Inside {
                    return Err(parse_error(line, "selector definition inside the language gate"));
                }
                let value = caps[2]
                    .parse::<u32>()
                    .map_err(|_| parse_error(line, "selector value out of range"))?;
                defines.insert(caps[1].to_string(), value);
            } else if let Some(caps) = gate_regex().captures(code) {
                if state != GateState::Before {
                    return Err(parse_error(line, "more than one language gate"));
                }
                let name = caps[1].to_string();
                let selector = match defines.get(&name) {
                    Some(value) => *value,
                    None => LanguageRegistry::get()
                        .get_by_selector_name(&name)
                        .map(|config| config.selector)
                        .ok_or_else(|| {
                            parse_error(line, format!("selector {} is never defined", name))
                        })?,
                };
                gate = Some((name, selector));
                state = GateState::Inside;
            } else if endif_regex().is_match(code) {
                if state != GateState::Inside {
                    return Err(parse_error(line, "#endif without a language gate"));
                }
                state = GateState::After;
            } else {
                return Err(parse_error(line, format!("unrecognized directive: {}", code)));
            }
        }

        let last_line = text.lines().count();
        if in_comment {
            return Err(parse_error(last_line, "unterminated comment"));
        }
        let (selector_name, selector) = match (gate, state) {
            (Some(gate), GateState::After) => gate,
            (Some(_), _) => return Err(parse_error(last_line, "missing #endif")),
            (None, _) => return Err(parse_error(last_line, "no `#if LANGUAGE == ...` gate")),
        };

        Ok(Self {
            selector_name,
            selector,
            entries,
        })
    }

    /// Decode legacy bytes in `code_page`, then parse.
    pub fn decode(bytes: &[u8], code_page: CodePage) -> Result<Self, StringTableError> {
        let text = code_page.decode(bytes)?;
        Self::parse(&text)
    }

    /// Build the table for `active`, or `None` if the gate selects another language.
    pub fn into_table(self, active: Language) -> Result<Option<LocalizedStringTable>, StringTableError> {
        if self.selector != active.selector() {
            debug!(
                header_selector = self.selector,
                active_selector = active.selector(),
                "Language gate does not match, header contributes no strings"
            );
            return Ok(None);
        }
        let entries = self.entries.into_iter().map(|e| (e.key, e.value));
        LocalizedStringTable::from_entries(active, entries).map(Some)
    }
}

/// Load a header file for the active language.
///
/// The code page is `code_page` if given, otherwise the code page registered
/// for the language the header's gate selects.
pub fn load_header_file(
    path: &Path,
    active: Language,
    code_page: Option<CodePage>,
) -> Result<Option<LocalizedStringTable>> {
    let metrics = LookupMetrics::global();
    let result = read_header_file(path, active, code_page);
    match &result {
        Ok(Some(table)) => {
            metrics.record_resource_load();
            info!(
                path = %path.display(),
                language = table.language().code(),
                strings = table.len(),
                "Loaded string table"
            );
        }
        Ok(None) => {
            warn!(
                path = %path.display(),
                language = active.code(),
                "String file is gated on another language"
            );
        }
        Err(e) => {
            metrics.record_load_failure();
            warn!(path = %path.display(), "Failed to load string table: {:#}", e);
        }
    }
    result
}

fn read_header_file(
    path: &Path,
    active: Language,
    code_page: Option<CodePage>,
) -> Result<Option<LocalizedStringTable>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read string file {}", path.display()))?;

    let code_page = code_page
        .or_else(|| sniff_code_page(&bytes))
        .unwrap_or_else(|| active.code_page());
    debug!(code_page = %code_page, "Decoding string file");

    let header = LegacyHeader::decode(&bytes, code_page)
        .with_context(|| format!("Invalid string file {}", path.display()))?;
    let table = header
        .into_table(active)
        .with_context(|| format!("Incomplete string file {}", path.display()))?;
    Ok(table)
}

/// Guess the code page from the gate's selector. Directives are plain ASCII,
/// so a lossy decode is enough to read them.
fn sniff_code_page(bytes: &[u8]) -> Option<CodePage> {
    let text = String::from_utf8_lossy(bytes);
    let gate = text
        .lines()
        .find_map(|line| gate_regex().captures(line.trim()).map(|c| c[1].to_string()))?;
    LanguageRegistry::get()
        .get_by_selector_name(&gate)
        .map(|config| config.code_page)
}

/// Write `table` as a legacy header in its language's code page.
pub fn render_header(table: &LocalizedStringTable) -> Result<Vec<u8>, StringTableError> {
    let config = table.language().config();
    let title = format!(" * FreeDOS TUI Shell {} Language Header File *", config.name);
    let width = title.chars().count();

    let mut out = String::new();
    out.push('/');
    out.push_str(&"*".repeat(width - 1));
    out.push('\n');
    out.push_str(&title);
    out.push_str("\n ");
    out.push_str(&"*".repeat(width - 2));
    out.push_str("/\n\n");

    out.push_str(&format!("#define {} {}\n\n", config.selector_name, config.selector));
    out.push_str(&format!("#if LANGUAGE == {}\n", config.selector_name));
    for (key, value) in table.iter() {
        out.push_str(&format!("   #define {} \"{}\"\n", key.legacy_name(), escape(value)));
    }
    out.push_str("#endif\n");

    config.code_page.encode(&out)
}

#[derive(Debug, Serialize)]
struct TableExport<'a> {
    language: Language,
    code_page: CodePage,
    strings: BTreeMap<StringKey, &'a str>,
}

/// Export `table` as pretty-printed UTF-8 JSON keyed by string id.
pub fn to_json(table: &LocalizedStringTable) -> serde_json::Result<String> {
    let export = TableExport {
        language: table.language(),
        code_page: table.language().code_page(),
        strings: table.iter().collect(),
    };
    serde_json::to_string_pretty(&export)
}

fn known_key(name: &str, line: usize) -> Result<StringKey, StringTableError> {
    StringKey::from_legacy_name(name).ok_or_else(|| StringTableError::UnknownKey {
        name: name.to_string(),
        line,
    })
}

fn parse_error(line: usize, message: impl Into<String>) -> StringTableError {
    StringTableError::Parse {
        line,
        message: message.into(),
    }
}

/// Remove `/* */` and `//` comments, tracking block comments across lines.
fn strip_comments(line: &str, in_comment: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        if *in_comment {
            match rest.find("*/") {
                Some(end) => {
                    rest = &rest[end + 2..];
                    *in_comment = false;
                }
                None => return out,
            }
        } else {
            let block = find_outside_quotes(rest, "/*");
            let line_comment = find_outside_quotes(rest, "//");
            match (block, line_comment) {
                (Some(b), Some(l)) if l < b => {
                    out.push_str(&rest[..l]);
                    return out;
                }
                (Some(b), _) => {
                    out.push_str(&rest[..b]);
                    rest = &rest[b + 2..];
                    *in_comment = true;
                }
                (None, Some(l)) => {
                    out.push_str(&rest[..l]);
                    return out;
                }
                (None, None) => {
                    out.push_str(rest);
                    return out;
                }
            }
        }
    }
}

fn find_outside_quotes(text: &str, needle: &str) -> Option<usize> {
    let mut in_string = false;
    let mut escaped = false;
    for (i, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if ch == '"' {
            in_string = true;
        } else if text[i..].starts_with(needle) {
            return Some(i);
        }
    }
    None
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(format!("unsupported escape \\{}", other)),
            None => return Err("dangling backslash".to_string()),
        }
    }
    Ok(out)
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
