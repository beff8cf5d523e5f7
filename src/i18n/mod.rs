//! Internationalization (i18n) module for the shell's display strings.
//!
//! # Architecture
//!
//! - `key`: closed `StringKey` enumeration shared by every language
//! - `strings`: compiled per-language tables (`LanguageStrings`)
//! - `registry`: supported languages, their selector values and code pages
//! - `language`: validated `Language` handle
//! - `codepage`: DOS code page transcoding
//! - `table`: `LocalizedStringTable`, the runtime lookup structure
//! - `resource`: legacy language header files and JSON export
//! - `validator`: translation quality checks
//! - `metrics`: lookup and load counters
//!
//! # Example
//!
//! ```rust
//! use fdostui_strings::i18n::{Language, LocalizedStringTable, StringKey};
//!
//! let turkish = Language::from_selector(2)?;
//! let table = LocalizedStringTable::builtin(turkish);
//! assert_eq!(table.lookup(StringKey::Delete), "Sil");
//! # Ok::<(), fdostui_strings::StringTableError>(())
//! ```

mod codepage;
mod key;
mod language;
mod metrics;
mod registry;
pub mod resource;
mod strings;
mod table;
mod validator;

pub use codepage::CodePage;
pub use key::StringKey;
pub use language::Language;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resource::{load_header_file, render_header, to_json, LegacyHeader};
pub use strings::{LanguageStrings, ENGLISH_STRINGS, TURKISH_STRINGS};
pub use table::LocalizedStringTable;
pub use validator::{TranslationValidator, ValidationReport, MAX_LABEL_WIDTH};
