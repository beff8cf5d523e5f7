//! Display strings of the FreeDOS TUI shell.
//!
//! Each language is a complete table over a closed set of [`StringKey`]s.
//! Tables are selected by the shell's numeric `LANGUAGE` value, built once at
//! startup, and read-only afterwards.

pub mod config;
pub mod error;
pub mod i18n;

pub use error::StringTableError;
pub use i18n::{Language, LocalizedStringTable, StringKey};
