//! Legacy DOS code pages used by the shell's language headers.
//!
//! Headers are stored as raw single-byte text. Everything is normalized to
//! UTF-8 at load time and only encoded back when a header is written out.
//! The lower half (0x00..=0x7F) of both code pages is ASCII.

use crate::error::StringTableError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A single-byte OEM code page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodePage {
    /// DOS United States (OEM-US)
    Cp437,
    /// DOS Turkish
    Cp857,
}

const UNDEFINED: char = '\u{FFFD}';

// 0x80..=0xFF of CP437
const CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç',
    'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù',
    'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º',
    '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖',
    '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟',
    '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫',
    '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ',
    'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈',
    '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

// 0x80..=0xFF of CP857
const CP857_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç',
    'ê', 'ë', 'è', 'ï', 'î', 'ı', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù',
    'İ', 'Ö', 'Ü', 'ø', '£', 'Ø', 'Ş', 'ş',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'Ğ', 'ğ',
    '¿', '®', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', 'Á', 'Â', 'À',
    '©', '╣', '║', '╗', '╝', '¢', '¥', '┐',
    '└', '┴', '┬', '├', '─', '┼', 'ã', 'Ã',
    '╚', '╔', '╩', '╦', '╠', '═', '╬', '¤',
    'º', 'ª', 'Ê', 'Ë', 'È', UNDEFINED, 'Í', 'Î',
    'Ï', '┘', '┌', '█', '▄', '¦', 'Ì', '▀',
    'Ó', 'ß', 'Ô', 'Ò', 'õ', 'Õ', 'µ', UNDEFINED,
    '×', 'Ú', 'Û', 'Ù', 'ì', 'ÿ', '¯', '´',
    '\u{ad}', '±', UNDEFINED, '¾', '¶', '§', '÷', '¸',
    '°', '¨', '·', '¹', '³', '²', '■', '\u{a0}',
];

impl CodePage {
    /// Canonical lowercase name, e.g. "cp857".
    pub fn name(&self) -> &'static str {
        match self {
            CodePage::Cp437 => "cp437",
            CodePage::Cp857 => "cp857",
        }
    }

    fn high_half(&self) -> &'static [char; 128] {
        match self {
            CodePage::Cp437 => &CP437_HIGH,
            CodePage::Cp857 => &CP857_HIGH,
        }
    }

    /// Map a single byte to its character, or `None` if the byte is unassigned.
    pub fn decode_byte(&self, byte: u8) -> Option<char> {
        if byte.is_ascii() {
            return Some(byte as char);
        }
        match self.high_half()[usize::from(byte - 0x80)] {
            UNDEFINED => None,
            ch => Some(ch),
        }
    }

    /// Map a character to its byte, or `None` if the code page lacks it.
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        if ch.is_ascii() {
            return Some(ch as u8);
        }
        self.high_half()
            .iter()
            .position(|&c| c == ch && c != UNDEFINED)
            .map(|i| 0x80 + i as u8)
    }

    /// Decode legacy bytes into UTF-8.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, StringTableError> {
        bytes
            .iter()
            .enumerate()
            .map(|(offset, &byte)| {
                self.decode_byte(byte)
                    .ok_or(StringTableError::UndefinedByte {
                        code_page: *self,
                        byte,
                        offset,
                    })
            })
            .collect()
    }

    /// Encode UTF-8 text into legacy bytes.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, StringTableError> {
        text.chars()
            .map(|ch| {
                self.encode_char(ch).ok_or(StringTableError::Unencodable {
                    code_page: *self,
                    ch,
                })
            })
            .collect()
    }

    /// Whether every character of `text` exists in this code page.
    pub fn can_encode(&self, text: &str) -> bool {
        text.chars().all(|ch| self.encode_char(ch).is_some())
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodePage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let digits = normalized
            .trim_start_matches("cp")
            .trim_start_matches("ibm")
            .trim_start_matches('-');
        match digits {
            "437" => Ok(CodePage::Cp437),
            "857" => Ok(CodePage::Cp857),
            _ => anyhow::bail!("Unsupported code page: '{}'", s),
        }
    }
}
