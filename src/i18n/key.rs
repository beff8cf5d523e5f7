//! The closed set of string keys shared by every language table.
//!
//! Each key carries two names: the kebab-case id used by the CLI and the JSON
//! export, and the `STRING_*` macro name used by legacy language headers.
//! The legacy names keep their historical spelling (`STRING_FOWARD`,
//! `STRING_UNABLE_TO_INITIALZE_FDOSTUI_SYSTEM`) so existing headers still load.

use crate::error::StringTableError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

macro_rules! string_keys {
    ($($variant:ident => $id:literal, $legacy:literal;)+) => {
        /// A symbolic display string of the shell.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum StringKey {
            $($variant,)+
        }

        impl StringKey {
            /// Every key, in legacy header order.
            pub const ALL: &'static [StringKey] = &[$(StringKey::$variant,)+];

            /// Kebab-case identifier (e.g. "file-manager").
            pub fn id(&self) -> &'static str {
                match self {
                    $(StringKey::$variant => $id,)+
                }
            }

            /// Macro name in legacy headers (e.g. "STRING_FILE_MANAGER").
            pub fn legacy_name(&self) -> &'static str {
                match self {
                    $(StringKey::$variant => $legacy,)+
                }
            }
        }
    };
}

string_keys! {
    Back => "back", "STRING_BACK";
    ByDate => "by-date", "STRING_BY_DATE";
    ByName => "by-name", "STRING_BY_NAME";
    BySize => "by-size", "STRING_BY_SIZE";
    ByType => "by-type", "STRING_BY_TYPE";
    Copy => "copy", "STRING_COPY";
    Cut => "cut", "STRING_CUT";
    Delete => "delete", "STRING_DELETE";
    DirectoryName => "directory-name", "STRING_DIRECTORY_NAME";
    DosApplications => "dos-applications", "STRING_DOS_APPLICATIONS";
    Edit => "edit", "STRING_EDIT";
    Exit => "exit", "STRING_EXIT";
    File => "file", "STRING_FILE";
    FileManager => "file-manager", "STRING_FILE_MANAGER";
    Forward => "forward", "STRING_FOWARD";
    Go => "go", "STRING_GO";
    InternalApplications => "internal-applications", "STRING_INTERNAL_APPLICATIONS";
    NewDirectory => "new-directory", "STRING_NEW_DIRECTORY";
    Open => "open", "STRING_OPEN";
    Paste => "paste", "STRING_PASTE";
    PoweroffComputer => "poweroff-computer", "STRING_POWEROFF_COMPUTER";
    Quit => "quit", "STRING_QUIT";
    RebootComputer => "reboot-computer", "STRING_REBOOT_COMPUTER";
    Refresh => "refresh", "STRING_REFRESH";
    ShowHiddenFiles => "show-hidden-files", "STRING_SHOW_HIDDEN_FILES";
    Sort => "sort", "STRING_SORT";
    UnableToInitializeSystem => "unable-to-initialize-system", "STRING_UNABLE_TO_INITIALZE_FDOSTUI_SYSTEM";
    Up => "up", "STRING_UP";
    View => "view", "STRING_VIEW";
}

impl StringKey {
    /// Number of keys every complete table must define.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this key in `ALL`, usable as a dense array index.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Resolve a `STRING_*` macro name. Exact match only.
    pub fn from_legacy_name(name: &str) -> Option<StringKey> {
        Self::ALL.iter().copied().find(|k| k.legacy_name() == name)
    }

    /// Resolve a kebab-case id. Exact match only.
    pub fn from_id(id: &str) -> Option<StringKey> {
        Self::ALL.iter().copied().find(|k| k.id() == id)
    }
}

impl fmt::Display for StringKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StringKey {
    type Err = StringTableError;

    /// Accepts an id ("file-manager", "file_manager") or a legacy macro name
    /// ("STRING_FILE_MANAGER"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        if let Some(key) = Self::from_legacy_name(&upper) {
            return Ok(key);
        }
        let id = trimmed.to_ascii_lowercase().replace('_', "-");
        Self::from_id(&id).ok_or_else(|| StringTableError::UnknownKeyName(s.to_string()))
    }
}
