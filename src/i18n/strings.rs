use crate::i18n::StringKey;

/// All display strings of the shell for one language.
///
/// Every field must be filled in for a table to compile, and `get` matches
/// every key, so a missing translation is a build error rather than a
/// runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStrings {
    // ==================== Navigation ====================
    pub back: &'static str,
    pub forward: &'static str,
    pub up: &'static str,
    pub go: &'static str,

    // ==================== Sorting ====================
    pub sort: &'static str,
    pub by_date: &'static str,
    pub by_name: &'static str,
    pub by_size: &'static str,
    pub by_type: &'static str,

    // ==================== File Operations ====================
    pub file: &'static str,
    pub open: &'static str,
    pub edit: &'static str,
    pub copy: &'static str,
    pub cut: &'static str,
    pub paste: &'static str,
    pub delete: &'static str,
    pub new_directory: &'static str,

    /// Prompt label of the new-directory dialog (keeps its trailing colon)
    pub directory_name: &'static str,

    // ==================== View Menu ====================
    pub view: &'static str,
    pub refresh: &'static str,
    pub show_hidden_files: &'static str,

    // ==================== Shell Menus ====================
    /// Title of the file manager window
    pub file_manager: &'static str,
    pub dos_applications: &'static str,
    pub internal_applications: &'static str,
    pub exit: &'static str,
    pub quit: &'static str,
    pub poweroff_computer: &'static str,
    pub reboot_computer: &'static str,

    // ==================== Status Messages ====================
    /// Printed when the TUI system fails to start
    pub unable_to_initialize_system: &'static str,
}

impl LanguageStrings {
    /// Look up the string for `key`.
    pub fn get(&self, key: StringKey) -> &'static str {
        match key {
            StringKey::Back => self.back,
            StringKey::ByDate => self.by_date,
            StringKey::ByName => self.by_name,
            StringKey::BySize => self.by_size,
            StringKey::ByType => self.by_type,
            StringKey::Copy => self.copy,
            StringKey::Cut => self.cut,
            StringKey::Delete => self.delete,
            StringKey::DirectoryName => self.directory_name,
            StringKey::DosApplications => self.dos_applications,
            StringKey::Edit => self.edit,
            StringKey::Exit => self.exit,
            StringKey::File => self.file,
            StringKey::FileManager => self.file_manager,
            StringKey::Forward => self.forward,
            StringKey::Go => self.go,
            StringKey::InternalApplications => self.internal_applications,
            StringKey::NewDirectory => self.new_directory,
            StringKey::Open => self.open,
            StringKey::Paste => self.paste,
            StringKey::PoweroffComputer => self.poweroff_computer,
            StringKey::Quit => self.quit,
            StringKey::RebootComputer => self.reboot_computer,
            StringKey::Refresh => self.refresh,
            StringKey::ShowHiddenFiles => self.show_hidden_files,
            StringKey::Sort => self.sort,
            StringKey::UnableToInitializeSystem => self.unable_to_initialize_system,
            StringKey::Up => self.up,
            StringKey::View => self.view,
        }
    }
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    back: "Back",
    forward: "Forward",
    up: "Up",
    go: "Go",

    sort: "Sort",
    by_date: "By Date",
    by_name: "By Name",
    by_size: "By Size",
    by_type: "By Type",

    file: "File",
    open: "Open",
    edit: "Edit",
    copy: "Copy",
    cut: "Cut",
    paste: "Paste",
    delete: "Delete",
    new_directory: "New Directory",
    directory_name: "Directory Name:",

    view: "View",
    refresh: "Refresh",
    show_hidden_files: "Show Hidden Files",

    file_manager: "File Manager",
    dos_applications: "DOS Applications",
    internal_applications: "Internal Applications",
    exit: "Exit",
    quit: "Quit",
    poweroff_computer: "Power Off",
    reboot_computer: "Reboot",

    unable_to_initialize_system: "Unable to initialize FDOSTUI system.",
};

// ==================== Turkish Strings ====================

/// Turkish language strings
///
/// Stored as UTF-8. The DOS build renders them through code page 857.
pub const TURKISH_STRINGS: LanguageStrings = LanguageStrings {
    back: "Geri",
    forward: "İleri",
    up: "Yukarı",
    go: "Git",

    sort: "Sırala",
    by_date: "Tarihe Göre",
    by_name: "İsme Göre",
    by_size: "Boyuta Göre",
    by_type: "Türe Göre",

    file: "Dosya",
    open: "Aç",
    edit: "Düzenle",
    copy: "Kopyala",
    cut: "Kes",
    paste: "Yapıştır",
    delete: "Sil",
    new_directory: "Yeni Dizin",
    directory_name: "Dizin İsmi:",

    view: "Görünüm",
    refresh: "Yenile",
    show_hidden_files: "Gizli Dosyaları Göster",

    file_manager: "Dosya Yöneticisi",
    dos_applications: "DOS Uygulamaları",
    internal_applications: "İç Uygulamalar",
    exit: "Çıkış",
    quit: "Çıkış",
    poweroff_computer: "Kapat",
    reboot_computer: "Yeniden Başlat",

    unable_to_initialize_system: "FDOSTUI sistemi başlatılamadı.",
};
