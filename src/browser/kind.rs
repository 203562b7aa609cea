//! Entry classification: the static, ordered table of known extensions and
//! the application each known kind launches.

/// A file category the device knows how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownKind {
    IButton,
    Nfc,
    SubGhz,
    LfRfid,
    Infrared,
}

impl KnownKind {
    /// Lookup order for classification. First match wins.
    pub const ALL: [KnownKind; 5] = [
        KnownKind::IButton,
        KnownKind::Nfc,
        KnownKind::SubGhz,
        KnownKind::LfRfid,
        KnownKind::Infrared,
    ];

    /// File extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            KnownKind::IButton => ".ibtn",
            KnownKind::Nfc => ".nfc",
            KnownKind::SubGhz => ".sub",
            KnownKind::LfRfid => ".rfid",
            KnownKind::Infrared => ".ir",
        }
    }

    /// Name of the application that opens this kind.
    pub fn app_name(self) -> &'static str {
        match self {
            KnownKind::IButton => "iButton",
            KnownKind::Nfc => "NFC",
            KnownKind::SubGhz => "Sub-GHz",
            KnownKind::LfRfid => "125 kHz RFID",
            KnownKind::Infrared => "Infrared",
        }
    }

    /// Well-known directory where originals of this kind live.
    pub fn default_root(self) -> &'static str {
        match self {
            KnownKind::IButton => "/any/ibutton",
            KnownKind::Nfc => "/any/nfc",
            KnownKind::SubGhz => "/any/subghz/saved",
            KnownKind::LfRfid => "/any/lfrfid",
            KnownKind::Infrared => "/any/irda",
        }
    }
}

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Known(KnownKind),
    Folder,
    Unknown,
}

impl FileKind {
    /// Classify an entry by name suffix, falling back to the directory flag.
    pub fn classify(name: &str, is_dir: bool) -> Self {
        KnownKind::ALL
            .iter()
            .find(|kind| name.ends_with(kind.extension()))
            .map(|kind| FileKind::Known(*kind))
            .unwrap_or(if is_dir {
                FileKind::Folder
            } else {
                FileKind::Unknown
            })
    }

    pub fn known(self) -> Option<KnownKind> {
        match self {
            FileKind::Known(kind) => Some(kind),
            _ => None,
        }
    }

    /// Whether a known application can open this entry.
    pub fn is_known_app(self) -> bool {
        self.known().is_some()
    }

    pub fn is_folder(self) -> bool {
        self == FileKind::Folder
    }
}

/// Strip the extension from `name`, cutting at the last `.`.
///
/// A leading dot is kept so hidden names never collapse to an empty string.
pub fn trim_known_ext(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}
