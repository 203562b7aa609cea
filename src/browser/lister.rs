//! Directory Lister: one storage enumeration turned into a filtered, capped,
//! ordered listing.

use crate::error::{AppError, Result};
use crate::storage::Storage;

use super::kind::FileKind;
use super::tabs::WILDCARD;

/// Default cap on the number of entries kept per listing.
pub const DEFAULT_MAX_FILES: usize = 100;
/// Default size of the name buffer, in bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 255;

/// One listed entry. Favorite status is deliberately absent; it is probed on
/// demand through the favorites adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub kind: FileKind,
}

/// Size limits applied while listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimits {
    pub max_files: usize,
    pub max_name_len: usize,
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

/// The entries of the open directory plus the cursor over them.
///
/// Replaced as a whole on every rescan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<FileEntry>,
    pub selected_index: usize,
    pub scroll_offset: usize,
}

impl Listing {
    pub fn new(entries: Vec<FileEntry>) -> Self {
        Self {
            entries,
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry under the cursor, if the listing is non-empty.
    pub fn selected(&self) -> Option<&FileEntry> {
        self.entries.get(self.selected_index)
    }

    /// Clamp `index` into `[0, len - 1]`, or 0 when empty.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.len().saturating_sub(1))
    }

    /// Re-establish `selected_index < max(1, len)`.
    pub fn clamp_selection(&mut self) {
        self.selected_index = self.clamp_index(self.selected_index);
    }
}

/// Whether an entry passes the tab filter. Directories always pass so the
/// user can descend regardless of the tab's file type.
pub fn accepts(filter: &str, name: &str, is_dir: bool) -> bool {
    filter == WILDCARD || name.contains(filter) || is_dir
}

/// Cut `name` to at most `max_len` bytes without splitting a character.
fn truncate_name(mut name: String, max_len: usize) -> String {
    if name.len() > max_len {
        let mut cut = max_len;
        while !name.is_char_boundary(cut) {
            cut -= 1;
        }
        name.truncate(cut);
    }
    name
}

/// List `path` through `storage`, keeping entries accepted by `filter`.
///
/// Enumeration stops once `limits.max_files` entries were accepted. Any
/// failure, at open time or mid-enumeration, yields
/// `AppError::DirectoryUnavailable` and discards what was read so far.
pub fn list(
    storage: &dyn Storage,
    path: &str,
    filter: &str,
    limits: ListLimits,
) -> Result<Listing> {
    let dir = storage
        .read_dir(path)
        .map_err(|e| AppError::unavailable(path, e))?;

    let mut entries = Vec::new();
    for raw in dir {
        if entries.len() >= limits.max_files {
            break;
        }
        let raw = raw.map_err(|e| AppError::unavailable(path, e))?;
        let name = truncate_name(raw.name, limits.max_name_len);
        if !accepts(filter, &name, raw.is_dir) {
            continue;
        }
        let kind = FileKind::classify(&name, raw.is_dir);
        entries.push(FileEntry { name, kind });
    }

    log::debug!("listed {} ({} entries, filter {})", path, entries.len(), filter);
    Ok(Listing::new(entries))
}
