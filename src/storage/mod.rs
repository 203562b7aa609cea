//! Storage collaborator: the directory and file primitives the browser core
//! consumes. Paths are device paths (`/any/nfc/card.nfc`), always absolute and
//! separated by `/`.

pub mod local;

use std::io;

pub use local::LocalStorage;

/// One raw directory entry as reported by the storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub is_dir: bool,
}

impl RawEntry {
    pub fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_dir: false,
        }
    }

    pub fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_dir: true,
        }
    }
}

/// Open directory handle: yields entries one at a time until exhausted.
/// An `Err` item means the enumeration broke mid-way.
pub type DirIter<'a> = Box<dyn Iterator<Item = io::Result<RawEntry>> + 'a>;

/// Synchronous storage primitives. Every call blocks until the backend
/// answers; none of them has partial-success semantics.
pub trait Storage {
    /// Open `path` for enumeration.
    fn read_dir(&self, path: &str) -> io::Result<DirIter<'_>>;

    /// Probe `path`. `Ok` means the entry exists (file or directory).
    fn stat(&self, path: &str) -> io::Result<()>;

    /// Copy a file from `src` to `dst`, overwriting `dst`.
    fn copy(&self, src: &str, dst: &str) -> io::Result<()>;

    /// Remove a file or an empty directory.
    fn remove(&self, path: &str) -> io::Result<()>;

    /// Rename `from` to `to`. Fails if `to` already exists.
    fn rename(&self, from: &str, to: &str) -> io::Result<()>;

    /// Create a single directory. Fails with `AlreadyExists` if present.
    fn mkdir(&self, path: &str) -> io::Result<()>;
}

/// Join a device directory path and an entry name.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}
