//! Favorites Adapter: favorite status is whether a same-named entry exists in
//! the favorites directory. Nothing is cached.

use std::io;

use crate::error::Result;
use crate::storage::{self, Storage};

use super::lister::FileEntry;

/// Which copies a removal deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveScope {
    /// The entry in the current directory only.
    Plain,
    /// The favorites copy only; the original stays.
    FavoriteOnly,
    /// The favorites copy and the original under its kind's default root.
    FavoriteAndOriginal,
}

impl RemoveScope {
    pub fn from_flags(from_favorites: bool, also_original: bool) -> Self {
        match (from_favorites, also_original) {
            (false, false) => RemoveScope::Plain,
            (true, false) => RemoveScope::FavoriteOnly,
            (_, true) => RemoveScope::FavoriteAndOriginal,
        }
    }
}

/// Favorites operations against a fixed favorites directory.
pub struct Favorites<'a> {
    storage: &'a dyn Storage,
    root: &'a str,
}

impl<'a> Favorites<'a> {
    pub fn new(storage: &'a dyn Storage, root: &'a str) -> Self {
        Self { storage, root }
    }

    /// One existence probe. Any probe failure other than "exists" reads as
    /// not-favorite.
    pub fn is_favorite(&self, name: &str) -> bool {
        match self.storage.stat(&storage::join(self.root, name)) {
            Ok(()) => true,
            Err(e) => e.kind() == io::ErrorKind::AlreadyExists,
        }
    }

    /// Copy `source_dir/name` into the favorites directory, creating the
    /// directory first when needed.
    pub fn add(&self, name: &str, source_dir: &str) -> Result<()> {
        match self.storage.mkdir(self.root) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e.into()),
        }
        let src = storage::join(source_dir, name);
        let dst = storage::join(self.root, name);
        self.storage.copy(&src, &dst)?;
        log::info!("pinned {} to favorites", src);
        Ok(())
    }

    /// Delete `entry` according to `scope`. `current_dir` is the directory
    /// the entry was listed in.
    pub fn remove(&self, entry: &FileEntry, scope: RemoveScope, current_dir: &str) -> Result<()> {
        match scope {
            RemoveScope::Plain => {
                self.storage
                    .remove(&storage::join(current_dir, &entry.name))?;
            }
            RemoveScope::FavoriteOnly => {
                self.storage.remove(&storage::join(self.root, &entry.name))?;
                log::info!("unpinned {}", entry.name);
            }
            RemoveScope::FavoriteAndOriginal => {
                self.storage.remove(&storage::join(self.root, &entry.name))?;
                let original_dir = entry
                    .kind
                    .known()
                    .map(|kind| kind.default_root())
                    .unwrap_or(current_dir);
                if original_dir == self.root {
                    log::info!("deleted favorite {}", entry.name);
                    return Ok(());
                }
                match self.storage.remove(&storage::join(original_dir, &entry.name)) {
                    Ok(()) => log::info!("deleted {} and its favorite", entry.name),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        log::warn!("deleted favorite {}, no original in {}", entry.name, original_dir);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(())
    }
}
