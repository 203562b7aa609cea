use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{DirIter, RawEntry, Storage};

/// Storage backend that maps device paths onto a host directory.
///
/// `/any/nfc/card.nfc` resolves to `<root>/any/nfc/card.nfc`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a device path to a host path below `root`.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let mut resolved = self.root.clone();
        for part in path.split('/').filter(|p| !p.is_empty() && *p != "..") {
            resolved.push(part);
        }
        resolved
    }
}

impl Storage for LocalStorage {
    fn read_dir(&self, path: &str) -> io::Result<DirIter<'_>> {
        let entries = fs::read_dir(self.resolve(path))?;
        Ok(Box::new(entries.map(|entry| {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            Ok(if entry.file_type()?.is_dir() {
                RawEntry::dir(&name)
            } else {
                RawEntry::file(&name)
            })
        })))
    }

    fn stat(&self, path: &str) -> io::Result<()> {
        fs::symlink_metadata(self.resolve(path))?;
        Ok(())
    }

    fn copy(&self, src: &str, dst: &str) -> io::Result<()> {
        fs::copy(self.resolve(src), self.resolve(dst))?;
        Ok(())
    }

    fn remove(&self, path: &str) -> io::Result<()> {
        let target = self.resolve(path);
        if target.is_dir() {
            fs::remove_dir(target)
        } else {
            fs::remove_file(target)
        }
    }

    /// Fails with `AlreadyExists` instead of replacing an existing `to`.
    fn rename(&self, from: &str, to: &str) -> io::Result<()> {
        let target = self.resolve(to);
        if fs::symlink_metadata(&target).is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to),
            ));
        }
        fs::rename(self.resolve(from), target)
    }

    fn mkdir(&self, path: &str) -> io::Result<()> {
        fs::create_dir(self.resolve(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, LocalStorage) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("any").join("nfc")).unwrap();
        fs::write(tmp.path().join("any").join("nfc").join("card.nfc"), "uid").unwrap();
        let storage = LocalStorage::new(tmp.path());
        (tmp, storage)
    }

    #[test]
    fn resolve_strips_leading_separator() {
        let storage = LocalStorage::new(Path::new("/mnt/sd"));
        assert_eq!(
            storage.resolve("/any/nfc"),
            PathBuf::from("/mnt/sd/any/nfc")
        );
    }

    #[test]
    fn resolve_ignores_parent_components() {
        let storage = LocalStorage::new(Path::new("/mnt/sd"));
        assert_eq!(storage.resolve("/any/../etc"), PathBuf::from("/mnt/sd/any/etc"));
    }

    #[test]
    fn test_read_dir_reports_kinds() {
        let (tmp, storage) = setup();
        fs::create_dir(tmp.path().join("any").join("nfc").join("sub")).unwrap();
        let mut entries: Vec<RawEntry> = storage
            .read_dir("/any/nfc")
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(entries, vec![RawEntry::file("card.nfc"), RawEntry::dir("sub")]);
    }

    #[test]
    fn test_read_dir_missing_fails() {
        let (_tmp, storage) = setup();
        assert!(storage.read_dir("/any/ibutton").is_err());
    }

    #[test]
    fn test_stat() {
        let (_tmp, storage) = setup();
        assert!(storage.stat("/any/nfc/card.nfc").is_ok());
        assert!(storage.stat("/any/nfc").is_ok());
        assert!(storage.stat("/any/nfc/other.nfc").is_err());
    }

    #[test]
    fn test_copy_keeps_source() {
        let (tmp, storage) = setup();
        storage.copy("/any/nfc/card.nfc", "/any/copy.nfc").unwrap();
        assert_eq!(
            fs::read_to_string(tmp.path().join("any").join("copy.nfc")).unwrap(),
            "uid"
        );
        assert!(tmp.path().join("any").join("nfc").join("card.nfc").exists());
    }

    #[test]
    fn test_copy_overwrites_existing() {
        let (tmp, storage) = setup();
        fs::write(tmp.path().join("any").join("copy.nfc"), "stale").unwrap();
        storage.copy("/any/nfc/card.nfc", "/any/copy.nfc").unwrap();
        assert_eq!(
            fs::read_to_string(tmp.path().join("any").join("copy.nfc")).unwrap(),
            "uid"
        );
    }

    #[test]
    fn test_rename() {
        let (tmp, storage) = setup();
        storage
            .rename("/any/nfc/card.nfc", "/any/nfc/badge.nfc")
            .unwrap();
        assert!(!tmp.path().join("any").join("nfc").join("card.nfc").exists());
        assert!(tmp.path().join("any").join("nfc").join("badge.nfc").exists());
    }

    #[test]
    fn test_rename_onto_existing_fails_and_keeps_both() {
        let (tmp, storage) = setup();
        let nfc = tmp.path().join("any").join("nfc");
        fs::write(nfc.join("badge.nfc"), "badge").unwrap();
        let err = storage
            .rename("/any/nfc/card.nfc", "/any/nfc/badge.nfc")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(nfc.join("card.nfc")).unwrap(), "uid");
        assert_eq!(fs::read_to_string(nfc.join("badge.nfc")).unwrap(), "badge");
    }

    #[test]
    fn test_rename_nonexistent_fails() {
        let (_tmp, storage) = setup();
        assert!(storage.rename("/any/nfc/none.nfc", "/any/nfc/x.nfc").is_err());
    }

    #[test]
    fn test_remove_file() {
        let (tmp, storage) = setup();
        storage.remove("/any/nfc/card.nfc").unwrap();
        assert!(!tmp.path().join("any").join("nfc").join("card.nfc").exists());
    }

    #[test]
    fn test_remove_non_empty_directory_fails() {
        let (tmp, storage) = setup();
        assert!(storage.remove("/any/nfc").is_err());
        assert!(tmp.path().join("any").join("nfc").exists());
    }

    #[test]
    fn test_remove_nonexistent_fails() {
        let (_tmp, storage) = setup();
        assert!(storage.remove("/any/nfc/none.nfc").is_err());
    }

    #[test]
    fn test_mkdir_already_exists_fails() {
        let (_tmp, storage) = setup();
        storage.mkdir("/any/favorites").unwrap();
        let err = storage.mkdir("/any/favorites").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }
}
