use anyhow::{Context, Result};
use std::cell::Cell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Port for persisting the "signed in" flag
pub trait SessionStorage {
    /// Stored flag, `false` when nothing was stored
    fn get(&self) -> Result<bool>;

    fn set(&self, authenticated: bool) -> Result<()>;

    /// Forget the flag entirely
    fn clear(&self) -> Result<()>;
}

/// In-process storage, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStorage {
    flag: Cell<Option<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, `None` after a clear
    pub fn stored(&self) -> Option<bool> {
        self.flag.get()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self) -> Result<bool> {
        Ok(self.flag.get().unwrap_or(false))
    }

    fn set(&self, authenticated: bool) -> Result<()> {
        self.flag.set(Some(authenticated));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.flag.set(None);
        Ok(())
    }
}

/// Flag kept in a small file so it survives between runs
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn get(&self) -> Result<bool> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim() == "true"),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read session file {}", self.path.display())),
        }
    }

    fn set(&self, authenticated: bool) -> Result<()> {
        debug!("Writing session flag to {}", self.path.display());
        fs::write(&self.path, authenticated.to_string())
            .with_context(|| format!("Failed to write session file {}", self.path.display()))
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove session file {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(!storage.get().unwrap());

        storage.set(true).unwrap();
        assert!(storage.get().unwrap());
        assert_eq!(storage.stored(), Some(true));

        storage.clear().unwrap();
        assert!(!storage.get().unwrap());
        assert_eq!(storage.stored(), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session"));

        assert!(!storage.get().unwrap());

        storage.set(true).unwrap();
        assert!(storage.get().unwrap());
        assert!(storage.path().exists());

        storage.clear().unwrap();
        assert!(!storage.get().unwrap());
        assert!(!storage.path().exists());

        // clearing twice is fine
        storage.clear().unwrap();
    }

    #[test]
    fn test_file_storage_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        fs::write(&path, "yes please").unwrap();

        assert!(!FileStorage::new(path).get().unwrap());
    }
}
