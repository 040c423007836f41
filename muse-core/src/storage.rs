use std::{
    collections::BTreeMap,
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use parking_lot::RwLock;
use platform_dirs::AppDirs;

use crate::error::Error;

const APP_NAME: &str = "Muse";
const SETTINGS_FILENAME: &str = "settings.json";

/// Flat string key-value storage, shaped after the browser's `localStorage`.
///
/// All methods take `&self`; implementations are expected to use interior
/// mutability so a single store can be shared between readers and the
/// settings UI.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    fn remove(&self, key: &str) -> Result<(), Error>;

    fn keys(&self) -> Vec<String>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        (**self).remove(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}

/// Key-value storage backed by a JSON object on disk.
///
/// The whole file is rewritten on every mutation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStorage {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(SETTINGS_FILENAME))
    }

    /// Opens the settings file in the platform config directory.
    pub fn open_default() -> Result<Self, Error> {
        let path = Self::default_path().ok_or(Error::ConfigDirNotFound)?;
        Self::open(path)
    }

    /// Opens the settings file at `path`. A missing file yields an empty store,
    /// the file is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let entries = match File::open(&path) {
            Ok(file) => {
                log::info!("loading settings: {:?}", &path);
                serde_json::from_reader(file)?
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), Error> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, entries)?;
        log::debug!("saved settings: {:?}", &self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.entries.write();
        let mut updated = entries.clone();
        updated.insert(key.to_owned(), value.to_owned());
        self.save(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let mut entries = self.entries.write();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.save(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_get_set_remove() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("a"), None);
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("2"));
        store.remove("a").unwrap();
        assert_eq!(store.get("a"), None);
        assert!(store.keys().is_empty());
    }

    #[test]
    fn file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::open(dir.path().join("settings.json")).unwrap();
        assert!(store.keys().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn file_storage_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        {
            let store = FileStorage::open(&path).unwrap();
            store.set("k1", "v1").unwrap();
            store.set("k2", "v2").unwrap();
            store.remove("k2").unwrap();
        }
        let store = FileStorage::open(&path).unwrap();
        assert_eq!(store.get("k1").as_deref(), Some("v1"));
        assert_eq!(store.get("k2"), None);
        assert_eq!(store.keys(), vec!["k1".to_string()]);
    }

    #[test]
    fn file_storage_open_fails_under_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let result = FileStorage::open(blocker.join("settings.json"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn file_storage_failed_save_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let store = FileStorage::open(sub.join("settings.json")).unwrap();
        store.set("kept", "1").unwrap();

        // Replace the settings directory with a regular file so writes fail.
        fs::remove_dir_all(&sub).unwrap();
        fs::write(&sub, "").unwrap();

        assert!(store.set("k", "v").is_err());
        assert_eq!(store.get("k"), None);
        assert!(store.remove("kept").is_err());
        assert_eq!(store.get("kept").as_deref(), Some("1"));
        assert_eq!(store.keys(), vec!["kept".to_string()]);
    }

    #[test]
    fn file_storage_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(FileStorage::open(&path), Err(Error::JsonError(_))));
    }
}
