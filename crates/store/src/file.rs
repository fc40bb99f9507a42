//! File-backed storage.
//!
//! The whole storage area is a single JSON object mapping keys to string
//! values. It is loaded once when opened and rewritten in full after every
//! write. A write that fails leaves both the file and the in-memory view
//! as they were.
//!
//! ```text
//! ~/.local/share/taskboard/storage.json
//! {
//!   "activeBoard": "\"Roadmap\"",
//!   "showSideBar": "true",
//!   "tasks": "[...]"
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::error::{Result, StoreError};
use crate::storage::Storage;

/// A [`Storage`] persisted to a JSON file.
///
/// # Examples
///
/// ```no_run
/// use taskboard_store::{FileStorage, Storage};
///
/// # fn example() -> taskboard_store::Result<()> {
/// let mut storage = FileStorage::open("/tmp/taskboard/storage.json")?;
/// storage.set_item("showSideBar", "false")?;
///
/// let reopened = FileStorage::open("/tmp/taskboard/storage.json")?;
/// assert_eq!(reopened.get_item("showSideBar")?.as_deref(), Some("false"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the storage file at `path`.
    ///
    /// A missing file is an empty storage; the file is created on the first
    /// write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if it is
    /// not a JSON object of string values.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let items = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| {
                warn!(?path, error = %source, "storage file is corrupt");
                StoreError::CorruptFile {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "storage file not found, starting empty");
                BTreeMap::new()
            }
            Err(source) => {
                warn!(?path, error = %source, "failed to read storage file");
                return Err(StoreError::ReadFile { path, source });
            }
        };

        debug!(keys = items.len(), "opened storage");
        Ok(Self { path, items })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::WriteFile {
                path: self.path.clone(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(items).map_err(StoreError::Serialize)?;
        fs::write(&self.path, content).map_err(|source| StoreError::WriteFile {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = ?self.path, keys = items.len(), "storage saved");
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value.to_string());
        self.flush(&items)?;
        self.items = items;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if !self.items.contains_key(key) {
            return Ok(());
        }
        let mut items = self.items.clone();
        items.remove(key);
        self.flush(&items)?;
        self.items = items;
        Ok(())
    }
}
