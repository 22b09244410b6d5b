use crate::error::{StorageError, StorageResult};
use crate::models::ContactRecord;
use crate::repositories::traits::StoreRepository;
use crate::store::ContactStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

const FORMAT_VERSION: u32 = 1;

/// On-disk layout written by [`JsonFileRepository::save`].
#[derive(Serialize)]
struct StoredBookRef<'a> {
    version: u32,
    contacts: &'a [ContactRecord],
}

/// On-disk layout read by [`JsonFileRepository::load`].
#[derive(Deserialize)]
struct StoredBook {
    version: u32,
    #[serde(default)]
    contacts: Vec<ContactRecord>,
}

/// Store repository backed by a single pretty-printed JSON file.
///
/// Saving writes a sibling temporary file first and renames it over the
/// target, so an interrupted save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the data file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StoreRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<ContactStore> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No data file, starting with an empty contact book");
                return Ok(ContactStore::new());
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredBook = serde_json::from_str(&data)?;
        if stored.version != FORMAT_VERSION {
            return Err(StorageError::Corrupt(format!(
                "unsupported format version {}",
                stored.version
            )));
        }

        let store = ContactStore::from_records(stored.contacts).map_err(|name| {
            StorageError::Corrupt(format!("duplicate contact name: {}", name))
        })?;

        tracing::info!(
            path = %self.path.display(),
            contacts = store.len(),
            "Contact book loaded"
        );
        Ok(store)
    }

    fn save(&self, store: &ContactStore) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let stored = StoredBookRef {
            version: FORMAT_VERSION,
            contacts: store.records(),
        };
        let json = serde_json::to_string_pretty(&stored)?;

        let temp = self.temp_path();
        tracing::debug!(path = %temp.display(), "Writing temporary data file");
        fs::write(&temp, json)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            tracing::warn!(error = %e, "Failed to replace data file");
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        tracing::info!(
            path = %self.path.display(),
            contacts = store.len(),
            "Contact book saved"
        );
        Ok(())
    }
}
