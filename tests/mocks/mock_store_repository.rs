use contact_book::error::{StorageError, StorageResult};
use contact_book::repositories::StoreRepository;
use contact_book::store::ContactStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock store repository for testing.
///
/// Keeps the "persisted" store in memory and tracks method calls for
/// verification. Clones share state, so a test can keep a handle after
/// moving the repository into an `Application`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStoreRepository {
    stored: Arc<Mutex<Option<ContactStore>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockStoreRepository {
    /// Create a repository with nothing persisted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `store`.
    pub fn with_store(store: ContactStore) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(store);
        repo
    }

    /// The last saved store, if any.
    pub fn stored(&self) -> Option<ContactStore> {
        self.stored.lock().unwrap().clone()
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl StoreRepository for MockStoreRepository {
    fn load(&self) -> StorageResult<ContactStore> {
        self.track_call("load");
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, store: &ContactStore) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        *self.stored.lock().unwrap() = Some(store.clone());
        Ok(())
    }
}
