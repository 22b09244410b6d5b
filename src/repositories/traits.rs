use crate::error::StorageResult;
use crate::store::ContactStore;

/// Repository for persisting the whole contact store.
///
/// The store is loaded once when the program starts and saved once when it
/// exits; implementations never see partial updates.
pub trait StoreRepository {
    /// Load the persisted store, or an empty one when nothing was saved yet.
    fn load(&self) -> StorageResult<ContactStore>;

    /// Persist the full store, replacing any previous state.
    fn save(&self, store: &ContactStore) -> StorageResult<()>;
}
