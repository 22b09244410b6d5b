//! In-memory test doubles shared by the integration tests.

pub mod mock_store_repository;

pub use mock_store_repository::MockStoreRepository;
