//! # Persistence Collaborator
//!
//! The editor reaches stores, drafts and catalog products only through
//! [`BuilderStore`]. Lookups are keyed: drafts and store records by store
//! id, storefront routing by subdomain.

use shelf_model::{Product, StoreBuilder, StoreRecord};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Key a store's draft is saved under
pub fn draft_key(store_id: &str) -> String {
    format!("store_builder_draft_{}", store_id)
}

pub trait BuilderStore: Send + Sync {
    /// Overwrite the draft for `store_id`
    fn save_draft(&self, store_id: &str, draft: &StoreBuilder) -> Result<(), StorageError>;

    fn load_draft(&self, store_id: &str) -> Result<Option<StoreBuilder>, StorageError>;

    /// Remove the draft; succeeds when none exists
    fn clear_draft(&self, store_id: &str) -> Result<(), StorageError>;

    fn get_store(&self, store_id: &str) -> Result<Option<StoreRecord>, StorageError>;

    /// Insert or replace a store record (matched by id)
    fn put_store(&self, store: &StoreRecord) -> Result<(), StorageError>;

    fn find_store_by_subdomain(
        &self,
        subdomain: &str,
    ) -> Result<Option<StoreRecord>, StorageError>;

    /// Catalog products with the given ids, in the order requested; unknown
    /// ids are skipped
    fn get_products(&self, ids: &[String]) -> Result<Vec<Product>, StorageError>;
}

/// In-process store for tests and single-run tools
#[derive(Debug, Default)]
pub struct MemoryStore {
    drafts: Mutex<HashMap<String, StoreBuilder>>,
    stores: Mutex<BTreeMap<String, StoreRecord>>,
    products: Mutex<HashMap<String, Product>>,
    read_only: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|_| StorageError::Unavailable("lock poisoned".to_string()))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every write until switched back
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    pub fn put_product(&self, product: Product) -> Result<(), StorageError> {
        self.check_writable()?;
        lock(&self.products)?.insert(product.id.clone(), product);
        Ok(())
    }

    pub fn store_count(&self) -> usize {
        lock(&self.stores).map(|stores| stores.len()).unwrap_or(0)
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl BuilderStore for MemoryStore {
    fn save_draft(&self, store_id: &str, draft: &StoreBuilder) -> Result<(), StorageError> {
        self.check_writable()?;
        lock(&self.drafts)?.insert(draft_key(store_id), draft.clone());
        Ok(())
    }

    fn load_draft(&self, store_id: &str) -> Result<Option<StoreBuilder>, StorageError> {
        Ok(lock(&self.drafts)?.get(&draft_key(store_id)).cloned())
    }

    fn clear_draft(&self, store_id: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        lock(&self.drafts)?.remove(&draft_key(store_id));
        Ok(())
    }

    fn get_store(&self, store_id: &str) -> Result<Option<StoreRecord>, StorageError> {
        Ok(lock(&self.stores)?.get(store_id).cloned())
    }

    fn put_store(&self, store: &StoreRecord) -> Result<(), StorageError> {
        self.check_writable()?;
        lock(&self.stores)?.insert(store.id.clone(), store.clone());
        Ok(())
    }

    fn find_store_by_subdomain(
        &self,
        subdomain: &str,
    ) -> Result<Option<StoreRecord>, StorageError> {
        Ok(lock(&self.stores)?
            .values()
            .find(|store| store.subdomain == subdomain)
            .cloned())
    }

    fn get_products(&self, ids: &[String]) -> Result<Vec<Product>, StorageError> {
        let products = lock(&self.products)?;
        Ok(ids.iter().filter_map(|id| products.get(id).cloned()).collect())
    }
}
