//! JSON-file persistence for stores, drafts and catalog products.
//!
//! Layout under the data directory:
//!
//! ```text
//! <data_dir>/
//!   stores/<store-id>.json
//!   drafts/store_builder_draft_<store-id>.json
//!   products/<product-id>.json
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use shelf_editor::{draft_key, BuilderStore, StorageError};
use shelf_model::{Product, StoreBuilder, StoreRecord};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const STORES_DIR: &str = "stores";
const DRAFTS_DIR: &str = "drafts";
const PRODUCTS_DIR: &str = "products";

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        for dir in [STORES_DIR, DRAFTS_DIR, PRODUCTS_DIR] {
            fs::create_dir_all(root.join(dir))?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn put_product(&self, product: &Product) -> Result<(), StorageError> {
        let path = self.entry_path(PRODUCTS_DIR, &product.id)?;
        write_json(&path, product)
    }

    /// Every store record on disk, ordered by id
    pub fn list_stores(&self) -> Result<Vec<StoreRecord>, StorageError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(self.root.join(STORES_DIR))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
            .collect();
        paths.sort();

        let mut stores = Vec::with_capacity(paths.len());
        for path in paths {
            match read_json::<StoreRecord>(&path) {
                Ok(Some(store)) => stores.push(store),
                Ok(None) => {}
                Err(error) => warn!(path = %path.display(), %error, "Skipping unreadable store"),
            }
        }
        Ok(stores)
    }

    fn entry_path(&self, dir: &str, key: &str) -> Result<PathBuf, StorageError> {
        if !is_safe_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(dir).join(format!("{}.json", key)))
    }
}

/// Keys become file names, so only plain identifier characters pass
fn is_safe_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    match fs::read_to_string(path) {
        Ok(source) => Ok(Some(serde_json::from_str(&source)?)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Write through a sibling temp file so readers never see a partial file
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    if let Err(error) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(error.into());
    }
    debug!(path = %path.display(), "Wrote record");
    Ok(())
}

impl BuilderStore for FileStore {
    fn save_draft(&self, store_id: &str, draft: &StoreBuilder) -> Result<(), StorageError> {
        let path = self.entry_path(DRAFTS_DIR, &draft_key(store_id))?;
        write_json(&path, draft)
    }

    fn load_draft(&self, store_id: &str) -> Result<Option<StoreBuilder>, StorageError> {
        read_json(&self.entry_path(DRAFTS_DIR, &draft_key(store_id))?)
    }

    fn clear_draft(&self, store_id: &str) -> Result<(), StorageError> {
        let path = self.entry_path(DRAFTS_DIR, &draft_key(store_id))?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    fn get_store(&self, store_id: &str) -> Result<Option<StoreRecord>, StorageError> {
        read_json(&self.entry_path(STORES_DIR, store_id)?)
    }

    fn put_store(&self, store: &StoreRecord) -> Result<(), StorageError> {
        let path = self.entry_path(STORES_DIR, &store.id)?;
        write_json(&path, store)
    }

    fn find_store_by_subdomain(
        &self,
        subdomain: &str,
    ) -> Result<Option<StoreRecord>, StorageError> {
        Ok(self
            .list_stores()?
            .into_iter()
            .find(|store| store.subdomain == subdomain))
    }

    fn get_products(&self, ids: &[String]) -> Result<Vec<Product>, StorageError> {
        let mut products = Vec::with_capacity(ids.len());
        for id in ids {
            if !is_safe_key(id) {
                continue;
            }
            if let Some(product) = read_json(&self.entry_path(PRODUCTS_DIR, id)?)? {
                products.push(product);
            }
        }
        Ok(products)
    }
}
