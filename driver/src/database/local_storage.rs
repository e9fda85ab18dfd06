use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

pub use self::{catalog::*, draft::*, order::*, selection::*};

mod catalog;
mod draft;
mod order;
mod selection;

static STOREFRONT_STORAGE: &str = "STOREFRONT_STORAGE";
static STOREFRONT_STORAGE_QUOTA: &str = "STOREFRONT_STORAGE_QUOTA";
const DEFAULT_STORAGE_FILE: &str = "./storage/local_storage.json";
/// Browsers grant about 5 MiB per origin.
pub const DEFAULT_QUOTA: usize = 5 * 1024 * 1024;

pub(crate) const CARS_KEY: &str = "cars";
pub(crate) const SELECTED_CAR_KEY: &str = "selectedCar";
pub(crate) const FORM_DATA_KEY: &str = "reservationFormData";
pub(crate) const FORM_CANCELLED_KEY: &str = "formWasCancelled";
pub(crate) const ORDERS_KEY: &str = "orders";
pub(crate) const LATEST_ORDER_ID_KEY: &str = "latestOrderId";

/// String-to-string store shared by every handle cloned from it, like the
/// storage of one browser origin shared by all of its tabs.
///
/// When backed by a file, the file is re-read at the start of each
/// transaction and rewritten on every write, so separate processes observe
/// each other's writes the same way.
#[derive(Debug, Clone)]
pub struct LocalStorage(Arc<Mutex<StorageArea>>);

#[derive(Debug)]
struct StorageArea {
    items: BTreeMap<String, String>,
    file: Option<PathBuf>,
    quota: usize,
}

impl LocalStorage {
    pub fn in_memory() -> Self {
        Self::with_quota(DEFAULT_QUOTA)
    }

    pub fn with_quota(quota: usize) -> Self {
        Self(Arc::new(Mutex::new(StorageArea {
            items: BTreeMap::new(),
            file: None,
            quota,
        })))
    }

    pub async fn open(
        path: impl Into<PathBuf>,
        quota: usize,
    ) -> error_stack::Result<Self, KernelError> {
        let mut area = StorageArea {
            items: BTreeMap::new(),
            file: Some(path.into()),
            quota,
        };
        area.reload().await?;
        Ok(Self(Arc::new(Mutex::new(area))))
    }

    /// Uses `STOREFRONT_STORAGE` and `STOREFRONT_STORAGE_QUOTA`. `path` overrides the former.
    pub async fn from_env(path: Option<PathBuf>) -> error_stack::Result<Self, KernelError> {
        let path = match path {
            Some(path) => path,
            None => env(STOREFRONT_STORAGE)
                .convert_error()?
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE)),
        };
        let quota = env(STOREFRONT_STORAGE_QUOTA)
            .and_then(|quota| {
                quota
                    .map(|quota| quota.parse::<usize>().map_err(DriverError::from))
                    .transpose()
            })
            .convert_error()?
            .unwrap_or(DEFAULT_QUOTA);
        debug!("Opening local storage at {}", path.display());
        Self::open(path, quota).await
    }
}

impl StorageArea {
    async fn reload(&mut self) -> error_stack::Result<(), KernelError> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        let raw = match tokio::fs::read_to_string(file).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(error) => return Err(DriverError::from(error)).convert_error(),
        };
        match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
            Ok(items) => self.items = items,
            Err(error) => {
                warn!("Storage file {} is corrupt, starting empty: {error}", file.display());
                self.items.clear();
            }
        }
        Ok(())
    }

    async fn flush(&self) -> Result<(), DriverError> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        if let Some(parent) = file.parent().filter(|parent| parent != &Path::new("")) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(&self.items)?;
        tokio::fs::write(file, raw).await?;
        Ok(())
    }

    fn usage_with(&self, key: &str, value: &str) -> usize {
        self.items
            .iter()
            .filter(|(stored, _)| stored.as_str() != key)
            .map(|(stored, item)| stored.len() + item.len())
            .sum::<usize>()
            + key.len()
            + value.len()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for LocalStorage {
    type Transaction = LocalStorageTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        self.0.lock().await.reload().await?;
        Ok(LocalStorageTransaction(self.0.clone()))
    }
}

/// Writes land immediately. There is nothing to roll back.
pub struct LocalStorageTransaction(Arc<Mutex<StorageArea>>);

impl LocalStorageTransaction {
    pub async fn get_item(&self, key: &str) -> Option<String> {
        self.0.lock().await.items.get(key).cloned()
    }

    pub async fn set_item(
        &mut self,
        key: &str,
        value: String,
    ) -> error_stack::Result<(), KernelError> {
        let mut area = self.0.lock().await;
        if area.usage_with(key, &value) > area.quota {
            return Err(DriverError::QuotaExceeded {
                key: key.to_string(),
                quota: area.quota,
            })
            .convert_error();
        }
        area.items.insert(key.to_string(), value);
        area.flush().await.convert_error()
    }

    pub async fn remove_item(&mut self, key: &str) -> error_stack::Result<(), KernelError> {
        let mut area = self.0.lock().await;
        if area.items.remove(key).is_some() {
            area.flush().await.convert_error()?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Transaction for LocalStorageTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::KernelError;

    use crate::database::LocalStorage;

    #[tokio::test]
    async fn clones_share_items() -> error_stack::Result<(), KernelError> {
        let storage = LocalStorage::in_memory();
        let other_tab = storage.clone();

        let mut con = storage.transact().await?;
        con.set_item("cars", "[]".to_string()).await?;

        let other = other_tab.transact().await?;
        assert_eq!(other.get_item("cars").await, Some("[]".to_string()));

        con.remove_item("cars").await?;
        assert_eq!(other.get_item("cars").await, None);
        Ok(())
    }

    #[tokio::test]
    async fn writes_beyond_quota_fail_and_keep_old_value() -> error_stack::Result<(), KernelError> {
        let storage = LocalStorage::with_quota(16);
        let mut con = storage.transact().await?;
        con.set_item("key", "small".to_string()).await?;

        let error = con
            .set_item("key", "far too large for the quota".to_string())
            .await
            .expect_err("quota must be enforced");
        assert_eq!(error.current_context(), &KernelError::Internal);
        assert_eq!(con.get_item("key").await, Some("small".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn file_backed_storage_is_visible_to_other_processes(
    ) -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("local_storage.json");

        let first = LocalStorage::open(&path, super::DEFAULT_QUOTA).await?;
        let second = LocalStorage::open(&path, super::DEFAULT_QUOTA).await?;

        let mut con = first.transact().await?;
        con.set_item("latestOrderId", "order_1".to_string()).await?;

        let con = second.transact().await?;
        assert_eq!(
            con.get_item("latestOrderId").await,
            Some("order_1".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("local_storage.json");
        std::fs::write(&path, "{ not json").expect("write file");

        let storage = LocalStorage::open(&path, super::DEFAULT_QUOTA).await?;
        let con = storage.transact().await?;
        assert_eq!(con.get_item("cars").await, None);
        Ok(())
    }
}
