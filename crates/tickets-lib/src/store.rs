//! Whole-collection ticket persistence.
//!
//! A store reads and writes the entire ticket collection as one JSON array.
//! There is no incremental update and no locking: two writers that load the
//! same snapshot will each write their own version, and the last save wins.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::{Result, TicketError};
use crate::model::Ticket;

/// Durable home of the full ticket collection.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Load every ticket.
    ///
    /// # Errors
    ///
    /// `StoreNotFound` when the backing location is absent, `Parse` when its
    /// content is not a ticket array, `Io` on read failure.
    async fn load(&self) -> Result<Vec<Ticket>>;

    /// Replace the stored collection with `tickets`.
    ///
    /// # Errors
    ///
    /// `Io` on write failure, `Serialize` if encoding fails.
    async fn save(&self, tickets: &[Ticket]) -> Result<()>;

    /// Whether the backing location currently exists.
    ///
    /// # Errors
    ///
    /// `Io` if existence cannot be determined.
    async fn exists(&self) -> Result<bool>;
}

/// Ticket collection stored as a pretty-printed JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty collection (`[]`), replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub async fn create_empty(&self) -> Result<()> {
        self.save(&[]).await
    }

    /// Write `[]` if the file does not exist yet. Returns whether it was created.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be checked or written.
    pub async fn create_if_missing(&self) -> Result<bool> {
        if self.exists().await? {
            return Ok(false);
        }
        self.create_empty().await?;
        Ok(true)
    }

    /// Decode a stored document. A literal `null` reads as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if `bytes` is not a JSON array of tickets.
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Vec<Ticket>> {
        serde_json::from_slice::<Option<Vec<Ticket>>>(bytes)
            .map(Option::unwrap_or_default)
            .map_err(|source| TicketError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("tickets"), ToOwned::to_owned);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl TicketStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Ticket>> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TicketError::StoreNotFound(self.path.clone())
            } else {
                TicketError::io(&self.path, e)
            }
        })?;
        Self::decode(&self.path, &bytes)
    }

    async fn save(&self, tickets: &[Ticket]) -> Result<()> {
        let json = serde_json::to_vec_pretty(tickets)?;

        // Write to temp, then rename over the original
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &json)
            .await
            .map_err(|e| TicketError::io(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(TicketError::io(&self.path, e));
        }

        Ok(())
    }

    async fn exists(&self) -> Result<bool> {
        fs::try_exists(&self.path)
            .await
            .map_err(|e| TicketError::io(&self.path, e))
    }
}

/// In-process store. `None` models an absent backing location.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tickets: RwLock<Option<Vec<Ticket>>>,
}

impl MemoryStore {
    /// A store holding `tickets`.
    #[must_use]
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: RwLock::new(Some(tickets)),
        }
    }

    /// A store whose backing location does not exist.
    #[must_use]
    pub fn absent() -> Self {
        Self::default()
    }

    /// Current content, `None` if nothing was ever saved.
    pub async fn snapshot(&self) -> Option<Vec<Ticket>> {
        self.tickets.read().await.clone()
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Ticket>> {
        self.tickets
            .read()
            .await
            .clone()
            .ok_or_else(|| TicketError::StoreNotFound(PathBuf::from("<memory>")))
    }

    async fn save(&self, tickets: &[Ticket]) -> Result<()> {
        *self.tickets.write().await = Some(tickets.to_vec());
        Ok(())
    }

    async fn exists(&self) -> Result<bool> {
        Ok(self.tickets.read().await.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Ticket> {
        vec![
            Ticket {
                status: Some("Open".to_string()),
                priority: Some("High".to_string()),
                ..Ticket::new("1", "Test Ticket 1")
            },
            Ticket {
                status: Some("Closed".to_string()),
                priority: Some("Low".to_string()),
                ..Ticket::new("2", "Test Ticket 2")
            },
        ]
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("tickets.json"));

        store.save(&sample()).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, sample());
        assert!(!dir.path().join("tickets.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_writes_indented_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        let store = JsonFileStore::new(&path);

        store.save(&sample()).await.unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"TicketID\": \"1\""));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let store = JsonFileStore::new("/nonexistent/tickets.json");
        let result = store.load().await;
        assert!(matches!(result, Err(TicketError::StoreNotFound(_))));
    }

    #[tokio::test]
    async fn test_load_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        std::fs::write(&path, "[]").unwrap();

        let loaded = JsonFileStore::new(&path).load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_load_null_document_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        std::fs::write(&path, "null").unwrap();

        let loaded = JsonFileStore::new(&path).load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        std::fs::write(&path, "Invalid JSON Content").unwrap();

        let result = JsonFileStore::new(&path).load().await;
        assert!(matches!(result, Err(TicketError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        std::fs::write(&path, r#"{"TicketID":"1"}"#).unwrap();

        let result = JsonFileStore::new(&path).load().await;
        assert!(matches!(result, Err(TicketError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("tickets.json"));

        let result = store.save(&sample()).await;
        assert!(matches!(result, Err(TicketError::Io { .. })));
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        // A non-empty directory cannot be replaced by a file
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();
        let store = JsonFileStore::new(&path);

        let result = store.save(&sample()).await;
        assert!(matches!(result, Err(TicketError::Io { .. })));
        assert!(!dir.path().join("tickets.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_create_if_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("tickets.json"));

        assert!(!store.exists().await.unwrap());
        assert!(store.create_if_missing().await.unwrap());
        assert!(store.exists().await.unwrap());
        assert!(store.load().await.unwrap().is_empty());

        store.save(&sample()).await.unwrap();
        assert!(!store.create_if_missing().await.unwrap());
        assert_eq!(store.load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_memory_store_absent_then_saved() {
        let store = MemoryStore::absent();
        assert!(!store.exists().await.unwrap());
        assert!(matches!(
            store.load().await,
            Err(TicketError::StoreNotFound(_))
        ));

        store.save(&sample()).await.unwrap();
        assert_eq!(store.load().await.unwrap().len(), 2);
        assert_eq!(store.snapshot().await.unwrap()[0].id(), "1");
    }
}
