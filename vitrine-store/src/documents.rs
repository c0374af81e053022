use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use std::fmt;

pub const DEFAULT_CONTENT: &str = "Document content here...";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageKind {
    Local,
    Cloud,
    Database,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageKind::Local => "Local Storage",
            StorageKind::Cloud => "Cloud Storage",
            StorageKind::Database => "Database Storage",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    Text,
    Pdf,
    Xml,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageReceipt {
    pub id: Uuid,
    pub backend: StorageKind,
    pub message: String,
    pub stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Refusing to store an empty document")]
    EmptyContent,
}

/// Implementation side of the document bridge: where bytes end up.
///
/// Backends are interchangeable under any [`Document`]; none of them touch
/// the filesystem or network, they only acknowledge what they were given.
pub trait StorageBackend: Send + Sync {
    fn kind(&self) -> StorageKind;

    fn store(&self, content: &str) -> Result<StorageReceipt, StorageError> {
        if content.is_empty() {
            return Err(StorageError::EmptyContent);
        }

        let backend = self.kind();
        tracing::debug!(backend = %backend, bytes = content.len(), "storing document");

        Ok(StorageReceipt {
            id: Uuid::new_v4(),
            backend,
            message: format!("Saving to {}: {}", backend, content),
            stored_at: Utc::now(),
        })
    }
}

#[derive(Debug, Default)]
pub struct LocalStorage;

impl StorageBackend for LocalStorage {
    fn kind(&self) -> StorageKind {
        StorageKind::Local
    }
}

#[derive(Debug, Default)]
pub struct CloudStorage;

impl StorageBackend for CloudStorage {
    fn kind(&self) -> StorageKind {
        StorageKind::Cloud
    }
}

#[derive(Debug, Default)]
pub struct DatabaseStorage;

impl StorageBackend for DatabaseStorage {
    fn kind(&self) -> StorageKind {
        StorageKind::Database
    }
}

/// Abstraction side of the bridge
pub struct Document {
    kind: DocumentKind,
    content: String,
    storage: Box<dyn StorageBackend>,
}

impl Document {
    pub fn new(kind: DocumentKind, storage: Box<dyn StorageBackend>) -> Self {
        Self::with_content(kind, DEFAULT_CONTENT, storage)
    }

    pub fn with_content(
        kind: DocumentKind,
        content: impl Into<String>,
        storage: Box<dyn StorageBackend>,
    ) -> Self {
        Self {
            kind,
            content: content.into(),
            storage,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn storage_kind(&self) -> StorageKind {
        self.storage.kind()
    }

    pub fn save(&self) -> Result<StorageReceipt, StorageError> {
        tracing::debug!(document = ?self.kind, "saving document");
        self.storage.store(&self.content)
    }
}
