pub mod app_config;
pub mod documents;

pub use app_config::Config;
pub use documents::{Document, DocumentKind, StorageBackend, StorageError, StorageKind, StorageReceipt};
