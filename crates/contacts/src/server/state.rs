//! Shared application state

use std::sync::Arc;

use tracing::info;

use crate::config::ServerConfig;
use crate::storage::{self, ContactStore, MemoryContactStore, SqliteContactStore};

/// State shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Open the store the config asks for, seeding it if requested and empty
    pub async fn from_config(config: &ServerConfig) -> storage::Result<Self> {
        let store: Arc<dyn ContactStore> = match &config.database {
            Some(path) => Arc::new(SqliteContactStore::new(path)?),
            None => {
                info!("No database configured, contacts will be kept in memory");
                Arc::new(MemoryContactStore::new())
            }
        };

        if config.seed && store.get_contacts(None).await?.is_empty() {
            storage::seed(store.as_ref()).await?;
        }

        Ok(Self::new(store))
    }
}
