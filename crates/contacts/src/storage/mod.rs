//! # Contact storage
//!
//! The data layer behind the contact book. Handlers only see the
//! [`ContactStore`] trait; the binary picks an implementation at startup.
//!
//! ```rust,ignore
//! use contacts::storage::{ContactStore, MemoryContactStore};
//!
//! let store = MemoryContactStore::new();
//! let contact = store.create_empty_contact().await?;
//! let all = store.get_contacts(None).await?;
//! ```

mod memory;
mod sqlite;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::contact::{Contact, ContactUpdate};

pub use memory::MemoryContactStore;
pub use sqlite::SqliteContactStore;

/// Errors from the contact store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Asynchronous contact data layer
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Contacts whose first or last name contains `query`, ordered by last
    /// name then creation time. `None` or an empty query returns everything.
    async fn get_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>>;

    /// Create a contact with every field empty
    async fn create_empty_contact(&self) -> Result<Contact>;

    async fn get_contact(&self, id: &str) -> Result<Option<Contact>>;

    async fn update_contact(&self, id: &str, update: ContactUpdate) -> Result<Contact>;

    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact>;

    async fn delete_contact(&self, id: &str) -> Result<()>;

    /// Store a fully formed contact, replacing any with the same id
    async fn insert(&self, contact: Contact) -> Result<()>;
}

const SEED_CONTACTS: &str = include_str!("seed.json");

/// Load the bundled sample contacts into `store`
pub async fn seed(store: &dyn ContactStore) -> Result<usize> {
    let contacts: Vec<Contact> = serde_json::from_str(SEED_CONTACTS)?;
    let count = contacts.len();
    for contact in contacts {
        store.insert(contact).await?;
    }
    info!("Seeded {} contacts", count);
    Ok(count)
}

pub(crate) fn new_contact_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Order used by every store: last name (unnamed first), then creation time,
/// then id
pub(crate) fn sort_contacts(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| {
        let a_last = a.last.as_deref().unwrap_or("");
        let b_last = b.last.as_deref().unwrap_or("");
        a_last
            .cmp(b_last)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_loads_bundled_contacts() {
        let store = MemoryContactStore::new();
        let count = seed(&store).await.unwrap();
        assert!(count > 0);

        let all = store.get_contacts(None).await.unwrap();
        assert_eq!(all.len(), count);
    }

    #[test]
    fn test_sort_by_last_then_created() {
        let mut older = Contact::empty("older");
        older.last = Some("Smith".to_string());
        let mut newer = Contact::empty("newer");
        newer.last = Some("Smith".to_string());
        newer.created_at = older.created_at + chrono::Duration::seconds(1);
        let mut adams = Contact::empty("adams");
        adams.last = Some("Adams".to_string());
        let unnamed = Contact::empty("unnamed");

        let mut contacts = vec![newer, adams, older, unnamed];
        sort_contacts(&mut contacts);

        let ids: Vec<&str> = contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["unnamed", "adams", "older", "newer"]);
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(new_contact_id(), new_contact_id());
    }
}
