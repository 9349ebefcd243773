use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{ContactStore, Result, StoreError, new_contact_id};
use crate::contact::{Contact, ContactUpdate};

const CONTACT_COLUMNS: &str = "id, first, last, avatar, twitter, notes, favorite, created_at";

/// SQLite-backed contact store
pub struct SqliteContactStore {
    conn: Mutex<Connection>,
}

impl SqliteContactStore {
    /// Open (or create) a contact database at the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Opening contact database at {}", path.as_ref().display());
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Create an in-memory contact store (for testing)
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS contacts (
                id TEXT PRIMARY KEY,
                first TEXT,
                last TEXT,
                avatar TEXT,
                twitter TEXT,
                notes TEXT,
                favorite INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_contacts_order ON contacts(last, created_at);
            "#,
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn select_one(conn: &Connection, id: &str) -> Result<Option<Contact>> {
        let contact = conn
            .query_row(
                &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
                params![id],
                contact_from_row,
            )
            .optional()?;
        Ok(contact)
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    // Fixed width so text order matches time order
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn contact_from_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    let created_at: String = row.get(7)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

    Ok(Contact {
        id: row.get(0)?,
        first: row.get(1)?,
        last: row.get(2)?,
        avatar: row.get(3)?,
        twitter: row.get(4)?,
        notes: row.get(5)?,
        favorite: row.get(6)?,
        created_at,
    })
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn get_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY COALESCE(last, ''), created_at, id"
        ))?;

        let query = query.unwrap_or("");
        let contacts = stmt
            .query_map([], contact_from_row)?
            .filter(|row| match row {
                Ok(contact) => contact.matches(query),
                Err(_) => true,
            })
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!("Query {:?} matched {} contacts", query, contacts.len());
        Ok(contacts)
    }

    async fn create_empty_contact(&self) -> Result<Contact> {
        let contact = Contact::empty(new_contact_id());
        self.insert(contact.clone()).await?;
        Ok(contact)
    }

    async fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        let conn = self.conn.lock().await;
        Self::select_one(&conn, id)
    }

    async fn update_contact(&self, id: &str, update: ContactUpdate) -> Result<Contact> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            r#"
            UPDATE contacts
            SET first = ?2, last = ?3, avatar = ?4, twitter = ?5, notes = ?6
            WHERE id = ?1
            "#,
            params![
                id,
                update.first,
                update.last,
                update.avatar,
                update.twitter,
                update.notes,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Self::select_one(&conn, id)?.ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE contacts SET favorite = ?2 WHERE id = ?1",
            params![id, favorite],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        Self::select_one(&conn, id)?.ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn delete_contact(&self, id: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn insert(&self, contact: Contact) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            &format!(
                "INSERT OR REPLACE INTO contacts ({CONTACT_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
            ),
            params![
                contact.id,
                contact.first,
                contact.last,
                contact.avatar,
                contact.twitter,
                contact.notes,
                contact.favorite,
                format_timestamp(&contact.created_at),
            ],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_list() {
        let store = SqliteContactStore::in_memory().unwrap();
        let created = store.create_empty_contact().await.unwrap();

        let all = store.get_contacts(None).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].first, None);
        assert!(!all[0].favorite);
    }

    #[tokio::test]
    async fn test_query_and_order() {
        let store = SqliteContactStore::in_memory().unwrap();
        for (first, last) in [("Ryan", "Florence"), ("Kent", "Dodds"), ("Ryan", "Dahl")] {
            let contact = store.create_empty_contact().await.unwrap();
            store
                .update_contact(
                    &contact.id,
                    ContactUpdate {
                        first: Some(first.to_string()),
                        last: Some(last.to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }

        let lasts: Vec<String> = store
            .get_contacts(None)
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.last)
            .collect();
        assert_eq!(lasts, vec!["Dahl", "Dodds", "Florence"]);

        let ryans = store.get_contacts(Some("RYAN")).await.unwrap();
        assert_eq!(ryans.len(), 2);
        assert!(store.get_contacts(Some("100%")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_favorite_update_and_delete() {
        let store = SqliteContactStore::in_memory().unwrap();
        let contact = store.create_empty_contact().await.unwrap();

        let starred = store.set_favorite(&contact.id, true).await.unwrap();
        assert!(starred.favorite);

        let updated = store
            .update_contact(
                &contact.id,
                ContactUpdate {
                    notes: Some("met at the conference".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.favorite);
        assert_eq!(updated.notes.as_deref(), Some("met at the conference"));

        store.delete_contact(&contact.id).await.unwrap();
        assert!(store.get_contact(&contact.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete_contact(&contact.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_timestamps_round_trip() {
        let store = SqliteContactStore::in_memory().unwrap();
        let contact = store.create_empty_contact().await.unwrap();

        let fetched = store.get_contact(&contact.id).await.unwrap().unwrap();
        assert_eq!(fetched.created_at, contact.created_at);
    }

    #[tokio::test]
    async fn test_contacts_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");

        let id = {
            let store = SqliteContactStore::new(&path).unwrap();
            store.create_empty_contact().await.unwrap().id
        };

        let reopened = SqliteContactStore::new(&path).unwrap();
        assert!(reopened.get_contact(&id).await.unwrap().is_some());
    }
}
