use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ContactStore, Result, StoreError, new_contact_id, sort_contacts};
use crate::contact::{Contact, ContactUpdate};

/// Process-local contact store; contents are lost on restart
#[derive(Default)]
pub struct MemoryContactStore {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn get_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        let query = query.unwrap_or("");

        let mut matched: Vec<Contact> = contacts
            .values()
            .filter(|contact| contact.matches(query))
            .cloned()
            .collect();
        sort_contacts(&mut matched);

        debug!("Query {:?} matched {} of {} contacts", query, matched.len(), contacts.len());
        Ok(matched)
    }

    async fn create_empty_contact(&self) -> Result<Contact> {
        let contact = Contact::empty(new_contact_id());
        self.contacts
            .write()
            .await
            .insert(contact.id.clone(), contact.clone());
        Ok(contact)
    }

    async fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        Ok(self.contacts.read().await.get(id).cloned())
    }

    async fn update_contact(&self, id: &str, update: ContactUpdate) -> Result<Contact> {
        let mut contacts = self.contacts.write().await;
        let contact = contacts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        contact.apply(update);
        Ok(contact.clone())
    }

    async fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact> {
        let mut contacts = self.contacts.write().await;
        let contact = contacts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        contact.favorite = favorite;
        Ok(contact.clone())
    }

    async fn delete_contact(&self, id: &str) -> Result<()> {
        self.contacts
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn insert(&self, contact: Contact) -> Result<()> {
        self.contacts
            .write()
            .await
            .insert(contact.id.clone(), contact);
        Ok(())
    }
}
