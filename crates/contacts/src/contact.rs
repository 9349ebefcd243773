//! Contact records and the form used to edit them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the contact book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// A contact with no fields filled in
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first: None,
            last: None,
            avatar: None,
            twitter: None,
            notes: None,
            favorite: false,
            created_at: Utc::now(),
        }
    }

    /// "First Last", or `None` when neither name is set
    pub fn display_name(&self) -> Option<String> {
        let first = non_empty(self.first.as_deref());
        let last = non_empty(self.last.as_deref());

        match (first, last) {
            (None, None) => None,
            (first, last) => Some(format!("{} {}", first.unwrap_or(""), last.unwrap_or(""))),
        }
    }

    /// Case-insensitive substring match against first or last name.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        let needle = query.to_lowercase();
        [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .any(|name| name.to_lowercase().contains(&needle))
    }

    pub(crate) fn apply(&mut self, update: ContactUpdate) {
        self.first = update.first;
        self.last = update.last;
        self.avatar = update.avatar;
        self.twitter = update.twitter;
        self.notes = update.notes;
    }
}

/// Replacement values for the editable fields of a contact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
}

/// Edit form as posted by the browser
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub notes: String,
}

impl From<ContactForm> for ContactUpdate {
    fn from(form: ContactForm) -> Self {
        Self {
            first: normalize(form.first),
            last: normalize(form.last),
            avatar: normalize(form.avatar),
            twitter: normalize(form.twitter),
            notes: normalize(form.notes),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// Blank form fields are stored as absent
fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
