//! Navigation state shared between the server render and the shell script
//!
//! Everything here is a pure function of its inputs. The shell never stores
//! derived flags such as "is navigating"; it recomputes them from the current
//! [`NavigationState`] on every render.

/// Whether a page transition is in flight.
///
/// A fresh server render is always [`NavigationState::Idle`]. The shell
/// script moves `data-navigation` on `<body>` through the other states by
/// name: `submitting` while the New form posts, `loading` while a search or
/// link navigation fetches the next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Idle,
    /// A form submission is being processed
    Submitting,
    /// The next page is loading
    Loading,
}

impl NavigationState {
    /// True only while the next page is loading
    pub fn is_navigating(self) -> bool {
        matches!(self, NavigationState::Loading)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationState::Idle => "idle",
            NavigationState::Submitting => "submitting",
            NavigationState::Loading => "loading",
        }
    }
}

/// How a search navigation is recorded in browser history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

impl HistoryMode {
    /// The first search (no `q` in the current URL) gets its own history
    /// entry. Later keystrokes replace it so history holds one entry per
    /// search session rather than one per character.
    pub fn for_search(current_q: Option<&str>) -> Self {
        match current_q {
            None => HistoryMode::Push,
            Some(_) => HistoryMode::Replace,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Push => "push",
            HistoryMode::Replace => "replace",
        }
    }
}

/// Value shown in the search field for the current URL
pub fn search_field_value(q: Option<&str>) -> &str {
    q.unwrap_or("")
}

/// Highlight of a sidebar link relative to the current route.
///
/// The server only knows which contact is shown; `pending` is added by the
/// shell script once a navigation to a link starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Active,
    Inactive,
}

impl LinkState {
    pub fn resolve(contact_id: &str, active: Option<&str>) -> Self {
        if active == Some(contact_id) {
            LinkState::Active
        } else {
            LinkState::Inactive
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            LinkState::Active => Some("active"),
            LinkState::Inactive => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loading_is_navigating() {
        assert!(!NavigationState::Idle.is_navigating());
        assert!(!NavigationState::Submitting.is_navigating());
        assert!(NavigationState::Loading.is_navigating());
    }

    #[test]
    fn test_state_names_match_script() {
        assert_eq!(NavigationState::default().as_str(), "idle");
        assert_eq!(NavigationState::Submitting.as_str(), "submitting");
        assert_eq!(NavigationState::Loading.as_str(), "loading");
    }

    #[test]
    fn test_first_search_pushes() {
        assert_eq!(HistoryMode::for_search(None), HistoryMode::Push);
    }

    #[test]
    fn test_later_searches_replace() {
        assert_eq!(HistoryMode::for_search(Some("ry")), HistoryMode::Replace);
        // `?q=` is still a search in progress
        assert_eq!(HistoryMode::for_search(Some("")), HistoryMode::Replace);
    }

    #[test]
    fn test_search_field_tracks_query() {
        assert_eq!(search_field_value(Some("kent")), "kent");
        assert_eq!(search_field_value(Some("")), "");
        assert_eq!(search_field_value(None), "");
    }

    #[test]
    fn test_only_shown_contact_is_active() {
        assert_eq!(LinkState::resolve("a", Some("a")), LinkState::Active);
        assert_eq!(LinkState::resolve("a", Some("b")), LinkState::Inactive);
        assert_eq!(LinkState::resolve("a", None), LinkState::Inactive);
        assert_eq!(LinkState::Active.class(), Some("active"));
        assert_eq!(LinkState::Inactive.class(), None);
    }
}
