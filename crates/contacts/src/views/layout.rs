//! Root shell: sidebar with search, the New button and the contact list,
//! plus the detail pane

use maud::{DOCTYPE, Markup, html};

use super::sidebar::contact_list;
use crate::contact::Contact;
use crate::navigation::{HistoryMode, NavigationState, search_field_value};

/// Data the shell needs for one render
#[derive(Debug, Clone, Copy, Default)]
pub struct Shell<'a> {
    /// Contacts returned for the current `q`
    pub contacts: &'a [Contact],
    /// `q` from the current URL
    pub q: Option<&'a str>,
    pub navigation: NavigationState,
    /// Contact shown in the detail pane, if any
    pub active_contact: Option<&'a str>,
}

/// Full HTML document with `outlet` in the detail pane
pub fn page(title: &str, shell: &Shell<'_>, outlet: Markup) -> Markup {
    let is_navigating = shell.navigation.is_navigating();
    let history = HistoryMode::for_search(shell.q);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/app.css";
            }
            body data-navigation=(shell.navigation.as_str()) {
                div id="sidebar" {
                    h1 { "Remix Contacts" }
                    div {
                        form id="search-form" role="search" action="/" data-history=(history.as_str()) {
                            input
                                id="q"
                                aria-label="Search contacts"
                                placeholder="Search"
                                type="search"
                                name="q"
                                value=(search_field_value(shell.q))
                                autofocus[shell.q.is_some()];
                            div id="search-spinner" aria-hidden="true" hidden[!is_navigating] {}
                        }
                        form method="post" action="/" {
                            button type="submit" { "New" }
                        }
                    }
                    nav {
                        (contact_list(shell.contacts, shell.active_contact))
                    }
                }
                div id="detail" class=[is_navigating.then_some("loading")] {
                    (outlet)
                }
                script src="/shell.js" {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shell: &Shell<'_>) -> String {
        page("Contacts", shell, html! { p { "outlet" } }).into_string()
    }

    #[test]
    fn test_search_value_reflects_query() {
        let html = render(&Shell {
            q: Some("ryan"),
            ..Default::default()
        });
        assert!(html.contains(r#"name="q" value="ryan""#));

        let html = render(&Shell::default());
        assert!(html.contains(r#"name="q" value="""#));
    }

    #[test]
    fn test_search_value_is_escaped() {
        let html = render(&Shell {
            q: Some(r#""><script>"#),
            ..Default::default()
        });
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }

    #[test]
    fn test_search_field_keeps_focus_while_searching() {
        assert!(!render(&Shell::default()).contains("autofocus"));

        for q in ["r", ""] {
            let html = render(&Shell {
                q: Some(q),
                ..Default::default()
            });
            assert!(html.contains(&format!(r#"name="q" value="{q}" autofocus>"#)));
        }
    }

    #[test]
    fn test_body_carries_navigation_state() {
        assert!(render(&Shell::default()).contains(r#"<body data-navigation="idle">"#));
    }

    #[test]
    fn test_history_mode_attribute() {
        assert!(render(&Shell::default()).contains(r#"data-history="push""#));

        let html = render(&Shell {
            q: Some("k"),
            ..Default::default()
        });
        assert!(html.contains(r#"data-history="replace""#));
    }

    #[test]
    fn test_spinner_hidden_unless_loading() {
        for state in [NavigationState::Idle, NavigationState::Submitting] {
            let html = render(&Shell {
                navigation: state,
                ..Default::default()
            });
            assert!(html.contains(r#"<div id="search-spinner" aria-hidden="true" hidden></div>"#));
            assert!(html.contains(r#"<div id="detail">"#));
        }

        let html = render(&Shell {
            navigation: NavigationState::Loading,
            ..Default::default()
        });
        assert!(html.contains(r#"<div id="search-spinner" aria-hidden="true"></div>"#));
        assert!(html.contains(r#"<div id="detail" class="loading">"#));
    }

    #[test]
    fn test_outlet_is_rendered_in_detail() {
        let html = render(&Shell::default());
        assert!(html.contains(r#"<div id="detail"><p>outlet</p></div>"#));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
