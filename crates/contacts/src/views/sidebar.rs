use maud::{Markup, html};

use crate::contact::Contact;
use crate::navigation::LinkState;

/// Sidebar navigation list, or a placeholder when there is nothing to show
pub fn contact_list(contacts: &[Contact], active: Option<&str>) -> Markup {
    html! {
        @if contacts.is_empty() {
            p { i { "No contacts" } }
        } @else {
            ul {
                @for contact in contacts {
                    li {
                        a
                            href=(format!("/contacts/{}", contact.id))
                            class=[LinkState::resolve(&contact.id, active).class()]
                        {
                            (contact_label(contact))
                        }
                    }
                }
            }
        }
    }
}

/// "First Last" or an italic placeholder, then the favorite star
fn contact_label(contact: &Contact) -> Markup {
    html! {
        @match contact.display_name() {
            Some(name) => { (name) }
            None => { i { "No Name" } }
        }
        " "
        @if contact.favorite {
            span { "★" }
        }
    }
}
