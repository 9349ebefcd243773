//! Detail pane contents: index, contact card and edit form

use maud::{Markup, html};

use crate::contact::Contact;

/// Detail pane when no contact is selected
pub fn index() -> Markup {
    html! {
        p id="index-page" {
            "Pick a contact from the sidebar, or press "
            b { "New" }
            " to start a fresh one."
        }
    }
}

pub fn contact_detail(contact: &Contact) -> Markup {
    let name = contact.display_name();

    html! {
        div id="contact" {
            div {
                @if let Some(avatar) = &contact.avatar {
                    img
                        alt=(format!("{} avatar", name.as_deref().unwrap_or("Contact")))
                        src=(avatar);
                }
            }
            div {
                h1 {
                    @match &name {
                        Some(name) => { (name) }
                        None => { i { "No Name" } }
                    }
                    " "
                    (favorite_form(contact))
                }

                @if let Some(twitter) = &contact.twitter {
                    p {
                        a href=(format!("https://twitter.com/{}", twitter.trim_start_matches('@'))) {
                            (twitter)
                        }
                    }
                }

                @if let Some(notes) = &contact.notes {
                    p { (notes) }
                }

                div {
                    form action=(format!("/contacts/{}/edit", contact.id)) method="get" {
                        button type="submit" { "Edit" }
                    }
                    form
                        action=(format!("/contacts/{}/destroy", contact.id))
                        method="post"
                        onsubmit="return confirm('Please confirm you want to delete this record.');"
                    {
                        button type="submit" { "Delete" }
                    }
                }
            }
        }
    }
}

fn favorite_form(contact: &Contact) -> Markup {
    let (label, value, star) = if contact.favorite {
        ("Remove from favorites", "false", "★")
    } else {
        ("Add to favorites", "true", "☆")
    };

    html! {
        form method="post" action=(format!("/contacts/{}/favorite", contact.id)) {
            button aria-label=(label) name="favorite" value=(value) { (star) }
        }
    }
}

pub fn contact_edit(contact: &Contact) -> Markup {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();

    html! {
        form id="contact-form" method="post" action=(format!("/contacts/{}/edit", contact.id)) {
            p {
                span { "Name" }
                input
                    aria-label="First name"
                    name="first"
                    placeholder="First"
                    type="text"
                    value=(field(&contact.first));
                input
                    aria-label="Last name"
                    name="last"
                    placeholder="Last"
                    type="text"
                    value=(field(&contact.last));
            }
            label {
                span { "Twitter" }
                input name="twitter" placeholder="@jack" type="text" value=(field(&contact.twitter));
            }
            label {
                span { "Avatar URL" }
                input
                    aria-label="Avatar URL"
                    name="avatar"
                    placeholder="https://example.com/avatar.jpg"
                    type="text"
                    value=(field(&contact.avatar));
            }
            label {
                span { "Notes" }
                textarea name="notes" rows="6" { (field(&contact.notes)) }
            }
            p {
                button type="submit" { "Save" }
                button type="button" onclick="history.back()" { "Cancel" }
            }
        }
    }
}
