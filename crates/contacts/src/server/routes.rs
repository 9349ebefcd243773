//! HTTP routes
//!
//! Every page renders the root shell, so every page handler runs the same
//! loader: read `q` from its own URL and fetch the matching contacts.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header::{self, ContentType};
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use maud::Markup;
use serde::Deserialize;
use tracing::{debug, info};

use super::error::AppError;
use super::state::AppState;
use crate::contact::{Contact, ContactForm, ContactUpdate};
use crate::views::{self, Shell};

/// Configure routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(root))
            .route(web::post().to(create_contact)),
    )
    .service(web::resource("/app.css").route(web::get().to(stylesheet)))
    .service(web::resource("/shell.js").route(web::get().to(shell_script)))
    .service(web::resource("/contacts/{id}").route(web::get().to(show_contact)))
    .service(
        web::resource("/contacts/{id}/edit")
            .route(web::get().to(edit_contact))
            .route(web::post().to(update_contact)),
    )
    .service(web::resource("/contacts/{id}/favorite").route(web::post().to(set_favorite)))
    .service(web::resource("/contacts/{id}/destroy").route(web::post().to(destroy_contact)));
}

/// Query string of any page rendering the shell
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// Take the first `q` and ignore repeats and unrelated keys
    pub fn from_query(query: &str) -> Self {
        let q = web::Query::<Vec<(String, String)>>::from_query(query)
            .ok()
            .and_then(|pairs| pairs.into_inner().into_iter().find(|(key, _)| key == "q"))
            .map(|(_, value)| value);
        Self { q }
    }
}

impl FromRequest for SearchParams {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_query(req.query_string())))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FavoriteForm {
    #[serde(default)]
    pub favorite: String,
}

/// Render `outlet` inside the shell, with the contact list for `q`
async fn render_shell(
    state: &AppState,
    params: &SearchParams,
    active_contact: Option<&str>,
    title: &str,
    outlet: Markup,
) -> Result<HttpResponse, AppError> {
    let q = params.q.as_deref();
    let contacts = state.store.get_contacts(q).await?;
    debug!("Loaded {} contacts for q={:?}", contacts.len(), q);

    let shell = Shell {
        contacts: &contacts,
        q,
        active_contact,
        ..Default::default()
    };
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::page(title, &shell, outlet).into_string()))
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

async fn find_contact(state: &AppState, id: &str) -> Result<Contact, AppError> {
    state
        .store
        .get_contact(id)
        .await?
        .ok_or_else(|| AppError::ContactNotFound(id.to_string()))
}

/// Index page
async fn root(
    state: web::Data<AppState>,
    params: SearchParams,
) -> Result<HttpResponse, AppError> {
    render_shell(&state, &params, None, "Remix Contacts", views::index()).await
}

/// "New": create an empty contact and go straight to its edit form
async fn create_contact(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let contact = state.store.create_empty_contact().await?;
    info!("Created contact {}", contact.id);
    Ok(redirect(&format!("/contacts/{}/edit", contact.id)))
}

async fn show_contact(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: SearchParams,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let contact = find_contact(&state, &id).await?;
    let title = contact
        .display_name()
        .unwrap_or_else(|| "No Name".to_string());

    render_shell(&state, &params, Some(id.as_str()), &title, views::contact_detail(&contact)).await
}

async fn edit_contact(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: SearchParams,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let contact = find_contact(&state, &id).await?;

    render_shell(&state, &params, Some(id.as_str()), "Edit contact", views::contact_edit(&contact)).await
}

async fn update_contact(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let update = ContactUpdate::from(form.into_inner());
    state.store.update_contact(&id, update).await?;
    info!("Updated contact {}", id);
    Ok(redirect(&format!("/contacts/{}", id)))
}

async fn set_favorite(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<FavoriteForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let favorite = form.favorite == "true";
    state.store.set_favorite(&id, favorite).await?;
    debug!("Contact {} favorite={}", id, favorite);
    Ok(redirect(&format!("/contacts/{}", id)))
}

async fn destroy_contact(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    state.store.delete_contact(&id).await?;
    info!("Deleted contact {}", id);
    Ok(redirect("/"))
}

async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(views::APP_CSS)
}

async fn shell_script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/javascript; charset=utf-8")
        .body(views::SHELL_JS)
}
