//! Error boundary for every route

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, info};

use crate::storage::StoreError;
use crate::views::error_page;

/// Anything a handler can fail with. None of these are recovered locally;
/// they all render the generic error page.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ContactNotFound(_) | AppError::Store(StoreError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            info!("{}", self);
        }

        let page = error_page(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error"),
            &self.to_string(),
        );
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(page.into_string())
    }
}
