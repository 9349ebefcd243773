//! Actix server for the contact book

pub mod error;
pub mod routes;
mod state;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::{Next, from_fn};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::config::ServerConfig;

pub use error::AppError;
pub use routes::configure;
pub use state::AppState;

pub async fn log_request(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    info!("{} {}", req.method(), req.path());
    next.call(req).await
}

/// Bind and serve until shutdown
pub async fn run(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(from_fn(log_request))
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?;

    for addr in server.addrs() {
        info!("Server running on http://{}", addr);
    }

    server.run().await?;
    Ok(())
}
