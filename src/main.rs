mod constants;
mod error;
mod forecast;
mod handlers;
mod headers;
mod models;
mod risk;
mod tls;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::{BIND_ADDRESS, BIND_PORT, CERT_FILE, STATIC_ROOT};
use crate::forecast::Forecaster;
use crate::headers::security_headers;

/// Shared by all workers; requests never mutate it
pub struct AppState {
    pub forecaster: Forecaster,
}

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "protection_index_server=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let web_data = web::Data::new(AppState {
        forecaster: Forecaster::new()?,
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web_data.clone())
            .wrap(security_headers())
            .wrap(middleware::Logger::default())
            .configure(|cfg| handlers::configure(cfg, Path::new(STATIC_ROOT)))
    });

    let cert_file = Path::new(CERT_FILE);
    let server = if cert_file.exists() {
        let tls_config = tls::load_server_config(cert_file)?;
        tracing::info!("Starting web server on https://{}:{}", BIND_ADDRESS, BIND_PORT);
        server.bind_rustls_0_23((BIND_ADDRESS, BIND_PORT), tls_config)
    } else {
        tracing::info!("Starting web server on http://{}:{}", BIND_ADDRESS, BIND_PORT);
        server.bind((BIND_ADDRESS, BIND_PORT))
    }
    .with_context(|| format!("Failed to bind {}:{}", BIND_ADDRESS, BIND_PORT))?;

    server.run().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
