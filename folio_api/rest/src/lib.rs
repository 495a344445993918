use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Extension, Router,
};
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_health_contracts::HealthFeatureService;
use folio_models::Environment;
use folio_utils::Apply;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

mod errors;
mod extractors;
mod macros;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub address: SocketAddr,
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes.
    pub body_limit: usize,
    pub environment: Environment,
    pub real_ip: Option<Arc<RealIpConfig>>,
    /// Applies to every route under `/api`. `None` disables rate limiting.
    pub rate_limit: Option<RateLimitConfig>,
}

#[derive(Debug, Clone)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Requests allowed per client ip within one window.
    pub max_requests: u32,
    pub window: Duration,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(health: Health, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            health,
            contact,
            config,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let address = self.config.address;
        let router = self.router()?;

        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind to {address}"))?;
        info!("Listening on http://{address}");

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    fn router(self) -> anyhow::Result<Router<()>> {
        let cors = cors_layer(&self.config.allowed_origins)?;
        let environment = self.config.environment;

        let api = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .apply(middlewares::rate_limit::add(self.config.rate_limit));

        Ok(Router::new()
            .nest("/api", api)
            .fallback(routes::not_found)
            .layer(Extension(environment))
            .layer(DefaultBodyLimit::max(self.config.body_limit))
            .apply(middlewares::panic_handler::add(environment))
            .apply(middlewares::trace::add)
            .apply(middlewares::request_id::add)
            .apply(middlewares::client_ip::add(self.config.real_ip))
            .layer(cors))
    }
}

fn cors_layer(allowed_origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            // credentials cannot be allowed for any origin
            anyhow::ensure!(
                origin != "*",
                "Wildcard allowed origin is not supported, list the origins explicitly"
            );
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid allowed origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
