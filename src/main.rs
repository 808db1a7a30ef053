mod core;
mod features;
mod shared;

use crate::core::config::{Config, StorageBackend};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::regions::{
    routes as regions_routes, InMemoryRegionRepository, PgRegionRepository, RegionRepository,
    RegionService,
};
use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Assemble the HTTP surface: regions, health check, API docs and the shared layers
fn app(config: &Config, region_service: Arc<RegionService>) -> Router {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    }
    .modify(&mut openapi);
    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    Router::new()
        .merge(swagger)
        .merge(regions_routes::routes(region_service))
        .merge(health_route)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded (tokio_worker_threads={}, pid={})",
        worker_threads,
        std::process::id()
    );

    // Pick the region store
    let repository: Arc<dyn RegionRepository> = match config.storage.backend {
        StorageBackend::Postgres => {
            let db_config = config
                .database
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("Postgres storage selected without DATABASE_URL"))?;
            let pool = database::connect(db_config).await?;
            Arc::new(PgRegionRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory region storage; data is lost on restart");
            Arc::new(InMemoryRegionRepository::new())
        }
    };

    let region_service = Arc::new(RegionService::new(
        repository,
        config.storage.validation_enabled,
    ));
    tracing::info!(
        "Region service initialized (backend={:?}, validation_enabled={})",
        config.storage.backend,
        config.storage.validation_enabled
    );

    let app = app(&config, region_service);

    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, StorageConfig, SwaggerConfig};
    use crate::features::regions::dtos::RegionDto;
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::json;

    fn test_config(max_request_body_size: usize, cors_allowed_origins: Vec<String>) -> Config {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins,
                max_request_body_size,
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                validation_enabled: false,
            },
            database: None,
            swagger: SwaggerConfig {
                title: "Regions API".to_string(),
                version: "0.1.0".to_string(),
                description: "test".to_string(),
            },
        }
    }

    fn server(config: &Config) -> TestServer {
        let repository = Arc::new(InMemoryRegionRepository::new());
        let service = Arc::new(RegionService::new(repository, false));
        TestServer::new(app(config, service)).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = server(&test_config(1024 * 1024, vec!["*".to_string()]));

        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected_and_not_stored() {
        let server = server(&test_config(64, vec!["*".to_string()]));

        let response = server
            .post("/regions")
            .json(&json!({
                "code": "WLG",
                "name": "Wellington, the capital region at the bottom of the North Island",
                "area": 227755,
                "lat": -41.28,
                "long": 174.77,
                "population": 212700
            }))
            .await;
        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);

        let listed: Vec<RegionDto> = server.get("/regions").await.json();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_body_within_limit_is_accepted() {
        let server = server(&test_config(1024, vec!["*".to_string()]));

        server
            .post("/regions")
            .json(&json!({
                "code": "WLG",
                "name": "Wellington",
                "area": 227755,
                "lat": -41.28,
                "long": 174.77,
                "population": 212700
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_cors_exposes_location_header() {
        let server = server(&test_config(1024 * 1024, vec!["http://app.test".to_string()]));

        let response = server
            .get("/regions")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://app.test"))
            .await;
        response.assert_status_ok();

        assert_eq!(
            response.header("access-control-allow-origin"),
            "http://app.test"
        );
        let exposed = response.header("access-control-expose-headers");
        assert!(exposed
            .to_str()
            .unwrap()
            .to_lowercase()
            .contains("location"));
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let server = server(&test_config(1024 * 1024, vec!["*".to_string()]));

        let response = server.get("/health").await;
        assert!(!response.header("x-request-id").is_empty());
    }
}
