use axum::{
    routing::{get, post},
    Router,
};
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkdrop_server::config::Config;
use linkdrop_server::handlers;
use linkdrop_server::handlers::metadata::USER_AGENT;
use linkdrop_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "linkdrop_server=info,tower_http=info".parse().unwrap());

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("🔖 Linkdrop Server starting...");

    let config = Config::from_env();
    info!("📝 Configuration loaded");

    // Outbound client for page fetches. Timeout expiry surfaces to callers as
    // a fetch-metadata failure, never a hung request.
    let http = reqwest::Client::builder()
        .timeout(config.fetch_timeout)
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client");

    // CORS: permissive in dev, restrictive in production.
    let cors = if config.is_dev {
        info!("🔓 CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        tracing::warn!("🔒 CORS: restrictive (production mode). Cross-origin requests will be denied.");
        CorsLayer::new()
    };

    let addr = config.server_addr();
    let app_state = AppState { http };

    // Prometheus metrics layer
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = Router::new()
        // Health check + metrics
        .route("/health", get(handlers::health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        // Metadata extraction
        .route("/metadata/fetch", post(handlers::metadata::fetch_metadata))
        // Middleware
        .layer(prometheus_layer)
        .layer(cors)
        .with_state(app_state);

    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
