use analytics::LossAnalyzer;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use configuration::Settings;
use records::CsvSource;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};
// Note: Tracing is handled by the main application configuration

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub analyzer: LossAnalyzer,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            analyzer: LossAnalyzer::new(),
        }
    }

    /// The CSV behind the dashboard and the empty-form fallback.
    pub fn sample_source(&self) -> CsvSource {
        CsvSource::new(&self.settings.data.sample_csv)
    }
}

/// Builds the application routes around the given state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/analyze", post(handlers::post_analyze))
        .with_state(Arc::new(state))
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024)) // Set a 1MB body limit
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, settings: Settings) -> anyhow::Result<()> {
    let sample_csv = settings.data.sample_csv.clone();
    let app = create_router(AppState::new(settings));

    tracing::info!(%addr, sample_csv = %sample_csv.display(), "Web server listening.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
