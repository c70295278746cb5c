use crate::cli::ServeArgs;
use crate::infra::{
    matrix_page, scoring_engine, AppState, InMemoryRecordRepository, StaticProfileDirectory,
};
use crate::routes::with_matrix_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pmo_dashboard::config::AppConfig;
use pmo_dashboard::error::AppError;
use pmo_dashboard::telemetry;
use pmo_dashboard::workflows::prioritization::{MatrixState, PrioritizationService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryRecordRepository::default());
    let service = Arc::new(PrioritizationService::new(repository, scoring_engine()));
    let matrix_state = MatrixState {
        service,
        profiles: Arc::new(StaticProfileDirectory::default()),
        page: matrix_page(),
    };

    let app = with_matrix_routes(matrix_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "pmo dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
