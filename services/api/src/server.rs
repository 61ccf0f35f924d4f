use crate::cli::ServeArgs;
use crate::infra::{load_dashboard, AppState};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use polywatch::config::{AppConfig, DataConfig};
use polywatch::error::AppError;
use polywatch::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    if let Some(data_dir) = args.data.data_dir.take() {
        config.data = DataConfig::new(data_dir)?;
    }

    telemetry::init(&config.telemetry)?;

    let dashboard = load_dashboard(&config.data).await?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dashboard: Arc::new(dashboard),
    };

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "roster service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
