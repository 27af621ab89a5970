use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use postcode_eligibility::classification::{load_or_empty, SharedSnapshot, UpdatePipeline};
use postcode_eligibility::config::AppConfig;
use postcode_eligibility::error::AppError;
use postcode_eligibility::telemetry;
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

    telemetry::init(&config.telemetry)?;

    let pipeline = Arc::new(UpdatePipeline::from_config(&config));
    let snapshot = SharedSnapshot::new(load_or_empty(pipeline.store()));
    info!(
        postcodes = snapshot.len(),
        path = %config.storage.data_path.display(),
        "snapshot loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        snapshot: snapshot.clone(),
        pipeline,
        update_lock: Arc::new(tokio::sync::Mutex::new(())),
    };

    let app = with_service_routes(snapshot)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "postcode eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
