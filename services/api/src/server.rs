use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ispdn::assessment::AssessmentState;
use ispdn::config::AppConfig;
use ispdn::error::AppError;
use ispdn::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(template_dir) = args.template_dir.take() {
        config.documents.template_dir = template_dir;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let act_template = config.documents.act_template_path();
    if !act_template.is_file() {
        warn!(path = %act_template.display(), "act template missing; /export/act will answer 404");
    }
    let assessment = Arc::new(AssessmentState { act_template });

    let app = with_service_routes(assessment)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ispdn assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
