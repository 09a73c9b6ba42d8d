use crate::cli::ServeArgs;
use crate::infra::{AppState, HttpPriceGateway, InMemoryPriceGateway};
use crate::routes::with_pricing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use repricer::config::AppConfig;
use repricer::error::AppError;
use repricer::telemetry;
use repricer::workflows::repricing::RepricingService;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let routes = match &config.gateway.backend_url {
        Some(url) => {
            info!(%url, "submitting price changes to the operations backend");
            let gateway = Arc::new(HttpPriceGateway::new(url));
            with_pricing_routes(Arc::new(RepricingService::new(gateway)))
        }
        None => {
            info!("no backend configured; price changes stay in memory");
            let gateway = Arc::new(InMemoryPriceGateway::default());
            with_pricing_routes(Arc::new(RepricingService::new(gateway)))
        }
    };

    let app = routes
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "price propagation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
