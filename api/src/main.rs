use axum::Router;
use axum::extract::MatchedPath;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::{Extension, extract::Request, middleware, routing::get};
use config::Config;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use scheduler::SchedulerGate;
use std::future::ready;
use std::sync::Arc;
use std::time::Instant;
use store::ContentStore;
use store::postgres::PgStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

mod config;
mod error;
mod handlers;
mod scheduler;
mod schema;
mod store;
mod telemetry;

/// Shared request state. Each `State` owns one scheduler gate, so the
/// initialization instant is scoped to the application built from it;
/// `main` builds exactly one.
#[derive(Clone, Debug)]
pub struct State {
    store: Arc<dyn ContentStore>,
    scheduler: Arc<SchedulerGate>,
}

impl State {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        State {
            store,
            scheduler: Arc::new(SchedulerGate::default()),
        }
    }
}

fn main() {
    let config: &'static Config = Box::leak(Box::new(
        Config::new().expect("error: failed to construct config"),
    ));

    // Sentry needs to be initialized outside of an async block, and the guard
    // has to live until the process exits.
    // See https://docs.sentry.io/platforms/rust.
    let _sentry = telemetry::init_sentry(config).expect("error: failed to initialize sentry");

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Corresponds to `#[tokio::main(flavor = "current_thread")]`.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("error: failed to initialize tokio runtime")
        .block_on(start_main_server(config));
}

#[derive(OpenApi)]
#[openapi(info(title = "Folio API"))]
struct ApiDoc;

async fn start_main_server(config: &'static Config) {
    info!(
        environment = %config.environment,
        "Starting up Folio API {}",
        env!("CARGO_PKG_VERSION")
    );

    let store = PgStore::connect_lazy(config).expect("error: invalid DATABASE_URL");
    store.migrate().await.expect("sqlx migration failed");

    let state = State::new(Arc::new(store));
    let recorder_handle = setup_metrics_recorder();

    let app = app(state, recorder_handle);

    let listener = TcpListener::bind(&config.listen_address)
        .await
        .expect("error: failed to bind to port");
    info!("{:<12} - {:?}", "LISTENING", listener.local_addr());

    axum::serve(listener, app.into_make_service())
        .await
        .expect("error: failed to initialize axum server");
}

/// Every route is public: the aggregation endpoints are read-only and the
/// scheduler initialization is idempotent.
fn app(state: State, recorder_handle: PrometheusHandle) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            handlers::system_parameters::get_system_parameters
        ))
        .routes(routes!(handlers::tags::get_tags))
        .routes(routes!(scheduler::routes::init_scheduler))
        .routes(routes!(handlers::health::check))
        .split_for_parts();

    let json_specification = api.to_pretty_json().expect("API docs generation failed");

    router
        .route("/metrics", get(move || ready(recorder_handle.render())))
        .route_layer(middleware::from_fn(track_metrics))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(state)),
        )
        .route(
            "/api-docs/openapi.json",
            get(move || ready(json_specification.clone())),
        )
        .merge(Scalar::with_url("/api-docs", api))
}

fn setup_metrics_recorder() -> PrometheusHandle {
    const EXPONENTIAL_SECONDS: &[f64] = &[
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_requests_duration_seconds".to_string()),
            EXPONENTIAL_SECONDS,
        )
        .expect("error: failed to build prometheus recorder")
        .install_recorder()
        .expect("error: failed to install prometheus recorder")
}

async fn track_metrics(req: Request, next: Next) -> impl IntoResponse {
    let start = Instant::now();
    let path = match req.extensions().get::<MatchedPath>() {
        Some(matched_path) => matched_path.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };
    let method = req.method().clone();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let labels = [
        ("method", method.to_string()),
        ("path", path),
        ("status", response.status().as_u16().to_string()),
    ];

    metrics::increment_counter!("http_requests_total", &labels);
    metrics::histogram!("http_requests_duration_seconds", latency, &labels);

    response
}
