//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::BillingService;

use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::readings::{self, ReadingsState};
use super::modules::request_id::request_id_middleware;

/// Router state; handlers pick their slice through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub billing: Arc<BillingService>,
    pub started_at: Arc<Instant>,
    pub prometheus: PrometheusHandle,
}

impl FromRef<AppState> for ReadingsState {
    fn from_ref(s: &AppState) -> Self {
        ReadingsState {
            billing: Arc::clone(&s.billing),
        }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            billing: Arc::clone(&s.billing),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for MetricsState {
    fn from_ref(s: &AppState) -> Self {
        MetricsState {
            handle: s.prometheus.clone(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        readings::list_readings,
        readings::get_reading,
        readings::create_reading,
        readings::update_reading,
        readings::delete_reading,
        readings::preview_bill,
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Readings", description = "Meter readings and tiered electricity bills"),
    ),
    info(
        title = "Electricity Billing API",
        description = "Log meter readings and compute tiered electricity bills",
    )
)]
pub struct ApiDoc;

/// Create the full HTTP router
pub fn create_api_router(billing: Arc<BillingService>, prometheus: PrometheusHandle) -> Router {
    let state = AppState {
        billing,
        started_at: Arc::new(Instant::now()),
        prometheus,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/readings",
            get(readings::list_readings).post(readings::create_reading),
        )
        .route("/readings/preview", post(readings::preview_bill))
        .route(
            "/readings/{id}",
            get(readings::get_reading)
                .put(readings::update_reading)
                .delete(readings::delete_reading),
        );

    let form_routes = Router::new()
        .route("/", get(readings::index).post(readings::submit_reading))
        .route(
            "/update/{id}",
            get(readings::edit_reading).post(readings::submit_update),
        )
        .route("/delete/{id}", get(readings::remove_reading));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes)
        .merge(form_routes)
        .route("/health", get(health::health_check))
        .route("/metrics", get(prometheus_metrics))
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────
