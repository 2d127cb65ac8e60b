use crate::handlers::{
    date_ranges::{create_date_range, get_date_ranges},
    health::health_check,
    invoices::{
        cancel_invoice, create_invoice, get_invoice, open_invoice, reset_target_amount,
        set_target_amount,
    },
    reports::get_timesheet_groups,
    timesheet_lines::{
        create_timesheet_line, get_timesheet_line, get_timesheet_lines, update_timesheet_line,
    },
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Reporting periods
        .route("/api/v1/date-ranges", post(create_date_range))
        .route("/api/v1/date-ranges", get(get_date_ranges))
        // Timesheet lines
        .route("/api/v1/timesheet-lines", post(create_timesheet_line))
        .route("/api/v1/timesheet-lines", get(get_timesheet_lines))
        .route("/api/v1/timesheet-lines/:line_id", get(get_timesheet_line))
        .route(
            "/api/v1/timesheet-lines/:line_id",
            put(update_timesheet_line),
        )
        // Invoice lifecycle
        .route("/api/v1/invoices", post(create_invoice))
        .route("/api/v1/invoices/:invoice_id", get(get_invoice))
        .route("/api/v1/invoices/:invoice_id/open", post(open_invoice))
        .route("/api/v1/invoices/:invoice_id/cancel", post(cancel_invoice))
        .route(
            "/api/v1/invoices/:invoice_id/target-amount",
            post(set_target_amount),
        )
        .route(
            "/api/v1/invoices/:invoice_id/reset-target-amount",
            post(reset_target_amount),
        )
        // Reports
        .route(
            "/api/v1/invoices/:invoice_id/timesheet-groups",
            get(get_timesheet_groups),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
