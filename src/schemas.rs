use axum::http::StatusCode;
use axum::response::Json;
use common::{CorrectionChargeReport, ProjectUserBucket, TimesheetLineDto};
use compute::ComputeError;
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for expensive operations
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Report(CorrectionChargeReport),
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Maps compute errors onto HTTP responses. The missing WIP sequence is a
/// configuration problem the caller can fix, so it gets a 422 with the
/// full message rather than a bare 500.
pub fn error_response(error: ComputeError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &error {
        ComputeError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ComputeError::MissingWipSequence => {
            (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_WIP_SEQUENCE")
        }
        ComputeError::Invoice(_) => (StatusCode::CONFLICT, "INVALID_STATE"),
        ComputeError::Database(_) | ComputeError::DataFrame(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::date_ranges::create_date_range,
        crate::handlers::date_ranges::get_date_ranges,
        crate::handlers::timesheet_lines::create_timesheet_line,
        crate::handlers::timesheet_lines::get_timesheet_lines,
        crate::handlers::timesheet_lines::get_timesheet_line,
        crate::handlers::timesheet_lines::update_timesheet_line,
        crate::handlers::invoices::create_invoice,
        crate::handlers::invoices::get_invoice,
        crate::handlers::invoices::open_invoice,
        crate::handlers::invoices::cancel_invoice,
        crate::handlers::invoices::set_target_amount,
        crate::handlers::invoices::reset_target_amount,
        crate::handlers::reports::get_timesheet_groups,
    ),
    components(
        schemas(
            ApiResponse<crate::handlers::timesheet_lines::TimesheetLineResponse>,
            ApiResponse<crate::handlers::invoices::InvoiceResponse>,
            ApiResponse<crate::handlers::date_ranges::DateRangeResponse>,
            ApiResponse<CorrectionChargeReport>,
            ErrorResponse,
            HealthResponse,
            crate::handlers::date_ranges::CreateDateRangeRequest,
            crate::handlers::date_ranges::DateRangeResponse,
            crate::handlers::timesheet_lines::CreateTimesheetLineRequest,
            crate::handlers::timesheet_lines::UpdateTimesheetLineRequest,
            crate::handlers::timesheet_lines::TimesheetLineResponse,
            crate::handlers::invoices::CreateInvoiceRequest,
            crate::handlers::invoices::CreateInvoiceLineRequest,
            crate::handlers::invoices::OpenInvoiceRequest,
            crate::handlers::invoices::TargetAmountRequest,
            crate::handlers::invoices::InvoiceResponse,
            crate::handlers::invoices::InvoiceLineResponse,
            CorrectionChargeReport,
            ProjectUserBucket,
            TimesheetLineDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "date-ranges", description = "Reporting period endpoints"),
        (name = "timesheet-lines", description = "Timesheet line endpoints"),
        (name = "invoices", description = "Invoice lifecycle endpoints"),
        (name = "reports", description = "Correction-charge reporting endpoints"),
    ),
    info(
        title = "Timebill API",
        description = "Timesheet invoicing backend - period classification, WIP journal entries and correction-charge reporting",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
