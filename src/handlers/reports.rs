use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse, error_response};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::CorrectionChargeReport;
use compute::grouping;
use tracing::{debug, instrument};

/// Get the correction-charge grouping of an invoice's timesheet lines
///
/// Traverses the invoice's analytic invoices down to the detail timesheet
/// lines and partitions them by (project, user). Only projects flagged
/// both correction-chargeable and included in the specs invoice report
/// contribute. Results are cached until the invoice or a timesheet line
/// changes.
#[utoipa::path(
    get,
    path = "/api/v1/invoices/{invoice_id}/timesheet-groups",
    tag = "reports",
    params(
        ("invoice_id" = i32, Path, description = "Invoice ID"),
    ),
    responses(
        (status = 200, description = "Report retrieved successfully", body = ApiResponse<CorrectionChargeReport>),
        (status = 404, description = "Invoice not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_timesheet_groups(
    Path(invoice_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CorrectionChargeReport>>, (StatusCode, Json<ErrorResponse>)> {
    let cache_key = format!("timesheet_groups:{invoice_id}");

    let report = match state.cache.get(&cache_key).await {
        Some(CachedData::Report(report)) => {
            debug!("report cache hit");
            report
        }
        None => {
            let report = grouping::timesheet_by_group(&state.db, invoice_id)
                .await
                .map_err(error_response)?;
            state
                .cache
                .insert(cache_key, CachedData::Report(report.clone()))
                .await;
            report
        }
    };

    let response = ApiResponse {
        data: report,
        message: "Report retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
