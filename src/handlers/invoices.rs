use crate::schemas::{ApiResponse, AppState, ErrorResponse, error_response};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{NaiveDate, Utc};
use compute::{target, wip};
use model::entities::invoice::{self, InvoiceState, InvoiceType};
use model::entities::invoice_line;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

/// Request body for one line of a new invoice
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInvoiceLineRequest {
    /// Line description
    pub name: String,
    pub quantity: Decimal,
    pub price_unit: Decimal,
    /// Revenue/expense account of the line
    pub account_id: i32,
    pub product_id: Option<i32>,
    /// Analytic invoice this line bills; drives the WIP month lookup
    pub analytic_invoice_id: Option<i32>,
    /// Timesheet user attribution, propagated onto the generated move lines
    pub user_id: Option<i32>,
    /// Grouped analytic (user total) line this invoice line was built from
    pub user_task_total_line_id: Option<i32>,
}

/// Request body for creating a draft invoice
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInvoiceRequest {
    /// Invoice type: "out_invoice", "out_refund", "in_invoice" or "in_refund"
    #[schema(value_type = String)]
    pub invoice_type: InvoiceType,
    pub journal_id: i32,
    /// Receivable/payable counterpart account
    pub account_id: i32,
    pub date_invoice: Option<NaiveDate>,
    pub lines: Vec<CreateInvoiceLineRequest>,
}

/// Request body for opening a draft invoice
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OpenInvoiceRequest {
    /// Posting date; defaults to today when omitted and the invoice
    /// carries no date of its own
    pub date: Option<NaiveDate>,
}

/// Request body for setting the target invoice amount
#[derive(Debug, Deserialize, ToSchema)]
pub struct TargetAmountRequest {
    /// Desired untaxed total
    pub target_invoice_amount: Decimal,
}

/// Invoice line response model
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceLineResponse {
    pub id: i32,
    pub name: String,
    pub quantity: Decimal,
    pub price_unit: Decimal,
    pub discount: Decimal,
    pub account_id: i32,
    pub product_id: Option<i32>,
    pub analytic_invoice_id: Option<i32>,
    pub user_id: Option<i32>,
}

impl From<invoice_line::Model> for InvoiceLineResponse {
    fn from(model: invoice_line::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            price_unit: model.price_unit,
            discount: model.discount,
            account_id: model.account_id,
            product_id: model.product_id,
            analytic_invoice_id: model.analytic_invoice_id,
            user_id: model.user_id,
        }
    }
}

/// Invoice response model
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceResponse {
    pub id: i32,
    pub number: Option<String>,
    #[schema(value_type = String)]
    pub invoice_type: InvoiceType,
    #[schema(value_type = String)]
    pub state: InvoiceState,
    pub date_invoice: Option<NaiveDate>,
    pub journal_id: i32,
    pub account_id: i32,
    pub move_id: Option<i32>,
    pub wip_move_id: Option<i32>,
    pub target_invoice_amount: Option<Decimal>,
    /// Fiscal month period the billed work belongs to
    pub month_id: Option<i32>,
    pub lines: Vec<InvoiceLineResponse>,
}

async fn invoice_response(
    state: &AppState,
    model: invoice::Model,
) -> Result<InvoiceResponse, (StatusCode, Json<ErrorResponse>)> {
    let month = wip::invoice_month(&state.db, model.id)
        .await
        .map_err(error_response)?;
    let lines = invoice_line::Entity::find()
        .filter(invoice_line::Column::InvoiceId.eq(model.id))
        .order_by_asc(invoice_line::Column::Id)
        .all(&state.db)
        .await
        .map_err(|error| error_response(error.into()))?;

    Ok(InvoiceResponse {
        id: model.id,
        number: model.number,
        invoice_type: model.invoice_type,
        state: model.state,
        date_invoice: model.date_invoice,
        journal_id: model.journal_id,
        account_id: model.account_id,
        move_id: model.move_id,
        wip_move_id: model.wip_move_id,
        target_invoice_amount: model.target_invoice_amount,
        month_id: month.map(|range| range.id),
        lines: lines.into_iter().map(InvoiceLineResponse::from).collect(),
    })
}

fn report_cache_key(invoice_id: i32) -> String {
    format!("timesheet_groups:{invoice_id}")
}

/// Create a draft invoice with its lines
#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    tag = "invoices",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 201, description = "Invoice created successfully", body = ApiResponse<InvoiceResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<InvoiceResponse>>), (StatusCode, Json<ErrorResponse>)> {
    let new_invoice = invoice::ActiveModel {
        invoice_type: Set(request.invoice_type),
        state: Set(InvoiceState::Draft),
        date_invoice: Set(request.date_invoice),
        journal_id: Set(request.journal_id),
        account_id: Set(request.account_id),
        ..Default::default()
    };

    let model = new_invoice
        .insert(&state.db)
        .await
        .map_err(|error| error_response(error.into()))?;

    for line in request.lines {
        invoice_line::ActiveModel {
            invoice_id: Set(model.id),
            name: Set(line.name),
            quantity: Set(line.quantity),
            price_unit: Set(line.price_unit),
            discount: Set(Decimal::ZERO),
            account_id: Set(line.account_id),
            product_id: Set(line.product_id),
            analytic_invoice_id: Set(line.analytic_invoice_id),
            user_id: Set(line.user_id),
            user_task_total_line_id: Set(line.user_task_total_line_id),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|error| error_response(error.into()))?;
    }

    let response = ApiResponse {
        data: invoice_response(&state, model).await?,
        message: "Invoice created successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get an invoice by ID
#[utoipa::path(
    get,
    path = "/api/v1/invoices/{invoice_id}",
    tag = "invoices",
    params(
        ("invoice_id" = i32, Path, description = "Invoice ID"),
    ),
    responses(
        (status = 200, description = "Invoice retrieved successfully", body = ApiResponse<InvoiceResponse>),
        (status = 404, description = "Invoice not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_invoice(
    Path(invoice_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<InvoiceResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let model = invoice::Entity::find_by_id(invoice_id)
        .one(&state.db)
        .await
        .map_err(|error| error_response(error.into()))?
        .ok_or_else(|| {
            error_response(compute::ComputeError::NotFound(format!(
                "invoice {invoice_id}"
            )))
        })?;

    let response = ApiResponse {
        data: invoice_response(&state, model).await?,
        message: "Invoice retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Open a draft invoice
///
/// Numbers the invoice, posts its accounting move and, for customer
/// invoices billing work from an earlier month, creates the WIP journal
/// entry with its next-day reversal.
#[utoipa::path(
    post,
    path = "/api/v1/invoices/{invoice_id}/open",
    tag = "invoices",
    params(
        ("invoice_id" = i32, Path, description = "Invoice ID"),
    ),
    request_body = OpenInvoiceRequest,
    responses(
        (status = 200, description = "Invoice opened successfully", body = ApiResponse<InvoiceResponse>),
        (status = 404, description = "Invoice not found", body = ErrorResponse),
        (status = 409, description = "Invoice is not in draft state", body = ErrorResponse),
        (status = 422, description = "WIP journal has no sequence", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn open_invoice(
    Path(invoice_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<OpenInvoiceRequest>,
) -> Result<Json<ApiResponse<InvoiceResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let today = request.date.unwrap_or_else(|| Utc::now().date_naive());

    let model = wip::open_invoice(&state.db, invoice_id, today)
        .await
        .map_err(error_response)?;
    state.cache.invalidate(&report_cache_key(invoice_id)).await;

    let response = ApiResponse {
        data: invoice_response(&state, model).await?,
        message: "Invoice opened successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Cancel an invoice
///
/// Unlinks and deletes the WIP journal entry and the invoice's own move.
#[utoipa::path(
    post,
    path = "/api/v1/invoices/{invoice_id}/cancel",
    tag = "invoices",
    params(
        ("invoice_id" = i32, Path, description = "Invoice ID"),
    ),
    responses(
        (status = 200, description = "Invoice cancelled successfully", body = ApiResponse<InvoiceResponse>),
        (status = 404, description = "Invoice not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn cancel_invoice(
    Path(invoice_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<InvoiceResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let model = wip::cancel_invoice(&state.db, invoice_id)
        .await
        .map_err(error_response)?;
    state.cache.invalidate(&report_cache_key(invoice_id)).await;

    let response = ApiResponse {
        data: invoice_response(&state, model).await?,
        message: "Invoice cancelled successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Set the target invoice amount
///
/// Stores the target and applies it as a uniform discount across the
/// invoice's lines.
#[utoipa::path(
    post,
    path = "/api/v1/invoices/{invoice_id}/target-amount",
    tag = "invoices",
    params(
        ("invoice_id" = i32, Path, description = "Invoice ID"),
    ),
    request_body = TargetAmountRequest,
    responses(
        (status = 200, description = "Target amount applied successfully", body = ApiResponse<InvoiceResponse>),
        (status = 404, description = "Invoice not found", body = ErrorResponse),
        (status = 409, description = "Invoice has a zero untaxed total", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn set_target_amount(
    Path(invoice_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<TargetAmountRequest>,
) -> Result<Json<ApiResponse<InvoiceResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let model = invoice::Entity::find_by_id(invoice_id)
        .one(&state.db)
        .await
        .map_err(|error| error_response(error.into()))?
        .ok_or_else(|| {
            error_response(compute::ComputeError::NotFound(format!(
                "invoice {invoice_id}"
            )))
        })?;

    let mut active: invoice::ActiveModel = model.into();
    active.target_invoice_amount = Set(Some(request.target_invoice_amount));
    let model = active
        .update(&state.db)
        .await
        .map_err(|error| error_response(error.into()))?;

    target::compute_target_invoice_amount(&state.db, model.id)
        .await
        .map_err(error_response)?;

    let response = ApiResponse {
        data: invoice_response(&state, model).await?,
        message: "Target amount applied successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Reset the target invoice amount
///
/// Clears the stored target and the per-line discounts it produced.
#[utoipa::path(
    post,
    path = "/api/v1/invoices/{invoice_id}/reset-target-amount",
    tag = "invoices",
    params(
        ("invoice_id" = i32, Path, description = "Invoice ID"),
    ),
    responses(
        (status = 200, description = "Target amount reset successfully", body = ApiResponse<InvoiceResponse>),
        (status = 404, description = "Invoice not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn reset_target_amount(
    Path(invoice_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<InvoiceResponse>>, (StatusCode, Json<ErrorResponse>)> {
    target::reset_target_invoice_amount(&state.db, invoice_id)
        .await
        .map_err(error_response)?;

    let model = invoice::Entity::find_by_id(invoice_id)
        .one(&state.db)
        .await
        .map_err(|error| error_response(error.into()))?
        .ok_or_else(|| {
            error_response(compute::ComputeError::NotFound(format!(
                "invoice {invoice_id}"
            )))
        })?;

    let mut active: invoice::ActiveModel = model.into();
    active.target_invoice_amount = Set(None);
    let model = active
        .update(&state.db)
        .await
        .map_err(|error| error_response(error.into()))?;

    let response = ApiResponse {
        data: invoice_response(&state, model).await?,
        message: "Target amount reset successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
