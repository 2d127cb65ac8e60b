use crate::schemas::{ApiResponse, AppState, ErrorResponse, error_response};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use compute::timesheet::{self, NewTimesheetLine, TimesheetLineUpdate};
use model::entities::timesheet_line::{self, TimesheetState, Uom};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

/// Request body for creating a timesheet line
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTimesheetLineRequest {
    /// Line description
    pub name: String,
    /// Work date; may be omitted for aggregating parent lines
    pub date: Option<NaiveDate>,
    /// Quantity in the unit of measure (hours for hour lines)
    pub unit_amount: Decimal,
    /// Monetary amount of the line
    pub amount: Decimal,
    /// Unit of measure: "hour" or "unit"
    #[schema(value_type = String)]
    pub uom: Uom,
    /// User who worked the hours
    pub user_id: i32,
    /// Company the line belongs to
    pub company_id: i32,
    /// Task the hours were worked on
    pub task_id: Option<i32>,
    /// Project; derived reporting falls back to the task's project
    pub project_id: Option<i32>,
    /// Aggregating parent line
    pub parent_id: Option<i32>,
}

/// Request body for updating a timesheet line
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTimesheetLineRequest {
    /// Line description
    pub name: Option<String>,
    /// Work date
    pub date: Option<NaiveDate>,
    /// Quantity in the unit of measure
    pub unit_amount: Option<Decimal>,
    /// Monetary amount of the line
    pub amount: Option<Decimal>,
    /// Task the hours were worked on
    pub task_id: Option<i32>,
    /// User who worked the hours
    pub user_id: Option<i32>,
    /// Project
    pub project_id: Option<i32>,
    /// Billing state
    #[schema(value_type = Option<String>)]
    pub state: Option<TimesheetState>,
}

/// Timesheet line response model, including the derived fields
#[derive(Debug, Serialize, ToSchema)]
pub struct TimesheetLineResponse {
    pub id: i32,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub unit_amount: Decimal,
    pub amount: Decimal,
    #[schema(value_type = String)]
    pub uom: Uom,
    #[schema(value_type = String)]
    pub state: TimesheetState,
    pub user_id: i32,
    pub company_id: i32,
    pub task_id: Option<i32>,
    pub project_id: Option<i32>,
    /// Resolved from the (task, user) assignment
    pub product_id: Option<i32>,
    /// Derived week period
    pub week_id: Option<i32>,
    /// Derived fiscal month period
    pub month_id: Option<i32>,
    /// Copied from the task
    pub correction_charge: bool,
    /// Copied from the task
    pub chargeable: bool,
    pub parent_id: Option<i32>,
}

impl From<timesheet_line::Model> for TimesheetLineResponse {
    fn from(model: timesheet_line::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            date: model.date,
            unit_amount: model.unit_amount,
            amount: model.amount,
            uom: model.uom,
            state: model.state,
            user_id: model.user_id,
            company_id: model.company_id,
            task_id: model.task_id,
            project_id: model.project_id,
            product_id: model.product_id,
            week_id: model.week_id,
            month_id: model.month_id,
            correction_charge: model.correction_charge,
            chargeable: model.chargeable,
            parent_id: model.parent_id,
        }
    }
}

/// Create a new timesheet line
///
/// The product, week/month periods and task flags are derived server-side.
#[utoipa::path(
    post,
    path = "/api/v1/timesheet-lines",
    tag = "timesheet-lines",
    request_body = CreateTimesheetLineRequest,
    responses(
        (status = 201, description = "Timesheet line created successfully", body = ApiResponse<TimesheetLineResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_timesheet_line(
    State(state): State<AppState>,
    Json(request): Json<CreateTimesheetLineRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TimesheetLineResponse>>), (StatusCode, Json<ErrorResponse>)>
{
    let new_line = NewTimesheetLine {
        name: request.name,
        date: request.date,
        unit_amount: request.unit_amount,
        amount: request.amount,
        uom: request.uom,
        user_id: request.user_id,
        company_id: request.company_id,
        task_id: request.task_id,
        project_id: request.project_id,
        parent_id: request.parent_id,
    };

    match timesheet::create_timesheet_line(&state.db, new_line).await {
        Ok(model) => {
            let response = ApiResponse {
                data: TimesheetLineResponse::from(model),
                message: "Timesheet line created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(error) => Err(error_response(error)),
    }
}

/// Get all timesheet lines
#[utoipa::path(
    get,
    path = "/api/v1/timesheet-lines",
    tag = "timesheet-lines",
    responses(
        (status = 200, description = "Timesheet lines retrieved successfully", body = ApiResponse<Vec<TimesheetLineResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_timesheet_lines(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TimesheetLineResponse>>>, StatusCode> {
    match timesheet_line::Entity::find()
        .order_by_asc(timesheet_line::Column::Id)
        .all(&state.db)
        .await
    {
        Ok(models) => {
            let response = ApiResponse {
                data: models
                    .into_iter()
                    .map(TimesheetLineResponse::from)
                    .collect(),
                message: "Timesheet lines retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Get a timesheet line by ID
#[utoipa::path(
    get,
    path = "/api/v1/timesheet-lines/{line_id}",
    tag = "timesheet-lines",
    params(
        ("line_id" = i32, Path, description = "Timesheet line ID"),
    ),
    responses(
        (status = 200, description = "Timesheet line retrieved successfully", body = ApiResponse<TimesheetLineResponse>),
        (status = 404, description = "Timesheet line not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_timesheet_line(
    Path(line_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TimesheetLineResponse>>, StatusCode> {
    match timesheet_line::Entity::find_by_id(line_id).one(&state.db).await {
        Ok(Some(model)) => {
            let response = ApiResponse {
                data: TimesheetLineResponse::from(model),
                message: "Timesheet line retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Update a timesheet line
///
/// Changing the task or user re-resolves the product against the
/// pre-existing value of the other key; changing the date moves the
/// week/month periods.
#[utoipa::path(
    put,
    path = "/api/v1/timesheet-lines/{line_id}",
    tag = "timesheet-lines",
    params(
        ("line_id" = i32, Path, description = "Timesheet line ID"),
    ),
    request_body = UpdateTimesheetLineRequest,
    responses(
        (status = 200, description = "Timesheet line updated successfully", body = ApiResponse<TimesheetLineResponse>),
        (status = 404, description = "Timesheet line not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_timesheet_line(
    Path(line_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateTimesheetLineRequest>,
) -> Result<Json<ApiResponse<TimesheetLineResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let update = TimesheetLineUpdate {
        name: request.name,
        date: request.date,
        unit_amount: request.unit_amount,
        amount: request.amount,
        task_id: request.task_id,
        user_id: request.user_id,
        project_id: request.project_id,
        state: request.state,
    };

    match timesheet::update_timesheet_line(&state.db, line_id, update).await {
        Ok(model) => {
            // The line may feed any invoice's cached grouping report.
            state.cache.invalidate_all();
            let response = ApiResponse {
                data: TimesheetLineResponse::from(model),
                message: "Timesheet line updated successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(error) => Err(error_response(error)),
    }
}
