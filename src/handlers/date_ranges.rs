use crate::schemas::{ApiResponse, AppState};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use model::entities::date_range::{self, RangeType};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

/// Request body for creating a date range
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDateRangeRequest {
    /// Display name (e.g. "2024, week 5")
    pub name: String,
    /// Range type: "week" or "fiscal_month"
    #[schema(value_type = String)]
    pub range_type: RangeType,
    /// First day of the range
    pub date_start: NaiveDate,
    /// Last day of the range (inclusive)
    pub date_end: NaiveDate,
    /// Owning company; omit for a global range
    pub company_id: Option<i32>,
}

/// Date range response model
#[derive(Debug, Serialize, ToSchema)]
pub struct DateRangeResponse {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub range_type: RangeType,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub company_id: Option<i32>,
}

impl From<date_range::Model> for DateRangeResponse {
    fn from(model: date_range::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            range_type: model.range_type,
            date_start: model.date_start,
            date_end: model.date_end,
            company_id: model.company_id,
        }
    }
}

/// Create a new date range
#[utoipa::path(
    post,
    path = "/api/v1/date-ranges",
    tag = "date-ranges",
    request_body = CreateDateRangeRequest,
    responses(
        (status = 201, description = "Date range created successfully", body = ApiResponse<DateRangeResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn create_date_range(
    State(state): State<AppState>,
    Json(request): Json<CreateDateRangeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DateRangeResponse>>), StatusCode> {
    let new_range = date_range::ActiveModel {
        name: Set(request.name),
        range_type: Set(request.range_type),
        date_start: Set(request.date_start),
        date_end: Set(request.date_end),
        company_id: Set(request.company_id),
        ..Default::default()
    };

    match new_range.insert(&state.db).await {
        Ok(model) => {
            let response = ApiResponse {
                data: DateRangeResponse::from(model),
                message: "Date range created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Get all date ranges
#[utoipa::path(
    get,
    path = "/api/v1/date-ranges",
    tag = "date-ranges",
    responses(
        (status = 200, description = "Date ranges retrieved successfully", body = ApiResponse<Vec<DateRangeResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_date_ranges(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DateRangeResponse>>>, StatusCode> {
    match date_range::Entity::find()
        .order_by_asc(date_range::Column::DateStart)
        .all(&state.db)
        .await
    {
        Ok(models) => {
            let response = ApiResponse {
                data: models.into_iter().map(DateRangeResponse::from).collect(),
                message: "Date ranges retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
