//! Transport-layer types shared between the compute crate and the HTTP
//! backend. The compute crate builds these report shapes; the handlers
//! serialize them as-is.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A timesheet line as it appears in reports.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TimesheetLineDto {
    pub id: i32,
    pub name: String,
    pub date: Option<NaiveDate>,
    /// Hours recorded on the line.
    pub unit_amount: Decimal,
    pub amount: Decimal,
    pub user_id: i32,
    pub task_id: Option<i32>,
    pub project_id: Option<i32>,
    pub product_id: Option<i32>,
    pub week_id: Option<i32>,
    pub month_id: Option<i32>,
}

/// One (project, user) bucket of the correction-charge report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProjectUserBucket {
    pub project_id: i32,
    pub project_name: String,
    pub user_id: i32,
    pub user_name: String,
    /// Contributing lines, in traversal order.
    pub lines: Vec<TimesheetLineDto>,
    pub total_hours: Decimal,
    pub total_amount: Decimal,
}

/// The correction-charge grouping of an invoice's timesheet lines:
/// only lines on projects flagged both correction-chargeable and included
/// in the specs invoice report, partitioned by (project, user).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CorrectionChargeReport {
    pub invoice_id: i32,
    pub buckets: Vec<ProjectUserBucket>,
}

impl CorrectionChargeReport {
    pub fn new(invoice_id: i32, buckets: Vec<ProjectUserBucket>) -> Self {
        Self {
            invoice_id,
            buckets,
        }
    }

    /// Total hours across all buckets.
    pub fn total_hours(&self) -> Decimal {
        self.buckets.iter().map(|b| b.total_hours).sum()
    }
}
