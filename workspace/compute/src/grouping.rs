//! Correction-charge grouping: the per-(project, user) breakdown of the
//! timesheet lines behind an invoice, used by the specs invoice report.

use std::collections::{BTreeMap, HashMap};

use common::{CorrectionChargeReport, ProjectUserBucket, TimesheetLineDto};
use model::entities::prelude::*;
use model::entities::{invoice_line, project, timesheet_line, user, user_total};
use polars::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

/// Collects the detail timesheet lines behind an invoice and partitions
/// them by (project, user).
///
/// Traversal runs invoice lines -> analytic invoices -> user totals ->
/// detail lines, in id order at each level. Only lines on projects flagged
/// both correction-chargeable and included in the specs invoice report
/// make it into a bucket; a line names its project directly or through
/// its task, and a line with neither is skipped.
#[instrument(skip(db))]
pub async fn timesheet_by_group(
    db: &DatabaseConnection,
    invoice_id: i32,
) -> Result<CorrectionChargeReport> {
    let invoice = Invoice::find_by_id(invoice_id)
        .one(db)
        .await?
        .ok_or_else(|| ComputeError::NotFound(format!("invoice {invoice_id}")))?;

    let invoice_lines = InvoiceLine::find()
        .filter(invoice_line::Column::InvoiceId.eq(invoice.id))
        .order_by_asc(invoice_line::Column::Id)
        .all(db)
        .await?;
    let mut analytic_ids: Vec<i32> = invoice_lines
        .iter()
        .filter_map(|line| line.analytic_invoice_id)
        .collect();
    analytic_ids.sort_unstable();
    analytic_ids.dedup();

    let mut detail_lines = Vec::new();
    for analytic_id in analytic_ids {
        let totals = UserTotal::find()
            .filter(user_total::Column::AnalyticInvoiceId.eq(analytic_id))
            .order_by_asc(user_total::Column::Id)
            .all(db)
            .await?;
        for total in totals {
            let mut details = TimesheetLine::find()
                .filter(timesheet_line::Column::UserTotalId.eq(total.id))
                .order_by_asc(timesheet_line::Column::Id)
                .all(db)
                .await?;
            detail_lines.append(&mut details);
        }
    }
    debug!(lines = detail_lines.len(), "collected detail lines");

    let mut projects: HashMap<i32, project::Model> = HashMap::new();
    let mut buckets: BTreeMap<(i32, i32), Vec<timesheet_line::Model>> = BTreeMap::new();

    for line in detail_lines {
        let project_id = match line.project_id {
            Some(project_id) => Some(project_id),
            None => match line.task_id {
                Some(task_id) => Task::find_by_id(task_id)
                    .one(db)
                    .await?
                    .map(|task| task.project_id),
                None => None,
            },
        };
        let Some(project_id) = project_id else {
            continue;
        };

        if !projects.contains_key(&project_id) {
            match Project::find_by_id(project_id).one(db).await? {
                Some(project) => {
                    projects.insert(project_id, project);
                }
                None => continue,
            }
        }
        let project = &projects[&project_id];
        if !(project.correction_charge && project.specs_invoice_report) {
            continue;
        }

        buckets
            .entry((project_id, line.user_id))
            .or_default()
            .push(line);
    }

    let mut users: HashMap<i32, user::Model> = HashMap::new();
    let mut out = Vec::with_capacity(buckets.len());
    for ((project_id, user_id), lines) in buckets {
        if !users.contains_key(&user_id) {
            let user = User::find_by_id(user_id)
                .one(db)
                .await?
                .ok_or_else(|| ComputeError::NotFound(format!("user {user_id}")))?;
            users.insert(user_id, user);
        }
        out.push(ProjectUserBucket {
            project_id,
            project_name: projects[&project_id].name.clone(),
            user_id,
            user_name: users[&user_id].name.clone(),
            total_hours: lines.iter().map(|line| line.unit_amount).sum(),
            total_amount: lines.iter().map(|line| line.amount).sum(),
            lines: lines.into_iter().map(to_dto).collect(),
        });
    }

    Ok(CorrectionChargeReport::new(invoice.id, out))
}

fn to_dto(line: timesheet_line::Model) -> TimesheetLineDto {
    TimesheetLineDto {
        id: line.id,
        name: line.name,
        date: line.date,
        unit_amount: line.unit_amount,
        amount: line.amount,
        user_id: line.user_id,
        task_id: line.task_id,
        project_id: line.project_id,
        product_id: line.product_id,
        week_id: line.week_id,
        month_id: line.month_id,
    }
}

/// Per-bucket totals as a DataFrame, one row per (project, user).
pub fn group_summary(report: &CorrectionChargeReport) -> Result<DataFrame> {
    let mut project_names: Vec<String> = Vec::with_capacity(report.buckets.len());
    let mut user_names: Vec<String> = Vec::with_capacity(report.buckets.len());
    let mut hours: Vec<f64> = Vec::with_capacity(report.buckets.len());
    let mut amounts: Vec<f64> = Vec::with_capacity(report.buckets.len());

    for bucket in &report.buckets {
        project_names.push(bucket.project_name.clone());
        user_names.push(bucket.user_name.clone());
        hours.push(bucket.total_hours.to_f64().unwrap_or(0.0));
        amounts.push(bucket.total_amount.to_f64().unwrap_or(0.0));
    }

    let df = DataFrame::new(vec![
        Series::new("project".into(), project_names).into(),
        Series::new("user".into(), user_names).into(),
        Series::new("hours".into(), hours).into(),
        Series::new("amount".into(), amounts).into(),
    ])?;
    Ok(df)
}
