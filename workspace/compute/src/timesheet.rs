//! Timesheet line services. These are the single write path for lines:
//! they keep the stored computed fields (product, week/month, task flags)
//! in step with the fields they derive from.

use chrono::NaiveDate;
use model::entities::prelude::*;
use model::entities::timesheet_line::{self, TimesheetState, Uom};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::instrument;

use crate::error::{ComputeError, Result};
use crate::{periods, products};

/// Fields accepted when creating a timesheet line. Everything derived
/// (product, periods, task flags) is computed here, never passed in.
#[derive(Debug, Clone)]
pub struct NewTimesheetLine {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub unit_amount: Decimal,
    pub amount: Decimal,
    pub uom: Uom,
    pub user_id: i32,
    pub company_id: i32,
    pub task_id: Option<i32>,
    pub project_id: Option<i32>,
    pub parent_id: Option<i32>,
}

/// Partial update of a timesheet line; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct TimesheetLineUpdate {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub unit_amount: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub task_id: Option<i32>,
    pub user_id: Option<i32>,
    pub project_id: Option<i32>,
    pub state: Option<TimesheetState>,
}

#[instrument(skip(db, new))]
pub async fn create_timesheet_line(
    db: &DatabaseConnection,
    new: NewTimesheetLine,
) -> Result<timesheet_line::Model> {
    let product_id = match new.task_id {
        Some(task_id) => products::task_user_product(db, task_id, new.user_id).await?,
        None => None,
    };
    let (correction_charge, chargeable) = task_flags(db, new.task_id).await?;

    let line = timesheet_line::ActiveModel {
        name: Set(new.name),
        date: Set(new.date),
        unit_amount: Set(new.unit_amount),
        amount: Set(new.amount),
        uom: Set(new.uom),
        state: Set(TimesheetState::Draft),
        user_id: Set(new.user_id),
        company_id: Set(new.company_id),
        task_id: Set(new.task_id),
        project_id: Set(new.project_id),
        product_id: Set(product_id),
        correction_charge: Set(correction_charge),
        chargeable: Set(chargeable),
        parent_id: Set(new.parent_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    periods::refresh_week_month(db, &line).await
}

#[instrument(skip(db, update))]
pub async fn update_timesheet_line(
    db: &DatabaseConnection,
    id: i32,
    update: TimesheetLineUpdate,
) -> Result<timesheet_line::Model> {
    let line = TimesheetLine::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ComputeError::NotFound(format!("timesheet line {id}")))?;

    // The product tracks the (task, user) pair: a change to either key
    // re-resolves it against the pre-existing value of the other.
    let effective_task = update.task_id.or(line.task_id);
    let effective_user = update.user_id.unwrap_or(line.user_id);
    let keys_changed = update.task_id.is_some() || update.user_id.is_some();

    let mut active: timesheet_line::ActiveModel = line.into();
    if let Some(name) = update.name {
        active.name = Set(name);
    }
    if let Some(date) = update.date {
        active.date = Set(Some(date));
    }
    if let Some(unit_amount) = update.unit_amount {
        active.unit_amount = Set(unit_amount);
    }
    if let Some(amount) = update.amount {
        active.amount = Set(amount);
    }
    if let Some(project_id) = update.project_id {
        active.project_id = Set(Some(project_id));
    }
    if let Some(state) = update.state {
        active.state = Set(state);
    }
    if let Some(user_id) = update.user_id {
        active.user_id = Set(user_id);
    }
    if let Some(task_id) = update.task_id {
        active.task_id = Set(Some(task_id));
        let (correction_charge, chargeable) = task_flags(db, Some(task_id)).await?;
        active.correction_charge = Set(correction_charge);
        active.chargeable = Set(chargeable);
    }
    if keys_changed {
        active.product_id = Set(match effective_task {
            Some(task_id) => products::task_user_product(db, task_id, effective_user).await?,
            None => None,
        });
    }

    let line = active.update(db).await?;
    periods::refresh_week_month(db, &line).await
}

async fn task_flags(db: &DatabaseConnection, task_id: Option<i32>) -> Result<(bool, bool)> {
    let Some(task_id) = task_id else {
        return Ok((false, false));
    };
    Ok(Task::find_by_id(task_id)
        .one(db)
        .await?
        .map(|task| (task.correction_charge, task.chargeable))
        .unwrap_or((false, false)))
}
