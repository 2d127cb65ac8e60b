//! Period classification: assigning timesheet lines to week and fiscal
//! month date ranges.

use chrono::NaiveDate;
use model::entities::date_range::{self, RangeType};
use model::entities::prelude::*;
use model::entities::timesheet_line::{self, Uom};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, instrument};

use crate::error::Result;

/// Finds the date range of the given type containing `date`.
///
/// A range owned by the line's company wins over a global one; within a
/// scope, the lowest id wins. Returns `None` when no range covers the date.
#[instrument(skip(db))]
pub async fn find_date_range(
    db: &DatabaseConnection,
    range_type: RangeType,
    company_id: i32,
    date: NaiveDate,
) -> Result<Option<date_range::Model>> {
    let covering = DateRange::find()
        .filter(date_range::Column::RangeType.eq(range_type))
        .filter(date_range::Column::DateStart.lte(date))
        .filter(date_range::Column::DateEnd.gte(date));

    let scoped = covering
        .clone()
        .filter(date_range::Column::CompanyId.eq(company_id))
        .order_by_asc(date_range::Column::Id)
        .one(db)
        .await?;
    if scoped.is_some() {
        return Ok(scoped);
    }

    Ok(covering
        .filter(date_range::Column::CompanyId.is_null())
        .order_by_asc(date_range::Column::Id)
        .one(db)
        .await?)
}

/// The week range containing `date` for the given company.
pub async fn find_week_range(
    db: &DatabaseConnection,
    company_id: i32,
    date: NaiveDate,
) -> Result<Option<date_range::Model>> {
    find_date_range(db, RangeType::Week, company_id, date).await
}

/// The fiscal month range containing `date` for the given company.
pub async fn find_month_range(
    db: &DatabaseConnection,
    company_id: i32,
    date: NaiveDate,
) -> Result<Option<date_range::Model>> {
    find_date_range(db, RangeType::FiscalMonth, company_id, date).await
}

/// Recomputes the stored week/month assignment of a timesheet line and
/// returns the updated line.
///
/// Only hour-denominated lines are classified. A line without a date
/// borrows the earliest date of its child lines; when no date can be
/// established, or no range covers it, the assignment is cleared.
#[instrument(skip(db, line), fields(line_id = line.id))]
pub async fn refresh_week_month(
    db: &DatabaseConnection,
    line: &timesheet_line::Model,
) -> Result<timesheet_line::Model> {
    if line.uom != Uom::Hour {
        return Ok(line.clone());
    }

    let date = match line.date {
        Some(date) => Some(date),
        None => earliest_child_date(db, line.id).await?,
    };

    let (week, month) = match date {
        Some(date) => (
            find_week_range(db, line.company_id, date).await?,
            find_month_range(db, line.company_id, date).await?,
        ),
        None => (None, None),
    };
    debug!(
        week = week.as_ref().map(|r| r.id),
        month = month.as_ref().map(|r| r.id),
        "classified timesheet line"
    );

    let mut active: timesheet_line::ActiveModel = line.clone().into();
    active.week_id = Set(week.map(|range| range.id));
    active.month_id = Set(month.map(|range| range.id));
    Ok(active.update(db).await?)
}

async fn earliest_child_date(
    db: &DatabaseConnection,
    parent_id: i32,
) -> Result<Option<NaiveDate>> {
    Ok(TimesheetLine::find()
        .filter(timesheet_line::Column::ParentId.eq(parent_id))
        .filter(timesheet_line::Column::Date.is_not_null())
        .order_by_asc(timesheet_line::Column::Date)
        .one(db)
        .await?
        .and_then(|child| child.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seed_basic, seed_range, setup_db, ymd};
    use rust_decimal::Decimal;
    use sea_orm::ActiveModelTrait;

    async fn insert_line(
        db: &DatabaseConnection,
        fixture: &crate::testing::Fixture,
        date: Option<NaiveDate>,
        uom: Uom,
    ) -> timesheet_line::Model {
        timesheet_line::ActiveModel {
            name: Set("work".to_string()),
            date: Set(date),
            unit_amount: Set(Decimal::new(8, 0)),
            amount: Set(Decimal::new(800, 0)),
            uom: Set(uom),
            state: Set(timesheet_line::TimesheetState::Draft),
            user_id: Set(fixture.alice.id),
            company_id: Set(fixture.company.id),
            task_id: Set(Some(fixture.task.id)),
            project_id: Set(Some(fixture.project.id)),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_refresh_assigns_week_and_month() {
        let db = setup_db().await;
        let fixture = seed_basic(&db).await;

        let line = insert_line(&db, &fixture, Some(ymd(2024, 1, 30)), Uom::Hour).await;
        let line = refresh_week_month(&db, &line).await.unwrap();

        assert_eq!(line.week_id, Some(fixture.week.id));
        assert_eq!(line.month_id, Some(fixture.month.id));
    }

    #[tokio::test]
    async fn test_non_hour_lines_are_not_classified() {
        let db = setup_db().await;
        let fixture = seed_basic(&db).await;

        let line = insert_line(&db, &fixture, Some(ymd(2024, 1, 30)), Uom::Unit).await;
        let line = refresh_week_month(&db, &line).await.unwrap();

        assert_eq!(line.week_id, None);
        assert_eq!(line.month_id, None);
    }

    #[tokio::test]
    async fn test_uncovered_date_clears_assignment() {
        let db = setup_db().await;
        let fixture = seed_basic(&db).await;

        let line = insert_line(&db, &fixture, Some(ymd(2024, 1, 30)), Uom::Hour).await;
        let line = refresh_week_month(&db, &line).await.unwrap();
        assert!(line.week_id.is_some());

        let mut active: timesheet_line::ActiveModel = line.clone().into();
        active.date = Set(Some(ymd(2025, 6, 1)));
        let line = active.update(&db).await.unwrap();

        let line = refresh_week_month(&db, &line).await.unwrap();
        assert_eq!(line.week_id, None);
        assert_eq!(line.month_id, None);
    }

    #[tokio::test]
    async fn test_company_scoped_range_wins_over_global() {
        let db = setup_db().await;
        let fixture = seed_basic(&db).await;

        let scoped = seed_range(
            &db,
            "2024, week 5 (company)",
            RangeType::Week,
            (2024, 1, 29),
            (2024, 2, 4),
            Some(fixture.company.id),
        )
        .await;

        let line = insert_line(&db, &fixture, Some(ymd(2024, 1, 30)), Uom::Hour).await;
        let line = refresh_week_month(&db, &line).await.unwrap();

        assert_eq!(line.week_id, Some(scoped.id));
        assert_eq!(line.month_id, Some(fixture.month.id));
    }

    #[tokio::test]
    async fn test_dateless_parent_borrows_earliest_child_date() {
        let db = setup_db().await;
        let fixture = seed_basic(&db).await;

        let parent = insert_line(&db, &fixture, None, Uom::Hour).await;
        for day in [31, 29] {
            let mut child: timesheet_line::ActiveModel =
                insert_line(&db, &fixture, Some(ymd(2024, 1, day)), Uom::Hour)
                    .await
                    .into();
            child.parent_id = Set(Some(parent.id));
            child.update(&db).await.unwrap();
        }

        let parent = refresh_week_month(&db, &parent).await.unwrap();
        assert_eq!(parent.week_id, Some(fixture.week.id));
        assert_eq!(parent.month_id, Some(fixture.month.id));
    }
}
