use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unit of measure for a timesheet line. Only hour-denominated lines get
/// week/month period assignments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum Uom {
    #[sea_orm(string_value = "Hour")]
    Hour,
    #[sea_orm(string_value = "Unit")]
    Unit,
}

/// Billing state of a timesheet line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum TimesheetState {
    #[sea_orm(string_value = "Draft")]
    Draft,
    #[sea_orm(string_value = "Confirmed")]
    Confirmed,
    #[sea_orm(string_value = "Delayed")]
    Delayed,
    #[sea_orm(string_value = "Invoiceable")]
    Invoiceable,
    #[sea_orm(string_value = "Invoiced")]
    Invoiced,
}

/// A recorded unit of time or expense tied to a task/project.
///
/// `week_id`, `month_id`, `correction_charge` and `chargeable` are stored
/// computed fields: the timesheet services refresh them whenever their
/// source fields (date, uom, task) change. They are never set directly.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "timesheet_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub date: Option<NaiveDate>,
    /// Quantity in the line's unit of measure (hours for Hour lines).
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub unit_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub amount: Decimal,
    pub uom: Uom,
    pub state: TimesheetState,
    pub user_id: i32,
    pub company_id: i32,
    pub task_id: Option<i32>,
    pub project_id: Option<i32>,
    pub product_id: Option<i32>,
    /// Week period the line falls in (stored computed, Hour lines only).
    pub week_id: Option<i32>,
    /// Fiscal month period the line falls in (stored computed, Hour lines only).
    pub month_id: Option<i32>,
    #[sea_orm(default_value = "false")]
    pub correction_charge: bool,
    #[sea_orm(default_value = "false")]
    pub chargeable: bool,
    /// Per-user summary row this line is aggregated under for invoicing.
    pub user_total_id: Option<i32>,
    /// Aggregating parent line; children supply the date fallback when the
    /// parent has none.
    pub parent_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::task::Entity",
        from = "Column::TaskId",
        to = "super::task::Column::Id"
    )]
    Task,
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id"
    )]
    Project,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::date_range::Entity",
        from = "Column::WeekId",
        to = "super::date_range::Column::Id"
    )]
    Week,
    #[sea_orm(
        belongs_to = "super::date_range::Entity",
        from = "Column::MonthId",
        to = "super::date_range::Column::Id"
    )]
    Month,
    #[sea_orm(
        belongs_to = "super::user_total::Entity",
        from = "Column::UserTotalId",
        to = "super::user_total::Column::Id"
    )]
    UserTotal,
    /// Self-referencing relation for aggregated child lines.
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::user_total::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserTotal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
