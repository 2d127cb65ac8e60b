use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Per-user summary row of an analytic invoice; its detail lines are the
/// timesheet lines whose `user_total_id` points here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_totals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub analytic_invoice_id: i32,
    pub user_id: i32,
    pub project_id: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub unit_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::analytic_invoice::Entity",
        from = "Column::AnalyticInvoiceId",
        to = "super::analytic_invoice::Column::Id",
        on_delete = "Cascade"
    )]
    AnalyticInvoice,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::timesheet_line::Entity")]
    TimesheetLine,
}

impl Related<super::analytic_invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnalyticInvoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
