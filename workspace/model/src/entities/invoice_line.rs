use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A line of an invoice. `user_id` is the timesheet-user attribution that
/// is propagated onto the move lines generated from this line.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub invoice_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub quantity: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub price_unit: Decimal,
    /// Discount percentage (0-100).
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub discount: Decimal,
    pub account_id: i32,
    pub product_id: Option<i32>,
    /// Back-reference to the analytic invoice this line bills.
    pub analytic_invoice_id: Option<i32>,
    /// Timesheet user attribution.
    pub user_id: Option<i32>,
    /// Grouped analytic (user total) line this invoice line was built from.
    pub user_task_total_line_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::invoice::Entity",
        from = "Column::InvoiceId",
        to = "super::invoice::Column::Id",
        on_delete = "Cascade"
    )]
    Invoice,
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
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
    #[sea_orm(
        belongs_to = "super::user_total::Entity",
        from = "Column::UserTaskTotalLineId",
        to = "super::user_total::Column::Id",
        on_delete = "Cascade"
    )]
    UserTotal,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
