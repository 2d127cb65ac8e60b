use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The document type of an invoice. Only customer invoices enter the WIP
/// flow; refunds and vendor documents are excluded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    #[sea_orm(string_value = "OutInvoice")]
    OutInvoice,
    #[sea_orm(string_value = "OutRefund")]
    OutRefund,
    #[sea_orm(string_value = "InInvoice")]
    InInvoice,
    #[sea_orm(string_value = "InRefund")]
    InRefund,
}

/// Workflow state of an invoice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum InvoiceState {
    #[sea_orm(string_value = "Draft")]
    Draft,
    #[sea_orm(string_value = "Open")]
    Open,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

/// A billing document. `wip_move_id` points at the invoice's work-in-progress
/// journal entry; an invoice has at most one at a time and cancelling the
/// invoice unlinks and deletes it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub number: Option<String>,
    pub invoice_type: InvoiceType,
    pub state: InvoiceState,
    pub date_invoice: Option<NaiveDate>,
    pub journal_id: i32,
    /// Receivable/payable counterpart account.
    pub account_id: i32,
    pub move_id: Option<i32>,
    pub wip_move_id: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))", nullable)]
    pub target_invoice_amount: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::journal::Entity",
        from = "Column::JournalId",
        to = "super::journal::Column::Id"
    )]
    Journal,
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::account_move::Entity",
        from = "Column::MoveId",
        to = "super::account_move::Column::Id"
    )]
    Move,
    #[sea_orm(
        belongs_to = "super::account_move::Entity",
        from = "Column::WipMoveId",
        to = "super::account_move::Column::Id"
    )]
    WipMove,
    #[sea_orm(has_many = "super::invoice_line::Entity")]
    InvoiceLine,
}

impl Related<super::invoice_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvoiceLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
