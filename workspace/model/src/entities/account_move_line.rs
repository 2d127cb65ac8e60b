use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A debit/credit line of a journal entry, carrying the timesheet-user
/// attribution copied from the invoice line it was generated from.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account_move_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub move_id: i32,
    pub account_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub debit: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub credit: Decimal,
    pub user_id: Option<i32>,
    /// Set when reconciliation with the mirroring reversal line was requested.
    #[sea_orm(default_value = "false")]
    pub reconciled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account_move::Entity",
        from = "Column::MoveId",
        to = "super::account_move::Column::Id",
        on_delete = "Cascade"
    )]
    Move,
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::account_move::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Move.def()
    }
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
