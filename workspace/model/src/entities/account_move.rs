use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Posting state of a journal entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum MoveState {
    #[sea_orm(string_value = "Draft")]
    Draft,
    #[sea_orm(string_value = "Posted")]
    Posted,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

/// An accounting journal entry. Deleting a move cascades to its lines.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account_moves")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub journal_id: i32,
    pub name: String,
    /// Source document reference (e.g. the invoice number for WIP entries).
    pub reference: Option<String>,
    pub date: NaiveDate,
    pub state: MoveState,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::journal::Entity",
        from = "Column::JournalId",
        to = "super::journal::Column::Id"
    )]
    Journal,
    #[sea_orm(has_many = "super::account_move_line::Entity")]
    AccountMoveLine,
}

impl Related<super::account_move_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountMoveLine.def()
    }
}

impl Related<super::journal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
