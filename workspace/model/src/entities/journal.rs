use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The kind of journal. The WIP journal is installation data and is looked
/// up by this type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum JournalType {
    #[sea_orm(string_value = "Sale")]
    Sale,
    #[sea_orm(string_value = "Purchase")]
    Purchase,
    #[sea_orm(string_value = "General")]
    General,
    #[sea_orm(string_value = "Wip")]
    Wip,
}

/// An accounting journal, carrying the numbering sequence and default
/// accounts used when moves are generated on it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "journals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub journal_type: JournalType,
    pub sequence_id: Option<i32>,
    pub default_debit_account_id: i32,
    pub default_credit_account_id: i32,
    /// When set, invoice lines with the same characteristic hashcode are
    /// merged into a single move line on posting.
    #[sea_orm(default_value = "false")]
    pub group_invoice_lines: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sequence::Entity",
        from = "Column::SequenceId",
        to = "super::sequence::Column::Id"
    )]
    Sequence,
    #[sea_orm(has_many = "super::account_move::Entity")]
    AccountMove,
}

impl Related<super::sequence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sequence.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
