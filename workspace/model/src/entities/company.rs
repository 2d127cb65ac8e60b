use sea_orm::entity::prelude::*;

/// A company owning records; date ranges are either scoped to a company
/// or global (no company).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::date_range::Entity")]
    DateRange,
    #[sea_orm(has_many = "super::timesheet_line::Entity")]
    TimesheetLine,
}

impl ActiveModelBehavior for ActiveModel {}
