use sea_orm::entity::prelude::*;

/// A billable product, resolved per (task, user) assignment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::task_user::Entity")]
    TaskUser,
    #[sea_orm(has_many = "super::timesheet_line::Entity")]
    TimesheetLine,
}

impl ActiveModelBehavior for ActiveModel {}
