use sea_orm::entity::prelude::*;

/// A user of the system: the person recording timesheet lines and the
/// attribution dimension carried onto invoice and move lines.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Organizational attribution dimension, copied onto documents
    /// this user is responsible for.
    pub operating_unit: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::timesheet_line::Entity")]
    TimesheetLine,
    #[sea_orm(has_many = "super::task_user::Entity")]
    TaskUser,
}

impl ActiveModelBehavior for ActiveModel {}
