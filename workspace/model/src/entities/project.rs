use sea_orm::entity::prelude::*;

/// A project timesheet lines are recorded against, directly or via a task.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub company_id: i32,
    /// Projects flagged here participate in correction-charge reporting.
    #[sea_orm(default_value = "false")]
    pub correction_charge: bool,
    /// Whether the project is included in the specs invoice report.
    #[sea_orm(default_value = "false")]
    pub specs_invoice_report: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
