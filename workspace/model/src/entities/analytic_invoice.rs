use sea_orm::entity::prelude::*;

/// Grouping object aggregating timesheet lines for billing under one
/// fiscal-month period. Invoice lines point back at it; its per-user
/// summary rows are the `user_total` records.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "analytic_invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// The fiscal month being billed.
    pub month_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::date_range::Entity",
        from = "Column::MonthId",
        to = "super::date_range::Column::Id"
    )]
    Month,
    #[sea_orm(has_many = "super::user_total::Entity")]
    UserTotal,
}

impl Related<super::user_total::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserTotal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
