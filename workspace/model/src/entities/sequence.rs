use chrono::{Datelike, NaiveDate};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// A document numbering sequence. Numbers are formatted as
/// `{prefix}{year}/{padded counter}` where the year is taken from the date
/// the caller keys the allocation by, not from the wall clock.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sequences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub prefix: Option<String>,
    /// Zero-padding width of the counter part.
    pub padding: i32,
    pub number_next: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::journal::Entity")]
    Journal,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Allocates the next number in this sequence, keyed by `date`.
    ///
    /// The counter is incremented in the database; the returned string is
    /// the allocated number.
    pub async fn next_by_date(
        &self,
        db: &DatabaseConnection,
        date: NaiveDate,
    ) -> Result<String, DbErr> {
        let number = self.number_next;
        let mut active: ActiveModel = self.clone().into();
        active.number_next = Set(number + 1);
        active.update(db).await?;

        let prefix = self.prefix.clone().unwrap_or_default();
        Ok(format!(
            "{}{}/{:0width$}",
            prefix,
            date.year(),
            number,
            width = self.padding as usize
        ))
    }
}
