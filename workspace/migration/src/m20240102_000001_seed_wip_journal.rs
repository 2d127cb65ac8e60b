use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_tables::{Accounts, Journals, Sequences};

/// Installation data: the WIP journal and its numbering sequence.
/// The WIP move generator looks this journal up by type and fails with a
/// user-facing error if its sequence is ever removed.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Accounts::Table)
                    .columns([Accounts::Id, Accounts::Code, Accounts::Name])
                    .values_panic([1.into(), "1560".into(), "Work in Progress".into()])
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Sequences::Table)
                    .columns([
                        Sequences::Id,
                        Sequences::Name,
                        Sequences::Prefix,
                        Sequences::Padding,
                        Sequences::NumberNext,
                    ])
                    .values_panic([
                        1.into(),
                        "WIP Journal Sequence".into(),
                        "WIP/".into(),
                        5.into(),
                        1.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Journals::Table)
                    .columns([
                        Journals::Id,
                        Journals::Name,
                        Journals::Code,
                        Journals::JournalType,
                        Journals::SequenceId,
                        Journals::DefaultDebitAccountId,
                        Journals::DefaultCreditAccountId,
                        Journals::GroupInvoiceLines,
                    ])
                    .values_panic([
                        1.into(),
                        "WIP Journal".into(),
                        "WIP".into(),
                        "Wip".into(),
                        1.into(),
                        1.into(),
                        1.into(),
                        false.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Journals::Table)
                    .and_where(Expr::col(Journals::Code).eq("WIP"))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Sequences::Table)
                    .and_where(Expr::col(Sequences::Name).eq("WIP Journal Sequence"))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Accounts::Table)
                    .and_where(Expr::col(Accounts::Code).eq("1560"))
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
