use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create companies table
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(pk_auto(Companies::Id))
                    .col(string(Companies::Name).unique_key())
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Name).unique_key())
                    .col(string_null(Users::OperatingUnit))
                    .to_owned(),
            )
            .await?;

        // Create products table
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string(Products::Name))
                    .to_owned(),
            )
            .await?;

        // Create projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(string(Projects::Name))
                    .col(integer(Projects::CompanyId))
                    .col(boolean(Projects::CorrectionCharge).default(false))
                    .col(boolean(Projects::SpecsInvoiceReport).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_company")
                            .from(Projects::Table, Projects::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tasks table
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(pk_auto(Tasks::Id))
                    .col(string(Tasks::Name))
                    .col(integer(Tasks::ProjectId))
                    .col(boolean(Tasks::CorrectionCharge).default(false))
                    .col(boolean(Tasks::Chargeable).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_project")
                            .from(Tasks::Table, Tasks::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create task_users table (task/user assignment with product)
        manager
            .create_table(
                Table::create()
                    .table(TaskUsers::Table)
                    .if_not_exists()
                    .col(pk_auto(TaskUsers::Id))
                    .col(integer(TaskUsers::TaskId))
                    .col(integer(TaskUsers::UserId))
                    .col(integer_null(TaskUsers::ProductId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_user_task")
                            .from(TaskUsers::Table, TaskUsers::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_user_user")
                            .from(TaskUsers::Table, TaskUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_user_product")
                            .from(TaskUsers::Table, TaskUsers::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_task_user_pair")
                    .table(TaskUsers::Table)
                    .col(TaskUsers::TaskId)
                    .col(TaskUsers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create date_ranges table
        manager
            .create_table(
                Table::create()
                    .table(DateRanges::Table)
                    .if_not_exists()
                    .col(pk_auto(DateRanges::Id))
                    .col(string(DateRanges::Name))
                    .col(string(DateRanges::RangeType))
                    .col(date(DateRanges::DateStart))
                    .col(date(DateRanges::DateEnd))
                    .col(integer_null(DateRanges::CompanyId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_date_range_company")
                            .from(DateRanges::Table, DateRanges::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create analytic_invoices table
        manager
            .create_table(
                Table::create()
                    .table(AnalyticInvoices::Table)
                    .if_not_exists()
                    .col(pk_auto(AnalyticInvoices::Id))
                    .col(string(AnalyticInvoices::Name))
                    .col(integer_null(AnalyticInvoices::MonthId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_analytic_invoice_month")
                            .from(AnalyticInvoices::Table, AnalyticInvoices::MonthId)
                            .to(DateRanges::Table, DateRanges::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create user_totals table
        manager
            .create_table(
                Table::create()
                    .table(UserTotals::Table)
                    .if_not_exists()
                    .col(pk_auto(UserTotals::Id))
                    .col(integer(UserTotals::AnalyticInvoiceId))
                    .col(integer(UserTotals::UserId))
                    .col(integer_null(UserTotals::ProjectId))
                    .col(decimal_len(UserTotals::UnitAmount, 16, 4))
                    .col(decimal_len(UserTotals::Amount, 16, 4))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_total_analytic_invoice")
                            .from(UserTotals::Table, UserTotals::AnalyticInvoiceId)
                            .to(AnalyticInvoices::Table, AnalyticInvoices::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_total_user")
                            .from(UserTotals::Table, UserTotals::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create timesheet_lines table
        manager
            .create_table(
                Table::create()
                    .table(TimesheetLines::Table)
                    .if_not_exists()
                    .col(pk_auto(TimesheetLines::Id))
                    .col(string(TimesheetLines::Name))
                    .col(date_null(TimesheetLines::Date))
                    .col(decimal_len(TimesheetLines::UnitAmount, 16, 4))
                    .col(decimal_len(TimesheetLines::Amount, 16, 4))
                    .col(string(TimesheetLines::Uom))
                    .col(string(TimesheetLines::State))
                    .col(integer(TimesheetLines::UserId))
                    .col(integer(TimesheetLines::CompanyId))
                    .col(integer_null(TimesheetLines::TaskId))
                    .col(integer_null(TimesheetLines::ProjectId))
                    .col(integer_null(TimesheetLines::ProductId))
                    .col(integer_null(TimesheetLines::WeekId))
                    .col(integer_null(TimesheetLines::MonthId))
                    .col(boolean(TimesheetLines::CorrectionCharge).default(false))
                    .col(boolean(TimesheetLines::Chargeable).default(false))
                    .col(integer_null(TimesheetLines::UserTotalId))
                    .col(integer_null(TimesheetLines::ParentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_line_user")
                            .from(TimesheetLines::Table, TimesheetLines::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_line_company")
                            .from(TimesheetLines::Table, TimesheetLines::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_line_task")
                            .from(TimesheetLines::Table, TimesheetLines::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_line_project")
                            .from(TimesheetLines::Table, TimesheetLines::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_line_product")
                            .from(TimesheetLines::Table, TimesheetLines::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_line_week")
                            .from(TimesheetLines::Table, TimesheetLines::WeekId)
                            .to(DateRanges::Table, DateRanges::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_line_month")
                            .from(TimesheetLines::Table, TimesheetLines::MonthId)
                            .to(DateRanges::Table, DateRanges::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_line_user_total")
                            .from(TimesheetLines::Table, TimesheetLines::UserTotalId)
                            .to(UserTotals::Table, UserTotals::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timesheet_line_parent")
                            .from(TimesheetLines::Table, TimesheetLines::ParentId)
                            .to(TimesheetLines::Table, TimesheetLines::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create accounts table
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Accounts::Id))
                    .col(string(Accounts::Code).unique_key())
                    .col(string(Accounts::Name))
                    .to_owned(),
            )
            .await?;

        // Create sequences table
        manager
            .create_table(
                Table::create()
                    .table(Sequences::Table)
                    .if_not_exists()
                    .col(pk_auto(Sequences::Id))
                    .col(string(Sequences::Name))
                    .col(string_null(Sequences::Prefix))
                    .col(integer(Sequences::Padding).default(5))
                    .col(integer(Sequences::NumberNext).default(1))
                    .to_owned(),
            )
            .await?;

        // Create journals table
        manager
            .create_table(
                Table::create()
                    .table(Journals::Table)
                    .if_not_exists()
                    .col(pk_auto(Journals::Id))
                    .col(string(Journals::Name))
                    .col(string(Journals::Code).unique_key())
                    .col(string(Journals::JournalType))
                    .col(integer_null(Journals::SequenceId))
                    .col(integer(Journals::DefaultDebitAccountId))
                    .col(integer(Journals::DefaultCreditAccountId))
                    .col(boolean(Journals::GroupInvoiceLines).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_sequence")
                            .from(Journals::Table, Journals::SequenceId)
                            .to(Sequences::Table, Sequences::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_debit_account")
                            .from(Journals::Table, Journals::DefaultDebitAccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_credit_account")
                            .from(Journals::Table, Journals::DefaultCreditAccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create account_moves table
        manager
            .create_table(
                Table::create()
                    .table(AccountMoves::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountMoves::Id))
                    .col(integer(AccountMoves::JournalId))
                    .col(string(AccountMoves::Name))
                    .col(string_null(AccountMoves::Reference))
                    .col(date(AccountMoves::Date))
                    .col(string(AccountMoves::State))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_move_journal")
                            .from(AccountMoves::Table, AccountMoves::JournalId)
                            .to(Journals::Table, Journals::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create account_move_lines table; lines go away with their move
        manager
            .create_table(
                Table::create()
                    .table(AccountMoveLines::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountMoveLines::Id))
                    .col(integer(AccountMoveLines::MoveId))
                    .col(integer(AccountMoveLines::AccountId))
                    .col(string(AccountMoveLines::Name))
                    .col(decimal_len(AccountMoveLines::Debit, 16, 4))
                    .col(decimal_len(AccountMoveLines::Credit, 16, 4))
                    .col(integer_null(AccountMoveLines::UserId))
                    .col(boolean(AccountMoveLines::Reconciled).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_move_line_move")
                            .from(AccountMoveLines::Table, AccountMoveLines::MoveId)
                            .to(AccountMoves::Table, AccountMoves::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_move_line_account")
                            .from(AccountMoveLines::Table, AccountMoveLines::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_move_line_user")
                            .from(AccountMoveLines::Table, AccountMoveLines::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create invoices table
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoices::Id))
                    .col(string_null(Invoices::Number))
                    .col(string(Invoices::InvoiceType))
                    .col(string(Invoices::State))
                    .col(date_null(Invoices::DateInvoice))
                    .col(integer(Invoices::JournalId))
                    .col(integer(Invoices::AccountId))
                    .col(integer_null(Invoices::MoveId))
                    .col(integer_null(Invoices::WipMoveId))
                    .col(decimal_len_null(Invoices::TargetInvoiceAmount, 16, 4))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_journal")
                            .from(Invoices::Table, Invoices::JournalId)
                            .to(Journals::Table, Journals::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_account")
                            .from(Invoices::Table, Invoices::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_move")
                            .from(Invoices::Table, Invoices::MoveId)
                            .to(AccountMoves::Table, AccountMoves::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // The WIP move must be unlinked before it can be deleted.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_wip_move")
                            .from(Invoices::Table, Invoices::WipMoveId)
                            .to(AccountMoves::Table, AccountMoves::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create invoice_lines table
        manager
            .create_table(
                Table::create()
                    .table(InvoiceLines::Table)
                    .if_not_exists()
                    .col(pk_auto(InvoiceLines::Id))
                    .col(integer(InvoiceLines::InvoiceId))
                    .col(string(InvoiceLines::Name))
                    .col(decimal_len(InvoiceLines::Quantity, 16, 4))
                    .col(decimal_len(InvoiceLines::PriceUnit, 16, 4))
                    .col(decimal_len(InvoiceLines::Discount, 16, 4).default(0))
                    .col(integer(InvoiceLines::AccountId))
                    .col(integer_null(InvoiceLines::ProductId))
                    .col(integer_null(InvoiceLines::AnalyticInvoiceId))
                    .col(integer_null(InvoiceLines::UserId))
                    .col(integer_null(InvoiceLines::UserTaskTotalLineId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_line_invoice")
                            .from(InvoiceLines::Table, InvoiceLines::InvoiceId)
                            .to(Invoices::Table, Invoices::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_line_account")
                            .from(InvoiceLines::Table, InvoiceLines::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_line_product")
                            .from(InvoiceLines::Table, InvoiceLines::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_line_analytic_invoice")
                            .from(InvoiceLines::Table, InvoiceLines::AnalyticInvoiceId)
                            .to(AnalyticInvoices::Table, AnalyticInvoices::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_line_user")
                            .from(InvoiceLines::Table, InvoiceLines::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_line_user_total")
                            .from(InvoiceLines::Table, InvoiceLines::UserTaskTotalLineId)
                            .to(UserTotals::Table, UserTotals::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvoiceLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccountMoveLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccountMoves::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Journals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sequences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimesheetLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserTotals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AnalyticInvoices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DateRanges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TaskUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Companies {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Name,
    OperatingUnit,
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
    Name,
    CompanyId,
    CorrectionCharge,
    SpecsInvoiceReport,
}

#[derive(DeriveIden)]
pub enum Tasks {
    Table,
    Id,
    Name,
    ProjectId,
    CorrectionCharge,
    Chargeable,
}

#[derive(DeriveIden)]
pub enum TaskUsers {
    Table,
    Id,
    TaskId,
    UserId,
    ProductId,
}

#[derive(DeriveIden)]
pub enum DateRanges {
    Table,
    Id,
    Name,
    RangeType,
    DateStart,
    DateEnd,
    CompanyId,
}

#[derive(DeriveIden)]
pub enum AnalyticInvoices {
    Table,
    Id,
    Name,
    MonthId,
}

#[derive(DeriveIden)]
pub enum UserTotals {
    Table,
    Id,
    AnalyticInvoiceId,
    UserId,
    ProjectId,
    UnitAmount,
    Amount,
}

#[derive(DeriveIden)]
pub enum TimesheetLines {
    Table,
    Id,
    Name,
    Date,
    UnitAmount,
    Amount,
    Uom,
    State,
    UserId,
    CompanyId,
    TaskId,
    ProjectId,
    ProductId,
    WeekId,
    MonthId,
    CorrectionCharge,
    Chargeable,
    UserTotalId,
    ParentId,
}

#[derive(DeriveIden)]
pub enum Accounts {
    Table,
    Id,
    Code,
    Name,
}

#[derive(DeriveIden)]
pub enum Sequences {
    Table,
    Id,
    Name,
    Prefix,
    Padding,
    NumberNext,
}

#[derive(DeriveIden)]
pub enum Journals {
    Table,
    Id,
    Name,
    Code,
    JournalType,
    SequenceId,
    DefaultDebitAccountId,
    DefaultCreditAccountId,
    GroupInvoiceLines,
}

#[derive(DeriveIden)]
pub enum AccountMoves {
    Table,
    Id,
    JournalId,
    Name,
    Reference,
    Date,
    State,
}

#[derive(DeriveIden)]
pub enum AccountMoveLines {
    Table,
    Id,
    MoveId,
    AccountId,
    Name,
    Debit,
    Credit,
    UserId,
    Reconciled,
}

#[derive(DeriveIden)]
pub enum Invoices {
    Table,
    Id,
    Number,
    InvoiceType,
    State,
    DateInvoice,
    JournalId,
    AccountId,
    MoveId,
    WipMoveId,
    TargetInvoiceAmount,
}

#[derive(DeriveIden)]
pub enum InvoiceLines {
    Table,
    Id,
    InvoiceId,
    Name,
    Quantity,
    PriceUnit,
    Discount,
    AccountId,
    ProductId,
    AnalyticInvoiceId,
    UserId,
    UserTaskTotalLineId,
}
