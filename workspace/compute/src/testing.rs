//! Shared fixtures for the unit tests: an in-memory database with the
//! schema applied plus a seeded master-data graph. The WIP journal, its
//! sequence and the WIP account come from the installation migration and
//! are not seeded here.

use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use model::entities::date_range::RangeType;
use model::entities::*;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

pub(crate) async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    Migrator::up(&db, None).await.expect("migration failed");
    db
}

/// The master-data graph most tests start from.
pub(crate) struct Fixture {
    pub company: company::Model,
    pub alice: user::Model,
    pub bob: user::Model,
    pub product: product::Model,
    pub project: project::Model,
    pub task: task::Model,
    pub week: date_range::Model,
    pub month: date_range::Model,
    pub receivable: account::Model,
    pub revenue: account::Model,
    pub sale_journal: journal::Model,
}

pub(crate) async fn seed_basic(db: &DatabaseConnection) -> Fixture {
    let company = company::ActiveModel {
        name: Set("Borealis Consulting BV".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let alice = user::ActiveModel {
        name: Set("alice".to_string()),
        operating_unit: Set(Some("NL".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let bob = user::ActiveModel {
        name: Set("bob".to_string()),
        operating_unit: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let product = product::ActiveModel {
        name: Set("Senior consultant hours".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let project = project::ActiveModel {
        name: Set("ERP rollout".to_string()),
        company_id: Set(company.id),
        correction_charge: Set(true),
        specs_invoice_report: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let task = task::ActiveModel {
        name: Set("Data migration".to_string()),
        project_id: Set(project.id),
        correction_charge: Set(true),
        chargeable: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    task_user::ActiveModel {
        task_id: Set(task.id),
        user_id: Set(alice.id),
        product_id: Set(Some(product.id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let week = seed_range(db, "2024, week 5", RangeType::Week, (2024, 1, 29), (2024, 2, 4), None).await;
    let month = seed_range(
        db,
        "January 2024",
        RangeType::FiscalMonth,
        (2024, 1, 1),
        (2024, 1, 31),
        None,
    )
    .await;

    let receivable = account::ActiveModel {
        code: Set("1100".to_string()),
        name: Set("Debtors".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let revenue = account::ActiveModel {
        code: Set("7000".to_string()),
        name: Set("Consulting revenue".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let sale_sequence = sequence::ActiveModel {
        name: Set("Sales Journal Sequence".to_string()),
        prefix: Set(Some("INV/".to_string())),
        padding: Set(5),
        number_next: Set(1),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let sale_journal = journal::ActiveModel {
        name: Set("Sales Journal".to_string()),
        code: Set("SAL".to_string()),
        journal_type: Set(journal::JournalType::Sale),
        sequence_id: Set(Some(sale_sequence.id)),
        default_debit_account_id: Set(revenue.id),
        default_credit_account_id: Set(revenue.id),
        group_invoice_lines: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    Fixture {
        company,
        alice,
        bob,
        product,
        project,
        task,
        week,
        month,
        receivable,
        revenue,
        sale_journal,
    }
}

pub(crate) async fn seed_range(
    db: &DatabaseConnection,
    name: &str,
    range_type: RangeType,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    company_id: Option<i32>,
) -> date_range::Model {
    date_range::ActiveModel {
        name: Set(name.to_string()),
        range_type: Set(range_type),
        date_start: Set(ymd(start.0, start.1, start.2)),
        date_end: Set(ymd(end.0, end.1, end.2)),
        company_id: Set(company_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

/// A draft customer invoice with one line wired to an analytic invoice of
/// the fixture's January month and a detail timesheet line under it.
pub(crate) async fn seed_invoice_with_analytic(
    db: &DatabaseConnection,
    fixture: &Fixture,
    quantity: Decimal,
    price_unit: Decimal,
) -> (invoice::Model, invoice_line::Model, timesheet_line::Model) {
    let analytic = analytic_invoice::ActiveModel {
        name: Set("January 2024 invoicing".to_string()),
        month_id: Set(Some(fixture.month.id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let total = user_total::ActiveModel {
        analytic_invoice_id: Set(analytic.id),
        user_id: Set(fixture.alice.id),
        project_id: Set(Some(fixture.project.id)),
        unit_amount: Set(quantity),
        amount: Set(quantity * price_unit),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let detail = timesheet_line::ActiveModel {
        name: Set("migration work".to_string()),
        date: Set(Some(ymd(2024, 1, 30))),
        unit_amount: Set(quantity),
        amount: Set(quantity * price_unit),
        uom: Set(timesheet_line::Uom::Hour),
        state: Set(timesheet_line::TimesheetState::Invoiceable),
        user_id: Set(fixture.alice.id),
        company_id: Set(fixture.company.id),
        task_id: Set(Some(fixture.task.id)),
        project_id: Set(Some(fixture.project.id)),
        user_total_id: Set(Some(total.id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let invoice = invoice::ActiveModel {
        invoice_type: Set(invoice::InvoiceType::OutInvoice),
        state: Set(invoice::InvoiceState::Draft),
        journal_id: Set(fixture.sale_journal.id),
        account_id: Set(fixture.receivable.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let line = invoice_line::ActiveModel {
        invoice_id: Set(invoice.id),
        name: Set("Consulting January".to_string()),
        quantity: Set(quantity),
        price_unit: Set(price_unit),
        discount: Set(Decimal::ZERO),
        account_id: Set(fixture.revenue.id),
        product_id: Set(Some(fixture.product.id)),
        analytic_invoice_id: Set(Some(analytic.id)),
        user_id: Set(Some(fixture.alice.id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    (invoice, line, detail)
}

pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
