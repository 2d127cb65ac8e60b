#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use model::entities::date_range::RangeType;
    use model::entities::*;
    use moka::future::Cache;
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Ids of the master data seeded by `seed_master_data`.
    pub struct MasterData {
        pub company_id: i32,
        pub alice_id: i32,
        pub bob_id: i32,
        pub product_id: i32,
        pub project_id: i32,
        pub task_id: i32,
        pub week_id: i32,
        pub month_id: i32,
        pub receivable_id: i32,
        pub revenue_id: i32,
        pub sale_journal_id: i32,
    }

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Seed the master-data graph the integration tests build on: a
    /// company, two users, a task/user product assignment, January 2024
    /// periods, accounts and a numbered sales journal. The WIP journal
    /// comes from the installation migration.
    pub async fn seed_master_data(db: &DatabaseConnection) -> MasterData {
        let company = company::ActiveModel {
            name: Set("Borealis Consulting BV".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test company");

        let alice = user::ActiveModel {
            name: Set("alice".to_string()),
            operating_unit: Set(Some("NL".to_string())),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test user 1");

        let bob = user::ActiveModel {
            name: Set("bob".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test user 2");

        let product = product::ActiveModel {
            name: Set("Senior consultant hours".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test product");

        let project = project::ActiveModel {
            name: Set("ERP rollout".to_string()),
            company_id: Set(company.id),
            correction_charge: Set(true),
            specs_invoice_report: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test project");

        let task = task::ActiveModel {
            name: Set("Data migration".to_string()),
            project_id: Set(project.id),
            correction_charge: Set(true),
            chargeable: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test task");

        task_user::ActiveModel {
            task_id: Set(task.id),
            user_id: Set(alice.id),
            product_id: Set(Some(product.id)),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create task/user assignment");

        let week = date_range::ActiveModel {
            name: Set("2024, week 5".to_string()),
            range_type: Set(RangeType::Week),
            date_start: Set(date(2024, 1, 29)),
            date_end: Set(date(2024, 2, 4)),
            company_id: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create week range");

        let month = date_range::ActiveModel {
            name: Set("January 2024".to_string()),
            range_type: Set(RangeType::FiscalMonth),
            date_start: Set(date(2024, 1, 1)),
            date_end: Set(date(2024, 1, 31)),
            company_id: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create month range");

        let receivable = account::ActiveModel {
            code: Set("1100".to_string()),
            name: Set("Debtors".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create receivable account");

        let revenue = account::ActiveModel {
            code: Set("7000".to_string()),
            name: Set("Consulting revenue".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create revenue account");

        let sale_sequence = sequence::ActiveModel {
            name: Set("Sales Journal Sequence".to_string()),
            prefix: Set(Some("INV/".to_string())),
            padding: Set(5),
            number_next: Set(1),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create sales sequence");

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
        .expect("Failed to create sales journal");

        MasterData {
            company_id: company.id,
            alice_id: alice.id,
            bob_id: bob.id,
            product_id: product.id,
            project_id: project.id,
            task_id: task.id,
            week_id: week.id,
            month_id: month.id,
            receivable_id: receivable.id,
            revenue_id: revenue.id,
            sale_journal_id: sale_journal.id,
        }
    }

    /// Seed an analytic invoice for the fixture month with one user total
    /// and one invoiceable detail line. Returns the analytic invoice id
    /// and the detail line id.
    pub async fn seed_analytic_invoice(
        db: &DatabaseConnection,
        master: &MasterData,
        hours: Decimal,
        amount: Decimal,
    ) -> (i32, i32) {
        let analytic = analytic_invoice::ActiveModel {
            name: Set("January 2024 invoicing".to_string()),
            month_id: Set(Some(master.month_id)),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create analytic invoice");

        let total = user_total::ActiveModel {
            analytic_invoice_id: Set(analytic.id),
            user_id: Set(master.alice_id),
            project_id: Set(Some(master.project_id)),
            unit_amount: Set(hours),
            amount: Set(amount),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create user total");

        let detail = timesheet_line::ActiveModel {
            name: Set("migration work".to_string()),
            date: Set(Some(date(2024, 1, 30))),
            unit_amount: Set(hours),
            amount: Set(amount),
            uom: Set(timesheet_line::Uom::Hour),
            state: Set(timesheet_line::TimesheetState::Invoiceable),
            user_id: Set(master.alice_id),
            company_id: Set(master.company_id),
            task_id: Set(Some(master.task_id)),
            project_id: Set(Some(master.project_id)),
            user_total_id: Set(Some(total.id)),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create detail line");

        (analytic.id, detail.id)
    }

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> (AppState, MasterData) {
        let db = setup_test_db().await;
        let master = seed_master_data(&db).await;
        let cache = Cache::new(100);

        (AppState { db, cache }, master)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing, returning the state for direct
    /// database access in tests.
    pub async fn setup_test_app() -> (Router, AppState, MasterData) {
        let _ = init_test_tracing();

        let (state, master) = setup_test_app_state().await;
        let router = create_router(state.clone());
        (router, state, master)
    }
}
