//! This file serves as the root for all SeaORM entity modules.
//! The data model mirrors the accounting/timesheet objects the invoicing
//! rules operate on: timesheet lines bucketed into date ranges, analytic
//! invoices grouping them for billing, and the journal/move/sequence
//! machinery the WIP entries are generated with.

pub mod account;
pub mod account_move;
pub mod account_move_line;
pub mod analytic_invoice;
pub mod company;
pub mod date_range;
pub mod invoice;
pub mod invoice_line;
pub mod journal;
pub mod product;
pub mod project;
pub mod sequence;
pub mod task;
pub mod task_user;
pub mod timesheet_line;
pub mod user;
pub mod user_total;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::account::Entity as Account;
    pub use super::account_move::Entity as AccountMove;
    pub use super::account_move_line::Entity as AccountMoveLine;
    pub use super::analytic_invoice::Entity as AnalyticInvoice;
    pub use super::company::Entity as Company;
    pub use super::date_range::Entity as DateRange;
    pub use super::invoice::Entity as Invoice;
    pub use super::invoice_line::Entity as InvoiceLine;
    pub use super::journal::Entity as Journal;
    pub use super::product::Entity as Product;
    pub use super::project::Entity as Project;
    pub use super::sequence::Entity as Sequence;
    pub use super::task::Entity as Task;
    pub use super::task_user::Entity as TaskUser;
    pub use super::timesheet_line::Entity as TimesheetLine;
    pub use super::user::Entity as User;
    pub use super::user_total::Entity as UserTotal;
}
