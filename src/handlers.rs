pub mod date_ranges;
pub mod health;
pub mod invoices;
pub mod reports;
pub mod timesheet_lines;
