//! Invoicing business rules on top of the persisted data model: period
//! classification of timesheet lines, task/user product resolution,
//! correction-charge grouping, invoice posting with user attribution, and
//! the WIP journal-entry lifecycle.
//!
//! Every entry point takes a `&DatabaseConnection` and runs inside the
//! caller's transaction scope; ordering guarantees (one WIP move per
//! invoice, one reversal per WIP move) come from reading current state
//! before acting, not from any locking of our own.

pub mod error;
pub mod grouping;
pub mod periods;
pub mod posting;
pub mod products;
pub mod target;
pub mod timesheet;
pub mod wip;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ComputeError, Result};
