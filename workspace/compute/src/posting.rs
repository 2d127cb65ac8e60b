//! Invoice posting: turning invoice lines into journal move lines. The
//! timesheet user recorded on an invoice line travels with the generated
//! move line, survives merging, and ends up queryable on the ledger.

use std::collections::HashMap;

use chrono::NaiveDate;
use model::entities::invoice::{self, InvoiceType};
use model::entities::prelude::*;
use model::entities::{account_move, account_move_line, invoice_line};
use model::entities::account_move::MoveState;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

/// The values a move line is created from, before any merging.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveLineVals {
    pub invoice_line_id: Option<i32>,
    pub name: String,
    pub account_id: i32,
    pub debit: Decimal,
    pub credit: Decimal,
    /// Timesheet user the amount is attributed to, carried over from the
    /// invoice line.
    pub user_id: Option<i32>,
}

/// Builds one set of move-line values per invoice line.
///
/// Customer invoices and vendor refunds put the subtotal on the credit
/// side; vendor invoices and customer refunds on the debit side. The
/// line's user attribution is copied as-is.
pub async fn invoice_line_move_line_get(
    db: &DatabaseConnection,
    invoice: &invoice::Model,
) -> Result<Vec<MoveLineVals>> {
    let lines = InvoiceLine::find()
        .filter(invoice_line::Column::InvoiceId.eq(invoice.id))
        .order_by_asc(invoice_line::Column::Id)
        .all(db)
        .await?;

    let hundred = Decimal::new(100, 0);
    let mut vals = Vec::with_capacity(lines.len());
    for line in lines {
        let subtotal =
            line.quantity * line.price_unit * (Decimal::ONE - line.discount / hundred);
        let (debit, credit) = match invoice.invoice_type {
            InvoiceType::OutInvoice | InvoiceType::InRefund => (Decimal::ZERO, subtotal),
            InvoiceType::InInvoice | InvoiceType::OutRefund => (subtotal, Decimal::ZERO),
        };
        vals.push(MoveLineVals {
            invoice_line_id: Some(line.id),
            name: line.name,
            account_id: line.account_id,
            debit,
            credit,
            user_id: line.user_id,
        });
    }
    Ok(vals)
}

/// Merge key for move lines. The user attribution is part of the key, so
/// amounts of different users never collapse into one line even when the
/// journal groups invoice lines.
pub fn line_characteristic_hashcode(vals: &MoveLineVals) -> String {
    format!(
        "{}-{}-{:?}",
        vals.account_id,
        vals.debit > vals.credit,
        vals.user_id
    )
}

/// Collapses lines sharing a characteristic hashcode, summing their
/// amounts. The first line of each group keeps its name; a merged line no
/// longer traces back to a single invoice line.
pub fn group_move_lines(vals: Vec<MoveLineVals>) -> Vec<MoveLineVals> {
    let mut order: Vec<String> = Vec::new();
    let mut merged: HashMap<String, MoveLineVals> = HashMap::new();
    for line in vals {
        let key = line_characteristic_hashcode(&line);
        match merged.get_mut(&key) {
            Some(existing) => {
                existing.debit += line.debit;
                existing.credit += line.credit;
                existing.invoice_line_id = None;
            }
            None => {
                order.push(key.clone());
                merged.insert(key, line);
            }
        }
    }
    order
        .into_iter()
        .filter_map(|key| merged.remove(&key))
        .collect()
}

fn line_get_convert(vals: &MoveLineVals, move_id: i32) -> account_move_line::ActiveModel {
    account_move_line::ActiveModel {
        move_id: Set(move_id),
        account_id: Set(vals.account_id),
        name: Set(vals.name.clone()),
        debit: Set(vals.debit),
        credit: Set(vals.credit),
        user_id: Set(vals.user_id),
        reconciled: Set(false),
        ..Default::default()
    }
}

/// Creates and posts the accounting move for an invoice: one line per
/// invoice line (merged when the journal asks for it) plus the balancing
/// counterpart on the invoice's receivable/payable account.
#[instrument(skip(db, invoice), fields(invoice_id = invoice.id))]
pub async fn create_invoice_move(
    db: &DatabaseConnection,
    invoice: &invoice::Model,
    name: String,
    date: NaiveDate,
) -> Result<account_move::Model> {
    let journal = Journal::find_by_id(invoice.journal_id)
        .one(db)
        .await?
        .ok_or_else(|| ComputeError::NotFound(format!("journal {}", invoice.journal_id)))?;

    let mut lines = invoice_line_move_line_get(db, invoice).await?;
    if journal.group_invoice_lines {
        lines = group_move_lines(lines);
    }
    debug!(lines = lines.len(), "posting invoice move");

    let total_debit: Decimal = lines.iter().map(|line| line.debit).sum();
    let total_credit: Decimal = lines.iter().map(|line| line.credit).sum();

    let posted = account_move::ActiveModel {
        journal_id: Set(invoice.journal_id),
        name: Set(name),
        reference: Set(invoice.number.clone()),
        date: Set(date),
        state: Set(MoveState::Posted),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for vals in &lines {
        line_get_convert(vals, posted.id).insert(db).await?;
    }

    // The counterpart balances the move; it carries no user attribution.
    let counterpart = MoveLineVals {
        invoice_line_id: None,
        name: posted.name.clone(),
        account_id: invoice.account_id,
        debit: total_credit,
        credit: total_debit,
        user_id: None,
    };
    line_get_convert(&counterpart, posted.id).insert(db).await?;

    Ok(posted)
}
