//! Work-in-progress journal entries. When a customer invoice is posted in
//! a later month than the one its timesheet lines were worked in, the
//! revenue is mirrored into the WIP journal dated at the end of the worked
//! month, and reversed one day later, so each period's reporting sees the
//! revenue where the work happened.

use chrono::{Duration, NaiveDate};
use model::entities::account_move::{self, MoveState};
use model::entities::invoice::{self, InvoiceState, InvoiceType};
use model::entities::journal::{self, JournalType};
use model::entities::prelude::*;
use model::entities::{account_move_line, analytic_invoice, date_range, invoice_line};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{debug, info, instrument};

use crate::error::{ComputeError, Result};
use crate::posting;

/// The invoicing period of an invoice: the month of the first analytic
/// invoice referenced by its lines, in line order.
pub async fn invoice_month(
    db: &DatabaseConnection,
    invoice_id: i32,
) -> Result<Option<date_range::Model>> {
    let analytic = first_analytic_invoice(db, invoice_id).await?;
    match analytic.and_then(|analytic| analytic.month_id) {
        Some(month_id) => Ok(DateRange::find_by_id(month_id).one(db).await?),
        None => Ok(None),
    }
}

async fn first_analytic_invoice(
    db: &DatabaseConnection,
    invoice_id: i32,
) -> Result<Option<analytic_invoice::Model>> {
    let line = InvoiceLine::find()
        .filter(invoice_line::Column::InvoiceId.eq(invoice_id))
        .filter(invoice_line::Column::AnalyticInvoiceId.is_not_null())
        .order_by_asc(invoice_line::Column::Id)
        .one(db)
        .await?;
    match line.and_then(|line| line.analytic_invoice_id) {
        Some(analytic_id) => Ok(AnalyticInvoice::find_by_id(analytic_id).one(db).await?),
        None => Ok(None),
    }
}

/// Opens a draft invoice: numbers it via the journal sequence, posts its
/// accounting move, and runs the WIP flow when the billing period falls in
/// a different month than the invoice date.
#[instrument(skip(db))]
pub async fn open_invoice(
    db: &DatabaseConnection,
    invoice_id: i32,
    today: NaiveDate,
) -> Result<invoice::Model> {
    let found = Invoice::find_by_id(invoice_id)
        .one(db)
        .await?
        .ok_or_else(|| ComputeError::NotFound(format!("invoice {invoice_id}")))?;
    if found.state != InvoiceState::Draft {
        return Err(ComputeError::Invoice(format!(
            "invoice {} is not in draft state",
            found.id
        )));
    }
    let date_invoice = found.date_invoice.unwrap_or(today);

    let journal = Journal::find_by_id(found.journal_id)
        .one(db)
        .await?
        .ok_or_else(|| ComputeError::NotFound(format!("journal {}", found.journal_id)))?;
    let number = match found.number.clone() {
        Some(number) => number,
        None => next_invoice_number(db, &found, &journal, date_invoice).await?,
    };

    let mut active: invoice::ActiveModel = found.into();
    active.state = Set(InvoiceState::Open);
    active.number = Set(Some(number.clone()));
    active.date_invoice = Set(Some(date_invoice));
    let mut opened = active.update(db).await?;

    if opened.move_id.is_none() {
        let posted = posting::create_invoice_move(db, &opened, number, date_invoice).await?;
        let mut active: invoice::ActiveModel = opened.into();
        active.move_id = Set(Some(posted.id));
        opened = active.update(db).await?;
        info!(move_id = posted.id, "posted invoice move");
    }

    if opened.invoice_type == InvoiceType::OutInvoice {
        if let Some(month) = invoice_month(db, opened.id).await? {
            let worked_period = month.date_start.format("%Y-%m").to_string();
            let posting_period = date_invoice.format("%Y-%m").to_string();
            if worked_period != posting_period {
                opened = wip_move_create(db, opened, &month).await?;
            }
        }
    }

    Ok(opened)
}

async fn next_invoice_number(
    db: &DatabaseConnection,
    invoice: &invoice::Model,
    journal: &journal::Model,
    date: NaiveDate,
) -> Result<String> {
    match journal.sequence_id {
        Some(sequence_id) => {
            let seq = Sequence::find_by_id(sequence_id)
                .one(db)
                .await?
                .ok_or_else(|| ComputeError::NotFound(format!("sequence {sequence_id}")))?;
            Ok(seq.next_by_date(db, date).await?)
        }
        None => Ok(format!("INV/{:05}", invoice.id)),
    }
}

/// Creates the WIP entry for an invoice and its next-day reversal.
///
/// The WIP move mirrors the invoice's posted move dated at the end of the
/// worked month, with the receivable account swapped for the WIP journal's
/// default account. Refunds and vendor documents never get one, and an
/// invoice gets at most one.
#[instrument(skip(db, invoice, month), fields(invoice_id = invoice.id))]
pub async fn wip_move_create(
    db: &DatabaseConnection,
    invoice: invoice::Model,
    month: &date_range::Model,
) -> Result<invoice::Model> {
    let excluded = matches!(
        invoice.invoice_type,
        InvoiceType::OutRefund | InvoiceType::InInvoice | InvoiceType::InRefund
    );
    if excluded || invoice.wip_move_id.is_some() {
        return Ok(invoice);
    }
    let Some(move_id) = invoice.move_id else {
        return Ok(invoice);
    };

    let wip_journal = Journal::find()
        .filter(journal::Column::JournalType.eq(JournalType::Wip))
        .one(db)
        .await?
        .ok_or_else(|| ComputeError::NotFound("WIP journal".to_string()))?;
    let sequence_id = wip_journal
        .sequence_id
        .ok_or(ComputeError::MissingWipSequence)?;
    let seq = Sequence::find_by_id(sequence_id)
        .one(db)
        .await?
        .ok_or(ComputeError::MissingWipSequence)?;

    let invoice_move = AccountMove::find_by_id(move_id)
        .one(db)
        .await?
        .ok_or_else(|| ComputeError::NotFound(format!("account move {move_id}")))?;

    let wip_name = seq.next_by_date(db, month.date_end).await?;
    let wip_move = account_move::ActiveModel {
        journal_id: Set(wip_journal.id),
        name: Set(wip_name),
        reference: Set(invoice.number.clone()),
        date: Set(month.date_end),
        state: Set(MoveState::Posted),
        ..Default::default()
    }
    .insert(db)
    .await?;

    // Mirror the invoice move, swapping the receivable account for the
    // WIP account.
    let wip_account = wip_default_account(&invoice, &wip_journal);
    let source_lines = AccountMoveLine::find()
        .filter(account_move_line::Column::MoveId.eq(invoice_move.id))
        .order_by_asc(account_move_line::Column::Id)
        .all(db)
        .await?;
    let mut mirrored = Decimal::ZERO;
    for line in &source_lines {
        let account_id = if line.account_id == invoice.account_id {
            wip_account
        } else {
            line.account_id
        };
        account_move_line::ActiveModel {
            move_id: Set(wip_move.id),
            account_id: Set(account_id),
            name: Set(line.name.clone()),
            debit: Set(line.debit),
            credit: Set(line.credit),
            user_id: Set(line.user_id),
            reconciled: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await?;
        mirrored += line.debit + line.credit;
    }
    info!(wip_move_id = wip_move.id, date = %wip_move.date, "created WIP move");

    let mut active: invoice::ActiveModel = invoice.into();
    active.wip_move_id = Set(Some(wip_move.id));
    let updated = active.update(db).await?;

    // Reverse one day after the worked month ends. Reconcile only when
    // the WIP move actually carries amounts.
    let reverse_date = wip_move.date + Duration::days(1);
    let reconcile = mirrored > Decimal::ZERO;
    let reversals = reverse_moves(db, &[wip_move], reverse_date, reconcile).await?;

    // A single reversal is renumbered from the WIP sequence, under the
    // reversal date.
    if let [reversal] = reversals.as_slice() {
        let seq = Sequence::find_by_id(sequence_id)
            .one(db)
            .await?
            .ok_or(ComputeError::MissingWipSequence)?;
        let name = seq.next_by_date(db, reverse_date).await?;
        let mut active: account_move::ActiveModel = reversal.clone().into();
        active.name = Set(name);
        active.update(db).await?;
    }

    Ok(updated)
}

/// The WIP journal account the receivable line is rebooked onto: the
/// credit default for customer documents, the debit default otherwise.
fn wip_default_account(invoice: &invoice::Model, journal: &journal::Model) -> i32 {
    match invoice.invoice_type {
        InvoiceType::OutInvoice | InvoiceType::InRefund => journal.default_credit_account_id,
        InvoiceType::OutRefund | InvoiceType::InInvoice => journal.default_debit_account_id,
    }
}

/// Posts a mirror move for each given move at `date`, with debit and
/// credit swapped. When `reconcile` is set, the original and mirror lines
/// are flagged reconciled against each other.
async fn reverse_moves(
    db: &DatabaseConnection,
    moves: &[account_move::Model],
    date: NaiveDate,
    reconcile: bool,
) -> Result<Vec<account_move::Model>> {
    let mut reversals = Vec::with_capacity(moves.len());
    for original in moves {
        let reversal = account_move::ActiveModel {
            journal_id: Set(original.journal_id),
            name: Set(format!("WIP Invoicing Reverse {}", original.name)),
            reference: Set(original.reference.clone()),
            date: Set(date),
            state: Set(MoveState::Posted),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let lines = AccountMoveLine::find()
            .filter(account_move_line::Column::MoveId.eq(original.id))
            .order_by_asc(account_move_line::Column::Id)
            .all(db)
            .await?;
        for line in lines {
            account_move_line::ActiveModel {
                move_id: Set(reversal.id),
                account_id: Set(line.account_id),
                name: Set(format!("WIP Invoicing Reverse {}", line.name)),
                debit: Set(line.credit),
                credit: Set(line.debit),
                user_id: Set(line.user_id),
                reconciled: Set(reconcile),
                ..Default::default()
            }
            .insert(db)
            .await?;
            if reconcile {
                let mut original_line: account_move_line::ActiveModel = line.into();
                original_line.reconciled = Set(true);
                original_line.update(db).await?;
            }
        }
        debug!(reversal_id = reversal.id, "reversed move");
        reversals.push(reversal);
    }
    Ok(reversals)
}

/// Cancels an invoice. The WIP reference is cleared before its move is
/// removed, then both the WIP move and the invoice's own move are
/// invalidated and deleted; their lines go with them.
#[instrument(skip(db))]
pub async fn cancel_invoice(db: &DatabaseConnection, invoice_id: i32) -> Result<invoice::Model> {
    let found = Invoice::find_by_id(invoice_id)
        .one(db)
        .await?
        .ok_or_else(|| ComputeError::NotFound(format!("invoice {invoice_id}")))?;

    let wip_move_id = found.wip_move_id;
    let move_id = found.move_id;

    let mut active: invoice::ActiveModel = found.into();
    active.state = Set(InvoiceState::Cancelled);
    active.wip_move_id = Set(None);
    active.move_id = Set(None);
    let cancelled = active.update(db).await?;

    for id in [wip_move_id, move_id].into_iter().flatten() {
        if let Some(posted) = AccountMove::find_by_id(id).one(db).await? {
            let mut active: account_move::ActiveModel = posted.into();
            active.state = Set(MoveState::Cancelled);
            let invalidated = active.update(db).await?;
            AccountMoveLine::delete_many()
                .filter(account_move_line::Column::MoveId.eq(invalidated.id))
                .exec(db)
                .await?;
            invalidated.delete(db).await?;
        }
    }
    info!(invoice_id, "cancelled invoice");

    Ok(cancelled)
}
