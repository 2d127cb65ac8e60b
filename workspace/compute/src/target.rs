//! Target invoice amount: a uniform discount applied across an invoice's
//! lines so the untaxed total lands on a negotiated figure.

use model::entities::{invoice, invoice_line};
use model::entities::prelude::*;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::instrument;

use crate::error::{ComputeError, Result};

/// Applies the invoice's target amount as a uniform percentage discount on
/// every line. Fails when no target is set or when the untaxed total is
/// zero, since no discount can reach a target from zero.
#[instrument(skip(db))]
pub async fn compute_target_invoice_amount(
    db: &DatabaseConnection,
    invoice_id: i32,
) -> Result<Vec<invoice_line::Model>> {
    let (invoice, lines) = invoice_with_lines(db, invoice_id).await?;
    let Some(target) = invoice.target_invoice_amount else {
        return Err(ComputeError::Invoice(format!(
            "invoice {} has no target amount",
            invoice.id
        )));
    };

    let untaxed: Decimal = lines
        .iter()
        .map(|line| line.quantity * line.price_unit)
        .sum();
    if untaxed == Decimal::ZERO {
        return Err(ComputeError::Invoice(format!(
            "invoice {} has a zero untaxed total",
            invoice.id
        )));
    }

    let discount = (Decimal::ONE - target / untaxed) * Decimal::new(100, 0);
    set_discount(db, lines, discount).await
}

/// Clears the per-line discounts set by the target computation.
#[instrument(skip(db))]
pub async fn reset_target_invoice_amount(
    db: &DatabaseConnection,
    invoice_id: i32,
) -> Result<Vec<invoice_line::Model>> {
    let (_, lines) = invoice_with_lines(db, invoice_id).await?;
    set_discount(db, lines, Decimal::ZERO).await
}

async fn invoice_with_lines(
    db: &DatabaseConnection,
    invoice_id: i32,
) -> Result<(invoice::Model, Vec<invoice_line::Model>)> {
    let invoice = Invoice::find_by_id(invoice_id)
        .one(db)
        .await?
        .ok_or_else(|| ComputeError::NotFound(format!("invoice {invoice_id}")))?;
    let lines = InvoiceLine::find()
        .filter(invoice_line::Column::InvoiceId.eq(invoice.id))
        .all(db)
        .await?;
    Ok((invoice, lines))
}

async fn set_discount(
    db: &DatabaseConnection,
    lines: Vec<invoice_line::Model>,
    discount: Decimal,
) -> Result<Vec<invoice_line::Model>> {
    let mut updated = Vec::with_capacity(lines.len());
    for line in lines {
        let mut active: invoice_line::ActiveModel = line.into();
        active.discount = Set(discount);
        updated.push(active.update(db).await?);
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{seed_basic, seed_invoice_with_analytic, setup_db};

    #[tokio::test]
    async fn test_target_amount_sets_uniform_discount() {
        let db = setup_db().await;
        let fixture = seed_basic(&db).await;
        let (invoice, _, _) =
            seed_invoice_with_analytic(&db, &fixture, Decimal::new(8, 0), Decimal::new(100, 0))
                .await;

        // Untaxed 800, target 600: every line gets a 25% discount.
        let mut active: invoice::ActiveModel = invoice.into();
        active.target_invoice_amount = Set(Some(Decimal::new(600, 0)));
        let invoice = active.update(&db).await.unwrap();

        let lines = compute_target_invoice_amount(&db, invoice.id).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].discount, Decimal::new(25, 0));
    }

    #[tokio::test]
    async fn test_reset_clears_discounts() {
        let db = setup_db().await;
        let fixture = seed_basic(&db).await;
        let (invoice, _, _) =
            seed_invoice_with_analytic(&db, &fixture, Decimal::new(8, 0), Decimal::new(100, 0))
                .await;

        let mut active: invoice::ActiveModel = invoice.into();
        active.target_invoice_amount = Set(Some(Decimal::new(600, 0)));
        let invoice = active.update(&db).await.unwrap();

        compute_target_invoice_amount(&db, invoice.id).await.unwrap();
        let lines = reset_target_invoice_amount(&db, invoice.id).await.unwrap();
        assert_eq!(lines[0].discount, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_missing_target_is_rejected() {
        let db = setup_db().await;
        let fixture = seed_basic(&db).await;
        let (invoice, _, _) =
            seed_invoice_with_analytic(&db, &fixture, Decimal::new(8, 0), Decimal::new(100, 0))
                .await;

        let result = compute_target_invoice_amount(&db, invoice.id).await;
        assert!(matches!(result, Err(ComputeError::Invoice(_))));
    }
}
