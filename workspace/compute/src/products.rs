//! Product resolution from task/user assignments.

use model::entities::prelude::*;
use model::entities::task_user;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::instrument;

use crate::error::Result;

/// The product configured for a (task, user) pair, if any. At most one
/// assignment exists per pair; an assignment without a product resolves
/// to `None` just like a missing assignment.
#[instrument(skip(db))]
pub async fn task_user_product(
    db: &DatabaseConnection,
    task_id: i32,
    user_id: i32,
) -> Result<Option<i32>> {
    let assignment = TaskUser::find()
        .filter(task_user::Column::TaskId.eq(task_id))
        .filter(task_user::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    Ok(assignment.and_then(|assignment| assignment.product_id))
}
