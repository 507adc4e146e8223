/**
 * Link Reordering
 *
 * `reorder` rewrites the positions of a user's links to match a client
 * supplied order. Ids that do not belong to the caller are dropped before
 * anything else happens, so a foreign link can never be touched. What
 * remains must name every one of the caller's links exactly once; a
 * partial list would leave the omitted links on stale positions.
 *
 * The whole batch runs in one transaction holding the per-user advisory
 * lock. Any failure drops the transaction and every position rolls back.
 */

use std::collections::HashSet;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::error::ApiError;
use crate::backend::links::db::lock_user_links;
use crate::shared::{LinkId, UserId};

/// Why a requested order was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("Link {0} appears more than once")]
    Duplicate(LinkId),

    #[error("Reorder must include all of your links ({expected} expected, {supplied} supplied)")]
    Incomplete { expected: usize, supplied: usize },
}

impl From<ReorderError> for ApiError {
    fn from(err: ReorderError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

/// Failure of the transactional reorder
#[derive(Debug, Error)]
pub enum ReorderFailure {
    #[error(transparent)]
    Rejected(#[from] ReorderError),

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),
}

impl From<ReorderFailure> for ApiError {
    fn from(failure: ReorderFailure) -> Self {
        match failure {
            ReorderFailure::Rejected(err) => err.into(),
            ReorderFailure::Store(err) => ApiError::store("Failed to reorder links", err),
        }
    }
}

/// Compute `(link_id, position)` assignments for a requested order
///
/// `owned` is the caller's current link-id set. Positions start at 1.
pub fn plan_reorder(requested: &[LinkId], owned: &HashSet<LinkId>) -> Result<Vec<(LinkId, i32)>, ReorderError> {
    let mut seen = HashSet::with_capacity(owned.len());
    let mut plan = Vec::with_capacity(owned.len());

    for &id in requested.iter().filter(|id| owned.contains(*id)) {
        if !seen.insert(id) {
            return Err(ReorderError::Duplicate(id));
        }
        let position = i32::try_from(plan.len() + 1).map_err(|_| ReorderError::Incomplete {
            expected: owned.len(),
            supplied: requested.len(),
        })?;
        plan.push((id, position));
    }

    if plan.len() != owned.len() {
        return Err(ReorderError::Incomplete {
            expected: owned.len(),
            supplied: plan.len(),
        });
    }

    Ok(plan)
}

/// Apply a new order to all of `user_id`'s links atomically
pub async fn reorder(pool: &PgPool, user_id: UserId, requested: &[LinkId]) -> Result<usize, ReorderFailure> {
    let mut tx = pool.begin().await?;
    lock_user_links(&mut tx, user_id).await?;

    let owned: HashSet<LinkId> = sqlx::query_scalar("SELECT id FROM links WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .collect();

    let skipped = requested.iter().filter(|id| !owned.contains(*id)).count();
    if skipped > 0 {
        tracing::warn!(user_id, skipped, "Skipping link ids not owned by caller");
    }

    let plan = plan_reorder(requested, &owned)?;

    for &(link_id, position) in &plan {
        sqlx::query("UPDATE links SET position = $3 WHERE id = $1 AND user_id = $2")
            .bind(link_id)
            .bind(user_id)
            .bind(position)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(plan.len())
}
