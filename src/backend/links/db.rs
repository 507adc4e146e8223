/**
 * Link Database Operations
 *
 * This module owns the `links` table. Reads go straight to the pool;
 * anything that assigns positions runs in a transaction that first takes
 * `pg_advisory_xact_lock(user_id)`, so position writes for one user never
 * interleave. The lock is released when the transaction commits or rolls
 * back (including when it is dropped on an error path).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};

use crate::shared::{LinkId, LinkView, UserId, ValidLink};

/// Link row as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Link {
    pub id: LinkId,
    pub user_id: UserId,
    pub title: String,
    pub url: String,
    pub position: i32,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkView {
    fn from(link: Link) -> Self {
        LinkView {
            id: link.id,
            title: link.title,
            url: link.url,
            position: link.position,
            clicks: link.clicks,
        }
    }
}

/// Result of checking who owns a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Owned,
    NotOwned,
    Missing,
}

impl Ownership {
    pub fn of(owner: Option<UserId>, user_id: UserId) -> Self {
        match owner {
            Some(owner) if owner == user_id => Self::Owned,
            Some(_) => Self::NotOwned,
            None => Self::Missing,
        }
    }
}

/// Serialise position writes for one user until the transaction ends
pub async fn lock_user_links(
    tx: &mut Transaction<'_, Postgres>,
    user_id: UserId,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(user_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// List a user's links in display order
pub async fn list_links(pool: &PgPool, user_id: UserId) -> Result<Vec<Link>, sqlx::Error> {
    sqlx::query_as::<_, Link>(
        r#"
        SELECT id, user_id, title, url, position, clicks, created_at
        FROM links
        WHERE user_id = $1
        ORDER BY position ASC, id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Append a link after the user's current last position
pub async fn create_link(pool: &PgPool, user_id: UserId, link: &ValidLink) -> Result<Link, sqlx::Error> {
    let mut tx = pool.begin().await?;
    lock_user_links(&mut tx, user_id).await?;

    let created = sqlx::query_as::<_, Link>(
        r#"
        INSERT INTO links (user_id, title, url, position)
        VALUES (
            $1, $2, $3,
            (SELECT COALESCE(MAX(position), 0) + 1 FROM links WHERE user_id = $1)
        )
        RETURNING id, user_id, title, url, position, clicks, created_at
        "#,
    )
    .bind(user_id)
    .bind(&link.title)
    .bind(&link.url)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(created)
}

/// Who owns `link_id`, relative to `user_id`
pub async fn check_ownership(pool: &PgPool, link_id: LinkId, user_id: UserId) -> Result<Ownership, sqlx::Error> {
    let owner: Option<UserId> = sqlx::query_scalar("SELECT user_id FROM links WHERE id = $1")
        .bind(link_id)
        .fetch_optional(pool)
        .await?;

    Ok(Ownership::of(owner, user_id))
}

/// Overwrite title and url; `None` if the link is not owned by `user_id`
pub async fn update_link(
    pool: &PgPool,
    user_id: UserId,
    link_id: LinkId,
    link: &ValidLink,
) -> Result<Option<Link>, sqlx::Error> {
    sqlx::query_as::<_, Link>(
        r#"
        UPDATE links
        SET title = $3, url = $4
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, title, url, position, clicks, created_at
        "#,
    )
    .bind(link_id)
    .bind(user_id)
    .bind(&link.title)
    .bind(&link.url)
    .fetch_optional(pool)
    .await
}

/// Delete a link owned by `user_id`; remaining positions are left as-is
pub async fn delete_link(pool: &PgPool, user_id: UserId, link_id: LinkId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM links WHERE id = $1 AND user_id = $2")
        .bind(link_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Atomically add one click; `false` if the link does not exist
pub async fn record_click(pool: &PgPool, link_id: LinkId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE links SET clicks = clicks + 1 WHERE id = $1")
        .bind(link_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_classification() {
        assert_eq!(Ownership::of(Some(1), 1), Ownership::Owned);
        assert_eq!(Ownership::of(Some(2), 1), Ownership::NotOwned);
        assert_eq!(Ownership::of(None, 1), Ownership::Missing);
    }

    #[test]
    fn test_link_view_drops_owner_and_timestamp() {
        let link = Link {
            id: 9,
            user_id: 4,
            title: "Blog".to_string(),
            url: "https://blog.test".to_string(),
            position: 2,
            clicks: 17,
            created_at: Utc::now(),
        };

        let view = LinkView::from(link);
        assert_eq!(view.id, 9);
        assert_eq!(view.position, 2);
        assert_eq!(view.clicks, 17);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("userId").is_none());
        assert!(json.get("user_id").is_none());
    }
}
