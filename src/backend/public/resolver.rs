/**
 * Public Profile Resolver
 *
 * `GET /users/{username}` is the hot read path: every profile view hits
 * it. The user row and their links come back from one LEFT JOIN, one row
 * per link (or a single row with NULL link columns for a user without
 * links), and are folded into a [`PublicPage`]. The email column is never
 * selected.
 */

use sqlx::PgPool;

use crate::shared::{LinkId, LinkView, PublicPage, PublicProfile};

/// One row of the profile/link join
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PublicRow {
    pub username: String,
    pub accent_color: Option<String>,
    pub avatar_path: Option<String>,
    pub link_id: Option<LinkId>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub position: Option<i32>,
    pub clicks: Option<i64>,
}

/// Fetch a user's public page in a single round trip
pub async fn fetch_public_page(pool: &PgPool, username: &str) -> Result<Option<PublicPage>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PublicRow>(
        r#"
        SELECT u.username, u.accent_color, u.avatar_path,
               l.id AS link_id, l.title, l.url, l.position, l.clicks
        FROM users u
        LEFT JOIN links l ON l.user_id = u.id
        WHERE u.username = $1
        ORDER BY l.position ASC NULLS LAST, l.id ASC
        "#,
    )
    .bind(username)
    .fetch_all(pool)
    .await?;

    Ok(assemble_public_page(rows))
}

/// Fold join rows into a page; `None` when the user does not exist
pub fn assemble_public_page(rows: Vec<PublicRow>) -> Option<PublicPage> {
    let first = rows.first()?;
    let profile = PublicProfile {
        username: first.username.clone(),
        accent_color: first.accent_color.clone(),
        avatar_path: first.avatar_path.clone(),
    };

    let links = rows
        .into_iter()
        .filter_map(|row| {
            Some(LinkView {
                id: row.link_id?,
                title: row.title?,
                url: row.url?,
                position: row.position?,
                clicks: row.clicks?,
            })
        })
        .collect();

    Some(PublicPage { profile, links })
}
