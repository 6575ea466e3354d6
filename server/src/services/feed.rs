//! Feed service: tweet and comment reads, comment writes.
//!
//! DESIGN
//! ======
//! Rows are serialized with the feed's historical wire keys (`_id`,
//! `_createdAt`, camelCase) so the client DTOs deserialize them directly.
//! Timestamps are rendered by Postgres as UTC RFC 3339 with millisecond
//! precision.
//!
//! ERROR HANDLING
//! ==============
//! The parent-tweet check and the insert are one statement: a foreign-key
//! violation on insert is reported as `TweetNotFound`, so a tweet deleted
//! between validation and write cannot leave an orphan comment.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

pub const UNKNOWN_USERNAME: &str = "Unknown User";
pub const DEFAULT_PROFILE_IMG: &str = "https://links.papareact.com/gll";

const CREATED_AT_SQL: &str = r#"to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS.MS"Z"')"#;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("comment text is empty")]
    EmptyComment,
    #[error("invalid tweet id: {0}")]
    InvalidTweetId(String),
    #[error("tweet not found: {0}")]
    TweetNotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A post as served by `GET /api/getTweets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetRow {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "_createdAt")]
    pub created_at: String,
    pub text: String,
    pub username: String,
    #[serde(rename = "profileImg")]
    pub profile_img: String,
    pub image: Option<String>,
}

/// A comment as served by `GET /api/getComments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRow {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "_createdAt")]
    pub created_at: String,
    pub comment: String,
    pub username: String,
    #[serde(rename = "profileImg")]
    pub profile_img: String,
    #[serde(rename = "tweetId")]
    pub tweet_id: Uuid,
}

/// Body of `POST /api/addComment`. Every field tolerates absence so
/// validation can report a precise error instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub tweet_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile_img: String,
}

/// A validated comment ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub tweet_id: Uuid,
    pub comment: String,
    pub username: String,
    pub profile_img: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check a submission and fill in sentinel author fields.
///
/// # Errors
///
/// `EmptyComment` for blank text, `InvalidTweetId` when the parent id is not
/// a UUID.
pub fn validate_comment(body: CommentBody) -> Result<NewComment, FeedError> {
    if body.comment.trim().is_empty() {
        return Err(FeedError::EmptyComment);
    }
    let tweet_id = Uuid::parse_str(body.tweet_id.trim()).map_err(|_| FeedError::InvalidTweetId(body.tweet_id.clone()))?;
    let username = non_blank_or(body.username, UNKNOWN_USERNAME);
    let profile_img = non_blank_or(body.profile_img, DEFAULT_PROFILE_IMG);
    Ok(NewComment { tweet_id, comment: body.comment, username, profile_img })
}

fn non_blank_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() { fallback.to_owned() } else { value }
}

pub(crate) fn classify_insert_error(err: sqlx::Error, tweet_id: Uuid) -> FeedError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => FeedError::TweetNotFound(tweet_id),
        _ => FeedError::Database(err),
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// List visible tweets, newest first. Blocked tweets are never returned.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_tweets(pool: &PgPool) -> Result<Vec<TweetRow>, FeedError> {
    let sql = format!(
        "SELECT id, text, username, profile_img, image, {CREATED_AT_SQL} AS created_at
         FROM tweets
         WHERE NOT block_tweet
         ORDER BY created_at DESC"
    );
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    Ok(rows
        .iter()
        .map(|r| TweetRow {
            id: r.get("id"),
            created_at: r.get("created_at"),
            text: r.get("text"),
            username: r.get("username"),
            profile_img: r.get("profile_img"),
            image: r.get("image"),
        })
        .collect())
}

/// List the comments attached to `tweet_id`, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_comments(pool: &PgPool, tweet_id: Uuid) -> Result<Vec<CommentRow>, FeedError> {
    let sql = format!(
        "SELECT id, tweet_id, comment, username, profile_img, {CREATED_AT_SQL} AS created_at
         FROM comments
         WHERE tweet_id = $1
         ORDER BY created_at DESC"
    );
    let rows = sqlx::query(&sql).bind(tweet_id).fetch_all(pool).await?;

    Ok(rows.iter().map(comment_from_row).collect())
}

/// Insert a validated comment and return the stored row.
///
/// # Errors
///
/// `TweetNotFound` when the parent tweet does not exist, otherwise a database
/// error.
pub async fn add_comment(pool: &PgPool, new: NewComment) -> Result<CommentRow, FeedError> {
    let sql = format!(
        "INSERT INTO comments (id, tweet_id, comment, username, profile_img)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, tweet_id, comment, username, profile_img, {CREATED_AT_SQL} AS created_at"
    );
    let row = sqlx::query(&sql)
        .bind(Uuid::new_v4())
        .bind(new.tweet_id)
        .bind(&new.comment)
        .bind(&new.username)
        .bind(&new.profile_img)
        .fetch_one(pool)
        .await
        .map_err(|e| classify_insert_error(e, new.tweet_id))?;

    let comment = comment_from_row(&row);
    info!(tweet_id = %comment.tweet_id, comment_id = %comment.id, "comment added");
    Ok(comment)
}

fn comment_from_row(r: &sqlx::postgres::PgRow) -> CommentRow {
    CommentRow {
        id: r.get("id"),
        created_at: r.get("created_at"),
        comment: r.get("comment"),
        username: r.get("username"),
        profile_img: r.get("profile_img"),
        tweet_id: r.get("tweet_id"),
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
