//! Feed routes: tweet list, comment list, comment submission.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::services::feed::{self, CommentBody, CommentRow, FeedError, TweetRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentsQuery {
    #[serde(rename = "tweetId")]
    pub tweet_id: Uuid,
}

pub(crate) fn feed_error_to_status(err: FeedError) -> StatusCode {
    match err {
        FeedError::EmptyComment | FeedError::InvalidTweetId(_) => StatusCode::BAD_REQUEST,
        FeedError::TweetNotFound(_) => StatusCode::NOT_FOUND,
        FeedError::Database(e) => {
            tracing::error!(error = %e, "feed query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/getTweets`: visible tweets, newest first.
pub async fn get_tweets(State(state): State<AppState>) -> Result<Json<Vec<TweetRow>>, StatusCode> {
    let tweets = feed::list_tweets(&state.pool)
        .await
        .map_err(feed_error_to_status)?;
    Ok(Json(tweets))
}

/// `GET /api/getComments?tweetId=`: comments for one tweet, newest first.
pub async fn get_comments(
    State(state): State<AppState>,
    Query(query): Query<CommentsQuery>,
) -> Result<Json<Vec<CommentRow>>, StatusCode> {
    let comments = feed::list_comments(&state.pool, query.tweet_id)
        .await
        .map_err(feed_error_to_status)?;
    Ok(Json(comments))
}

/// `POST /api/addComment`: validate and store a comment, returning it.
pub async fn add_comment(
    State(state): State<AppState>,
    Json(body): Json<CommentBody>,
) -> Result<Json<CommentRow>, StatusCode> {
    let new = feed::validate_comment(body).map_err(feed_error_to_status)?;
    let comment = feed::add_comment(&state.pool, new)
        .await
        .map_err(feed_error_to_status)?;
    Ok(Json(comment))
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
