//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): only the post list is fetched, over `reqwest`, because
//! page generation needs it before the first byte is sent. Everything else is
//! a browser-only concern and stubs out on the server.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result`/empty outputs instead of panics. The comment
//! fetcher in particular swallows every failure and yields an empty list, so
//! a broken comment read degrades to "no comments shown".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Comment, CommentBody, SessionUser, Tweet};

#[cfg(any(test, feature = "hydrate", feature = "ssr"))]
const TWEETS_PATH: &str = "/api/getTweets";

#[cfg(any(test, feature = "hydrate"))]
const ADD_COMMENT_PATH: &str = "/api/addComment";

#[cfg(feature = "hydrate")]
const LOGOUT_PATH: &str = "/api/auth/logout";

#[cfg(any(test, feature = "ssr"))]
const DEFAULT_PUBLIC_HOST: &str = "http://127.0.0.1";

#[cfg(any(test, feature = "ssr"))]
const DEFAULT_PORT: u16 = 3000;

#[cfg(any(test, feature = "hydrate"))]
fn comments_endpoint(tweet_id: &str) -> String {
    format!("/api/getComments?tweetId={tweet_id}")
}

#[cfg(any(test, feature = "ssr"))]
fn tweets_url(base_url: &str) -> String {
    format!("{}{TWEETS_PATH}", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate", feature = "ssr"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Pick the base URL for server-side fetches: an explicit non-blank
/// `PUBLIC_BASE_URL` wins, otherwise loopback on the listening port.
#[cfg(any(test, feature = "ssr"))]
fn resolve_public_base_url(public_base_url: Option<String>, port: Option<String>) -> String {
    if let Some(url) = public_base_url.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
        return url;
    }
    let port = port
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    format!("{DEFAULT_PUBLIC_HOST}:{port}")
}

/// Base URL the server uses to reach its own API while rendering pages.
/// Reads `PUBLIC_BASE_URL`, falling back to `http://127.0.0.1:$PORT`.
#[cfg(feature = "ssr")]
#[must_use]
pub fn public_base_url() -> String {
    resolve_public_base_url(std::env::var("PUBLIC_BASE_URL").ok(), std::env::var("PORT").ok())
}

/// Fetch the full post list from `/api/getTweets`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not decode.
pub async fn fetch_tweets() -> Result<Vec<Tweet>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TWEETS_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("fetch tweets", resp.status()));
        }
        resp.json::<Vec<Tweet>>().await.map_err(|e| e.to_string())
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        let resp = reqwest::get(tweets_url(&public_base_url()))
            .await
            .map_err(|e| e.to_string())?;
        if !resp.status().is_success() {
            return Err(request_failed_message("fetch tweets", resp.status().as_u16()));
        }
        resp.json::<Vec<Tweet>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        Err("not available outside the app".to_owned())
    }
}

/// Fetch the comments attached to `tweet_id`, newest first.
///
/// Never fails: any transport, status, or decode error is logged and an
/// empty list is returned.
pub async fn fetch_comments(tweet_id: &str) -> Vec<Comment> {
    #[cfg(feature = "hydrate")]
    {
        match try_fetch_comments(tweet_id).await {
            Ok(comments) => comments,
            Err(e) => {
                log::warn!("comment fetch for {tweet_id} failed: {e}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tweet_id;
        Vec::new()
    }
}

#[cfg(feature = "hydrate")]
async fn try_fetch_comments(tweet_id: &str) -> Result<Vec<Comment>, String> {
    let resp = gloo_net::http::Request::get(&comments_endpoint(tweet_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("fetch comments", resp.status()));
    }
    resp.json::<Vec<Comment>>().await.map_err(|e| e.to_string())
}

/// Submit a new comment via `POST /api/addComment`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn add_comment(body: &CommentBody) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ADD_COMMENT_PATH)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("add comment", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Fetch the current viewer from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current viewer by calling `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status; the session cookie is then still live.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("logout", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
