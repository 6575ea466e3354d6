//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field for field. The feed
//! keeps its historical `_id` / `_createdAt` / camelCase keys, so every
//! rename lives here and nowhere else in the UI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Username used for comment submissions when no session is present.
pub const UNKNOWN_USERNAME: &str = "Unknown User";

/// Avatar used for comment submissions when no session image is present.
pub const DEFAULT_PROFILE_IMG: &str = "https://links.papareact.com/gll";

/// A single feed post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Unique post identifier (UUID string).
    #[serde(rename = "_id")]
    pub id: String,
    /// Creation timestamp (RFC 3339, UTC).
    #[serde(rename = "_createdAt")]
    pub created_at: String,
    /// Body text.
    pub text: String,
    /// Author display name.
    pub username: String,
    /// Author avatar URL.
    #[serde(rename = "profileImg")]
    pub profile_img: String,
    /// Optional attached image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// A reply attached to exactly one [`Tweet`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier (UUID string).
    #[serde(rename = "_id")]
    pub id: String,
    /// Creation timestamp (RFC 3339, UTC).
    #[serde(rename = "_createdAt")]
    pub created_at: String,
    /// Comment text.
    pub comment: String,
    /// Author display name.
    pub username: String,
    /// Author avatar URL.
    #[serde(rename = "profileImg")]
    pub profile_img: String,
    /// Parent post identifier.
    #[serde(rename = "tweetId")]
    pub tweet_id: String,
}

/// Body of `POST /api/addComment`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub comment: String,
    pub tweet_id: String,
    pub username: String,
    pub profile_img: String,
}

/// The viewer identity returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub image: Option<String>,
}
