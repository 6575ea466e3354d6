//! Per-post comment thread state owned by one display unit.
//!
//! DESIGN
//! ======
//! The comment list, the input buffer and the form visibility flag belong to
//! a single `TweetCard` and never cross units. Every fetch replaces the list
//! wholesale; nothing is merged incrementally.

#[cfg(test)]
#[path = "thread_test.rs"]
mod thread_test;

use crate::net::types::{Comment, CommentBody, DEFAULT_PROFILE_IMG, SessionUser, UNKNOWN_USERNAME};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThreadState {
    pub comments: Vec<Comment>,
    pub input: String,
    pub form_visible: bool,
    /// A submission is on the wire; further posts are refused until it lands.
    pub in_flight: bool,
}

impl ThreadState {
    /// Replace the held comments with a freshly fetched list.
    pub fn replace_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Flip the comment form. Only an authenticated viewer can open it.
    pub fn toggle_form(&mut self, authenticated: bool) {
        if authenticated {
            self.form_visible = !self.form_visible;
        }
    }

    /// Hide the form once the viewer is no longer signed in.
    pub fn close_form_for(&mut self, authenticated: bool) {
        if !authenticated {
            self.form_visible = false;
        }
    }

    /// The form renders only for a signed-in viewer who opened it.
    pub fn form_shown(&self, authenticated: bool) -> bool {
        authenticated && self.form_visible
    }

    /// Submit is disabled when the input buffer is the empty string or a
    /// previous submission has not resolved yet.
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !self.in_flight
    }

    /// Build the submission payload for `tweet_id`.
    ///
    /// Missing session values fall back to [`UNKNOWN_USERNAME`] and
    /// [`DEFAULT_PROFILE_IMG`]. Returns `None` when there is nothing to submit.
    pub fn submission(&self, tweet_id: &str, viewer: Option<&SessionUser>) -> Option<CommentBody> {
        if !self.can_submit() {
            return None;
        }
        Some(CommentBody {
            comment: self.input.clone(),
            tweet_id: tweet_id.to_owned(),
            username: viewer.map_or_else(|| UNKNOWN_USERNAME.to_owned(), |v| v.name.clone()),
            profile_img: viewer
                .and_then(|v| v.image.clone())
                .unwrap_or_else(|| DEFAULT_PROFILE_IMG.to_owned()),
        })
    }

    /// Record that `submission` was handed to the network.
    pub fn begin_submit(&mut self) {
        self.in_flight = true;
    }

    /// Re-enable the form after a rejected submission, keeping the input.
    pub fn submit_failed(&mut self) {
        self.in_flight = false;
    }

    /// Reset the form after the server accepted a comment.
    ///
    /// Runs before the follow-up refresh resolves.
    pub fn mark_submitted(&mut self) {
        self.input.clear();
        self.form_visible = false;
        self.in_flight = false;
    }
}
