//! Feed list state seeded from the page's initial post list.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::Tweet;

#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub tweets: Vec<Tweet>,
    pub refreshing: bool,
}

impl FeedState {
    pub fn new(tweets: Vec<Tweet>) -> Self {
        Self { tweets, refreshing: false }
    }

    /// Replace the whole list with a freshly fetched one.
    pub fn replace(&mut self, tweets: Vec<Tweet>) {
        self.tweets = tweets;
        self.refreshing = false;
    }

    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }
}
