//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and persistence so route handlers can stay
//! focused on protocol translation and cookie plumbing.

pub mod feed;
pub mod session;
