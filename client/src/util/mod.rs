//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and task-lifetime concerns from page
//! and component logic to improve reuse and testability.

pub mod handle;
pub mod lifetime;
pub mod time_ago;
