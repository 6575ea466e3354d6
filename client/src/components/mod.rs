//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page columns and the per-post display unit. Page
//! data and the viewer session flow in through props; only the toast stack
//! is read from context.

pub mod comment_form;
pub mod comment_list;
pub mod feed;
pub mod sidebar;
pub mod sidebar_row;
pub mod time_ago;
pub mod toaster;
pub mod tweet_card;
pub mod widgets;
