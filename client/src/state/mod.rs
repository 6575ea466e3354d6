//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `feed`, `thread`, `toast`) so
//! individual components can depend on small focused models. These are plain
//! data types; components wrap them in `RwSignal`s.

pub mod feed;
pub mod session;
pub mod thread;
pub mod toast;
