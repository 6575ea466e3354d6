//! Transient notification stack.
//!
//! DESIGN
//! ======
//! A loading toast is created first and later resolved in place by id, so a
//! single notification walks through "Posting Comment" -> "Comment Posted!"
//! without flicker. Resolving an id that was already dismissed pushes a new
//! entry instead of dropping the message.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a loading toast and return its id.
    pub fn loading(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind: ToastKind::Loading, message: message.into() });
        id
    }

    pub fn succeed(&mut self, id: u64, message: impl Into<String>) {
        self.resolve(id, ToastKind::Success, message.into());
    }

    pub fn fail(&mut self, id: u64, message: impl Into<String>) {
        self.resolve(id, ToastKind::Error, message.into());
    }

    /// Ids of toasts that are no longer loading.
    pub fn resolved_ids(&self) -> Vec<u64> {
        self.items
            .iter()
            .filter(|t| t.kind != ToastKind::Loading)
            .map(|t| t.id)
            .collect()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    fn resolve(&mut self, id: u64, kind: ToastKind, message: String) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.kind = kind;
            toast.message = message;
        } else {
            self.items.push(Toast { id, kind, message });
        }
    }
}

/// Remembers which resolved toasts already have a dismiss timer, so each id
/// is scheduled once however often the stack changes.
#[derive(Clone, Debug, Default)]
pub struct DismissSchedule {
    scheduled: HashSet<u64>,
}

impl DismissSchedule {
    /// Return the ids in `resolved` that have no timer yet and mark them as
    /// scheduled. Ids no longer resolved are forgotten.
    pub fn claim(&mut self, resolved: &[u64]) -> Vec<u64> {
        self.scheduled.retain(|id| resolved.contains(id));
        resolved
            .iter()
            .copied()
            .filter(|id| self.scheduled.insert(*id))
            .collect()
    }
}
