//! Transient notifications ("toasts").
//!
//! The stack is capped; pushing past the cap evicts the oldest toast.
//! Dismissal timers live in the component, this state only tracks ids.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Default,
    Destructive,
}

/// A toast before it has been assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
    pub kind: ToastKind,
}

impl Notice {
    #[must_use]
    pub fn info(title: &'static str, description: &str) -> Self {
        Self { title, description: description.to_owned(), kind: ToastKind::Default }
    }

    #[must_use]
    pub fn error(title: &'static str, description: &str) -> Self {
        Self { title, description: description.to_owned(), kind: ToastKind::Destructive }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a notice; returns its id for later dismissal.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notice });
        if self.toasts.len() > TOAST_LIMIT {
            let overflow = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
