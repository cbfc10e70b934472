//! Toast overlay view-model.

use megashop_core::ToastId;

use crate::session::ToastStack;

/// One toast, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    /// The toast's ID, for dismiss dispatch.
    pub id: ToastId,
    /// Severity string ("success" / "error" / "info"), for styling.
    pub severity: &'static str,
    /// Message text.
    pub message: String,
}

/// The toast overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastsView {
    /// Live toasts, oldest first.
    pub toasts: Vec<ToastView>,
}

impl ToastsView {
    /// Build the overlay from the toast stack.
    #[must_use]
    pub fn build(stack: &ToastStack) -> Self {
        Self {
            toasts: stack
                .entries()
                .iter()
                .map(|entry| ToastView {
                    id: entry.id,
                    severity: entry.severity.as_str(),
                    message: entry.message.clone(),
                })
                .collect(),
        }
    }
}
