//! Toast notification stack.

use megashop_core::{Locale, ToastId, ToastSeverity};

use crate::i18n;

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    /// Unique within this stack, monotonically increasing.
    pub id: ToastId,
    /// Severity, used by the rendering layer for styling.
    pub severity: ToastSeverity,
    /// Message text, already localized.
    pub message: String,
}

/// The ordered toast stack.
///
/// Entries stay until dismissed; there is no automatic expiry. Session
/// transient: toasts are never persisted.
#[derive(Debug, Default)]
pub struct ToastStack {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The live entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    /// Whether no toasts are showing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Push a toast, returning its freshly allocated ID.
    pub fn push(&mut self, severity: ToastSeverity, message: impl Into<String>) -> ToastId {
        self.next_id += 1;
        let id = ToastId::new(self.next_id);
        let message = message.into();
        tracing::debug!(%id, severity = severity.as_str(), %message, "toast pushed");
        self.entries.push(ToastEntry {
            id,
            severity,
            message,
        });
        id
    }

    /// Push an error toast with a localized message for `key`.
    pub fn push_error(&mut self, locale: Locale, key: &str) -> ToastId {
        self.push(ToastSeverity::Error, i18n::translate(locale, key))
    }

    /// Dismiss a toast by ID. Unknown IDs are a no-op.
    pub fn dismiss(&mut self, id: ToastId) {
        self.entries.retain(|entry| entry.id != id);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_push_allocates_monotonic_ids() {
        let mut stack = ToastStack::new();
        let first = stack.push(ToastSeverity::Info, "one");
        let second = stack.push(ToastSeverity::Info, "two");
        assert!(first < second);
        assert_eq!(stack.entries().len(), 2);
    }

    #[test]
    fn test_entries_keep_push_order() {
        let mut stack = ToastStack::new();
        stack.push(ToastSeverity::Success, "one");
        stack.push(ToastSeverity::Error, "two");
        let messages: Vec<&str> = stack.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[test]
    fn test_dismiss_removes_by_id() {
        let mut stack = ToastStack::new();
        let first = stack.push(ToastSeverity::Info, "one");
        stack.push(ToastSeverity::Info, "two");

        stack.dismiss(first);
        assert_eq!(stack.entries().len(), 1);
        assert_eq!(stack.entries()[0].message, "two");
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut stack = ToastStack::new();
        stack.push(ToastSeverity::Info, "one");
        stack.dismiss(ToastId::new(99));
        assert_eq!(stack.entries().len(), 1);
    }

    #[test]
    fn test_ids_stay_unique_after_dismiss() {
        let mut stack = ToastStack::new();
        let first = stack.push(ToastSeverity::Info, "one");
        stack.dismiss(first);
        let second = stack.push(ToastSeverity::Info, "two");
        assert_ne!(first, second);
    }

    #[test]
    fn test_push_error_localizes() {
        let mut stack = ToastStack::new();
        stack.push_error(Locale::En, "fill_all_fields");
        assert_eq!(stack.entries()[0].message, "Fill in all fields");
        assert_eq!(stack.entries()[0].severity, ToastSeverity::Error);
    }
}
