//! Toast slice: at most one pending banner message.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastState {
    message: Option<String>,
}

impl ToastState {
    /// Replace the pending message, or acknowledge it with `None`.
    ///
    /// Setting the value already held is not a change.
    pub fn set_message(&mut self, message: Option<String>) -> bool {
        if self.message == message {
            return false;
        }
        self.message = message;
        true
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut toast = ToastState::default();
        assert!(toast.set_message(Some("Added to cart".to_string())));
        assert_eq!(toast.message(), Some("Added to cart"));
        assert!(toast.set_message(None));
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn test_repeat_is_not_a_change() {
        let mut toast = ToastState::default();
        assert!(toast.set_message(Some("a".to_string())));
        assert!(!toast.set_message(Some("a".to_string())));
        assert!(!ToastState::default().set_message(None));
    }

    #[test]
    fn test_new_message_overwrites() {
        let mut toast = ToastState::default();
        toast.set_message(Some("first".to_string()));
        assert!(toast.set_message(Some("second".to_string())));
        assert_eq!(toast.message(), Some("second"));
    }
}
