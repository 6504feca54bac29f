//! User Notifications
//!
//! Failures surface to the operator as transient notifications. The
//! sink is injected wherever a client is constructed, so callers can
//! route messages to a UI toast, a terminal, or a test double.

use tracing::warn;

#[cfg(test)]
use mockall::automock;

/// Sink for user-facing notification messages
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    /// Raise a transient notification
    fn notify(&self, message: &str);
}

/// Default sink that logs notifications at warn level
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(message, "Notification");
    }
}

/// Sink that discards all notifications
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}
