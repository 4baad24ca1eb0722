//! User-facing notifications for cart activity.
//!
//! Every mutating cart operation emits a short message the UI layer can
//! surface as a toast. The sink carries no data contract beyond "an
//! event occurred".

use std::sync::Mutex;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Positive confirmation (item added).
    Success,
    /// Informational (item removed, cart cleared).
    Info,
}

/// A short user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Display text.
    pub message: String,
}

impl Notification {
    /// A success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// An informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// Receiver for cart notifications.
pub trait NotificationSink: Send + Sync {
    /// Deliver a notification.
    fn notify(&self, notification: Notification);
}

/// Sink that forwards notifications to the log stream.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => {
                tracing::info!(kind = "success", "{}", notification.message);
            }
            NotificationLevel::Info => {
                tracing::info!(kind = "info", "{}", notification.message);
            }
        }
    }
}

/// Sink that collects notifications in memory, for tests and demos.
#[derive(Debug, Default)]
pub struct MemorySink {
    received: Mutex<Vec<Notification>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all notifications received so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.received.lock().map(|mut v| std::mem::take(&mut *v)).unwrap_or_default()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut received) = self.received.lock() {
            received.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemorySink::new();
        sink.notify(Notification::success("Added Bananas to cart!"));
        sink.notify(Notification::info("Item removed from cart"));

        let received = sink.drain();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].level, NotificationLevel::Success);
        assert_eq!(received[1].level, NotificationLevel::Info);
        assert!(sink.drain().is_empty());
    }
}
