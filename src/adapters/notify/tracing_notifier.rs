//! Notifier that writes notifications to the tracing log.

use crate::ports::{Notification, NotificationLevel, Notifier};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => {
                tracing::warn!(target: "notification", "{}", notification.message)
            }
            level => {
                tracing::info!(target: "notification", %level, "{}", notification.message)
            }
        }
    }
}
