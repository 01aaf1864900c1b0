//! Notifier that keeps every notification for later inspection.

use std::sync::{Arc, Mutex};

use crate::ports::{Notification, NotificationLevel, Notifier};

/// Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    history: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn count_of(&self, level: NotificationLevel) -> usize {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|n| n.level == level)
            .count()
    }

    pub fn clear(&self) {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_history() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();
        handle.notify(Notification::error("boom"));
        handle.notify(Notification::success("ok"));

        assert_eq!(notifier.count_of(NotificationLevel::Error), 1);
        assert_eq!(notifier.notifications().len(), 2);
        notifier.clear();
        assert!(handle.notifications().is_empty());
    }
}
