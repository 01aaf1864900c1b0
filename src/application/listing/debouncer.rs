//! SearchDebouncer - trailing-edge debounce for search-as-you-type.
//!
//! Each keystroke cancels the pending timer and schedules a new one, so only
//! the last value typed within the window reaches the target. A blank value
//! skips the timer and clears the results at once.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Default quiet period before a search is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Receiver of debounced search input.
///
/// Both calls must return without waiting on I/O. A target applies the new
/// filter before returning and runs any fetch in the background, so input
/// arriving right after a call always sees the filter it set.
pub trait SearchTarget: Send + Sync + 'static {
    /// Called when the input becomes blank.
    fn clear_results(&self);

    /// Called once the input has been stable for the debounce window.
    fn start_search(&self, query: String);
}

pub struct SearchDebouncer {
    target: Arc<dyn SearchTarget>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchDebouncer {
    pub fn new(target: Arc<dyn SearchTarget>) -> Self {
        Self::with_delay(target, DEFAULT_DEBOUNCE)
    }

    pub fn with_delay(target: Arc<dyn SearchTarget>, delay: Duration) -> Self {
        Self {
            target,
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Feeds the current contents of the search box.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn on_input_change(&self, value: impl Into<String>) {
        let value = value.into();
        self.cancel();

        if value.trim().is_empty() {
            self.target.clear_results();
            return;
        }

        let target = Arc::clone(&self.target);
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            sleep(delay).await;
            target.start_search(value);
        });

        *self.pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(timer);
    }

    /// Cancels a timer that has not fired yet. Returns true if one was pending.
    pub fn cancel(&self) -> bool {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        match pending {
            Some(timer) if !timer.is_finished() => {
                timer.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|timer| !timer.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
