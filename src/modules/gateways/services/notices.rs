use std::sync::{Arc, Mutex, MutexGuard};

/// Shared admin error channel.
///
/// Validation failures are reported here instead of being raised; the host
/// surfaces the messages on the next settings-page render and blocks the
/// save. Cloning shares the underlying list. Pushing never fails.
#[derive(Debug, Clone, Default)]
pub struct AdminNotices {
    messages: Arc<Mutex<Vec<String>>>,
}

impl AdminNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: impl Into<String>) {
        self.lock().push(message.into());
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Drains the channel, as the host does after rendering notices.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
