//! Cancellable delayed invocation for keystroke-driven search.
//!
//! At most one invocation is pending per [`Debouncer`]; scheduling a new one
//! cancels the previous one before its delay elapses.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Quiet period after the last keystroke before a search runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// What a raw keystroke should trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Blank input: list history right away, never search.
    ShowHistory,
    /// Search for the trimmed query once input goes quiet.
    Search(String),
}

/// Classify the current contents of the search box.
pub fn classify_input(raw: &str) -> InputAction {
    let query = raw.trim();
    if query.is_empty() {
        InputAction::ShowHistory
    } else {
        InputAction::Search(query.to_string())
    }
}

/// Runs the most recently scheduled future once `delay` passes without a
/// newer one being scheduled.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending invocation with `task`, run after the delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Cancel the pending invocation. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Whether an invocation is scheduled and has not completed.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
