//! Cancellable scheduled tasks
//!
//! Timer-driven side effects (progress polling, search debounce, end-of-media
//! timers) each live in a single slot. Scheduling into an occupied slot aborts
//! the previous task first, so re-triggering never stacks timers.

use std::future::Future;
use tokio::task::JoinHandle;

/// Holds at most one running task
#[derive(Debug, Default)]
pub struct TaskSlot {
    handle: Option<JoinHandle<()>>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the current task (if any) and spawn `future` in its place
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.replace(tokio::spawn(future));
    }

    /// Abort the current task (if any) and hold `handle` instead
    pub fn replace(&mut self, handle: JoinHandle<()>) {
        self.cancel();
        self.handle = Some(handle);
    }

    /// Abort the current task, leaving the slot empty
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a task is held and has not finished
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
