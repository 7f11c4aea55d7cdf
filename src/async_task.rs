//! Background execution for the one network call in the system.
//!
//! The relay POST runs on a spawned thread so the terminal event loop
//! never blocks on the network. A channel-based approach is used rather
//! than full async/await because:
//! 1. **ratatui compatibility**: the event loop is synchronous
//! 2. **Simplicity**: one request at a time needs no executor
//!
//! At most one submission may be outstanding; the single `in_flight`
//! boolean is the source of truth for that, so overlapping requests
//! cannot be queued.
//!
//! # Usage
//!
//! ```no_run
//! use postbox::async_task::TaskManager;
//!
//! let mut tm = TaskManager::new();
//! tm.spawn_submission(|| Ok(()));
//!
//! // Poll for completion in the event loop
//! if let Some(result) = tm.try_recv() {
//!     match result {
//!         Ok(()) => println!("sent"),
//!         Err(e) => println!("failed: {e}"),
//!     }
//! }
//! ```

use crossbeam::channel::{unbounded, Receiver, Sender};
use std::thread;

use crate::relay::RelayError;

/// Outcome of a relay submission.
pub type SubmitResult = Result<(), RelayError>;

/// Runs submissions on worker threads and reports results back to the
/// event loop over a channel.
pub struct TaskManager {
    sender: Sender<SubmitResult>,
    receiver: Receiver<SubmitResult>,
    in_flight: bool,
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            in_flight: false,
        }
    }

    /// Spawn a submission job on a worker thread.
    ///
    /// Returns `false` without spawning if a submission is already
    /// outstanding; the result of an accepted job can be polled with
    /// `try_recv()`.
    pub fn spawn_submission<F>(&mut self, job: F) -> bool
    where
        F: FnOnce() -> SubmitResult + Send + 'static,
    {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        let sender = self.sender.clone();

        thread::spawn(move || {
            // Send result back to main thread
            let _ = sender.send(job());
        });
        true
    }

    /// Check for a completed submission.
    ///
    /// Returns `Some(result)` once the outstanding job finished, `None`
    /// while it is still running or when nothing was spawned.
    pub fn try_recv(&mut self) -> Option<SubmitResult> {
        if !self.in_flight {
            return None;
        }

        match self.receiver.try_recv() {
            Ok(result) => {
                self.in_flight = false;
                Some(result)
            }
            Err(_) => None,
        }
    }

    /// Whether a submission is currently outstanding.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_manager_creation() {
        let tm = TaskManager::new();
        assert!(!tm.in_flight());
    }

    #[test]
    fn test_spawn_marks_in_flight() {
        let mut tm = TaskManager::new();
        assert!(tm.spawn_submission(|| Ok(())));
        assert!(tm.in_flight());
    }

    #[test]
    fn test_second_spawn_is_rejected() {
        let mut tm = TaskManager::new();
        assert!(tm.spawn_submission(|| {
            std::thread::sleep(std::time::Duration::from_millis(200));
            Ok(())
        }));
        assert!(!tm.spawn_submission(|| Ok(())));
    }

    #[test]
    fn test_try_recv_completes() {
        let mut tm = TaskManager::new();
        tm.spawn_submission(|| Ok(()));

        // Wait a bit for the thread to complete
        std::thread::sleep(std::time::Duration::from_millis(100));

        let result = tm.try_recv();
        assert!(matches!(result, Some(Ok(()))));
        assert!(!tm.in_flight());
    }

    #[test]
    fn test_try_recv_delivers_errors() {
        let mut tm = TaskManager::new();
        tm.spawn_submission(|| Err(RelayError::Status(500)));

        std::thread::sleep(std::time::Duration::from_millis(100));

        let result = tm.try_recv();
        assert!(matches!(result, Some(Err(RelayError::Status(500)))));
        assert!(!tm.in_flight());
    }

    #[test]
    fn test_try_recv_idle_returns_none() {
        let mut tm = TaskManager::new();
        assert!(tm.try_recv().is_none());
    }
}
