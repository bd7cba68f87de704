// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellable handle to a single scheduled firing.

use core::sync::atomic::{AtomicBool, Ordering};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// Handle to one scheduled firing.
///
/// Clones refer to the same pending firing: cancelling any clone suppresses
/// the firing and wakes the task driving it. A firing never occurs after a
/// `cancel()` that completed before its timer expired.
///
/// # Example
///
/// ```
/// use delayed_core::TimerHandle;
///
/// let handle = TimerHandle::new();
/// assert!(!handle.is_cancelled());
///
/// handle.cancel();
/// assert!(handle.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct TimerHandle {
    state: Arc<HandleState>,
}

#[derive(Debug)]
struct HandleState {
    cancelled: AtomicBool,
    cancel_event: Event,
}

impl TimerHandle {
    /// Create a fresh, uncancelled handle.
    pub fn new() -> Self {
        Self {
            state: Arc::new(HandleState {
                cancelled: AtomicBool::new(false),
                cancel_event: Event::new(),
            }),
        }
    }

    /// Cancel the pending firing.
    ///
    /// Idempotent: only the first call flips the flag and notifies waiters.
    /// Cancelling a handle whose firing already ran has no effect.
    pub fn cancel(&self) {
        // AcqRel so the waiter woken below observes the flag as set
        if !self.state.cancelled.swap(true, Ordering::AcqRel) {
            crate::trace!("timer handle cancelled");
            self.state.cancel_event.notify(usize::MAX);
        }
    }

    /// Whether the firing has been cancelled (non-blocking).
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::Acquire)
    }

    /// Wait until the handle is cancelled.
    ///
    /// Resolves immediately if the handle is already cancelled. The flag is
    /// re-checked after each listener registration, so a `cancel()` racing
    /// the registration is never missed.
    pub async fn cancelled(&self) {
        while !self.is_cancelled() {
            let listener = self.listen();
            if self.is_cancelled() {
                return;
            }
            listener.await;
        }
    }

    /// Register a listener on the cancellation event.
    pub(crate) fn listen(&self) -> EventListener {
        self.state.cancel_event.listen()
    }
}

impl Default for TimerHandle {
    fn default() -> Self {
        Self::new()
    }
}
