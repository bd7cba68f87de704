// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Records every firing of a wrapped callback for later assertions.
///
/// Clones share the underlying call log.
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallRecorder<T>
where
    T: Send + 'static,
{
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A cloneable callback that appends its argument to the call log.
    pub fn callback(&self) -> impl Fn(T) + Clone + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |arg| calls.lock().push(arg)
    }

    /// Number of firings recorded so far.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Snapshot of the recorded arguments, in firing order.
    pub fn calls(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.calls.lock().clone()
    }
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallRecorder<T>
where
    T: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
