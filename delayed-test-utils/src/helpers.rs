// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recorder::CallRecorder;
use std::time::Duration;
use tokio::time::advance;

/// Panics if the recorder has observed any firing.
pub fn assert_no_calls<T>(recorder: &CallRecorder<T>)
where
    T: Send + 'static,
{
    assert_eq!(
        recorder.count(),
        0,
        "unexpected firing recorded, expected no calls"
    );
}

/// Let spawned firing tasks run to completion on the current-thread
/// scheduler.
///
/// Firings execute on spawned tasks; after advancing the paused clock the
/// test task must yield before those tasks are observable.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Advance the paused tokio clock by `duration`, then [`settle`].
pub async fn advance_and_settle(duration: Duration) {
    advance(duration).await;
    settle().await;
}
