// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Invocation scheduled for "as soon as possible".

use crate::delay::delay_with_timer;
use core::time::Duration;
use delayed_core::TimerHandle;
use delayed_runtime::timer::Timer;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use crate::delay::delay;

/// Delay applied by [`defer`] and `deferred` wrappers.
///
/// An implementation-chosen near-zero value; the callback still runs at a
/// later turn of the scheduler, never synchronously.
pub const DEFER_DELAY: Duration = Duration::from_millis(1);

/// Schedule one invocation of `callback` after [`DEFER_DELAY`].
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn defer<F>(callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    delay(DEFER_DELAY, callback)
}

/// Schedule one invocation of `callback` after [`DEFER_DELAY`] using an
/// explicit [`Timer`].
pub fn defer_with_timer<TM, F>(timer: &TM, callback: F) -> TimerHandle
where
    TM: Timer,
    F: FnOnce() + Send + 'static,
{
    delay_with_timer(timer, DEFER_DELAY, callback)
}
