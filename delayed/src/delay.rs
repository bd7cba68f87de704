// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot delayed invocation.

use core::time::Duration;
use delayed_core::{schedule, TimerHandle};
use delayed_runtime::timer::Timer;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use delayed_runtime::DefaultTimer;

/// Schedule one invocation of `callback` after `duration`.
///
/// The callback always runs on a spawned task, never synchronously. The
/// invocation context and any leading arguments are closure captures of
/// `callback`.
///
/// The returned [`TimerHandle`] cancels the invocation if `cancel()` is
/// called before the duration elapses.
///
/// # Example
///
/// ```
/// use delayed::delay;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let name = "world";
/// delay(Duration::from_millis(100), move || {
///     println!("hello, {name}");
/// });
/// # tokio::time::sleep(Duration::from_millis(200)).await;
/// # }
/// ```
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn delay<F>(duration: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    delay_with_timer(&DefaultTimer::default(), duration, callback)
}

/// Schedule one invocation of `callback` after `duration` using an explicit
/// [`Timer`].
pub fn delay_with_timer<TM, F>(timer: &TM, duration: Duration, callback: F) -> TimerHandle
where
    TM: Timer,
    F: FnOnce() + Send + 'static,
{
    schedule(timer.sleep_future(duration), callback)
}
