// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The cumulative-delay ("debounce") wrapper.
//!
//! Each call to a [`Debounced`] wrapper restarts a pending single-shot timer,
//! cancelling any not-yet-fired prior timer, so the callback fires once after
//! the configured duration has elapsed without a new call.
//!
//! This implements **trailing debounce** semantics only:
//! - When a call arrives, cancel the pending firing and restart the timer
//! - If no new call arrives before the timer expires, the callback fires
//!   with the latest call's argument
//! - Earlier calls' arguments are discarded, not queued or merged
//!
//! There is no leading-edge mode.

use core::marker::PhantomData;
use core::time::Duration;
use delayed_core::{schedule, TimerHandle};
use delayed_runtime::timer::Timer;
use parking_lot::Mutex;
use std::sync::Arc;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use delayed_runtime::DefaultTimer;

/// Debounced wrapper around a callback.
///
/// Construct via [`DebounceExt::debounced`] (aliased as
/// [`DebounceExt::cumulative_delayed`]). At most one firing is pending per
/// wrapper at any moment; clones share the pending slot and therefore
/// debounce together.
pub struct Debounced<TM, F, A> {
    timer: TM,
    duration: Duration,
    callback: F,
    pending: Arc<Mutex<Option<TimerHandle>>>,
    _arg: PhantomData<fn(A)>,
}

impl<TM, F, A> Debounced<TM, F, A>
where
    TM: Timer,
    F: Fn(A) + Clone + Send + 'static,
    A: Send + 'static,
{
    /// Wrap `callback` with the given debounce `duration`.
    pub fn new(timer: TM, duration: Duration, callback: F) -> Self {
        Self {
            timer,
            duration,
            callback,
            pending: Arc::new(Mutex::new(None)),
            _arg: PhantomData,
        }
    }

    /// Restart the pending timer with this call's argument.
    ///
    /// Any outstanding firing from a previous call is cancelled before the
    /// new one is scheduled; the two steps happen under one lock acquisition,
    /// so concurrent callers can never leave two firings outstanding. The
    /// callback runs on a spawned task after `duration` of quiet, with the
    /// argument of the last call only.
    ///
    /// The returned [`TimerHandle`] allows external cancellation of the next
    /// firing at any time before it fires.
    pub fn call(&self, arg: A) -> TimerHandle {
        let callback = self.callback.clone();
        let thunk = move || callback(arg);

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            // Supersede: the previous thunk must never run
            previous.cancel();
        }
        let handle = schedule(self.timer.sleep_future(self.duration), thunk);
        *pending = Some(handle.clone());
        handle
    }

    /// Cancel the pending firing, if any.
    ///
    /// Equivalent to cancelling the handle returned by the most recent
    /// [`call`](Debounced::call).
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().take() {
            pending.cancel();
        }
    }

    /// The quiet period required before the callback fires.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<TM, F, A> Clone for Debounced<TM, F, A>
where
    TM: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            timer: self.timer.clone(),
            duration: self.duration,
            callback: self.callback.clone(),
            pending: Arc::clone(&self.pending),
            _arg: PhantomData,
        }
    }
}

/// Extension trait turning a callback into a debounced wrapper.
///
/// Implemented for every `Fn(A) + Clone + Send + 'static`.
pub trait DebounceExt<A>: Fn(A) + Clone + Send + Sized + 'static
where
    A: Send + 'static,
{
    /// Wrap this callback so a burst of calls collapses into one trailing
    /// invocation carrying the last call's argument.
    ///
    /// # Example
    ///
    /// ```
    /// use delayed::prelude::*;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main(flavor = "current_thread", start_paused = true)]
    /// # async fn main() {
    /// let search = |query: &'static str| println!("searching {query}");
    /// let debounced = search.debounced(Duration::from_millis(100));
    ///
    /// debounced.call("a");
    /// debounced.call("ab"); // cancels the pending "a"
    /// debounced.call("abc"); // cancels the pending "ab"
    ///
    /// // Only "abc" fires, 100ms after the last call.
    /// # tokio::time::sleep(Duration::from_millis(200)).await;
    /// # }
    /// ```
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn debounced(self, duration: Duration) -> Debounced<DefaultTimer, Self, A> {
        self.debounced_with_timer(DefaultTimer::default(), duration)
    }

    /// Same as [`debounced`](DebounceExt::debounced) with an explicit
    /// [`Timer`].
    fn debounced_with_timer<TM>(self, timer: TM, duration: Duration) -> Debounced<TM, Self, A>
    where
        TM: Timer,
    {
        Debounced::new(timer, duration, self)
    }

    /// Alias for [`debounced`](DebounceExt::debounced), matching the
    /// cumulative-delay name of the operation.
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn cumulative_delayed(self, duration: Duration) -> Debounced<DefaultTimer, Self, A> {
        self.debounced(duration)
    }

    /// Alias for [`debounced_with_timer`](DebounceExt::debounced_with_timer).
    fn cumulative_delayed_with_timer<TM>(
        self,
        timer: TM,
        duration: Duration,
    ) -> Debounced<TM, Self, A>
    where
        TM: Timer,
    {
        self.debounced_with_timer(timer, duration)
    }
}

impl<F, A> DebounceExt<A> for F
where
    F: Fn(A) + Clone + Send + 'static,
    A: Send + 'static,
{
}
