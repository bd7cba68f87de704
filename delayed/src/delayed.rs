// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reusable non-debounced wrappers: `delayed` and `deferred`.
//!
//! A [`Delayed`] wrapper schedules a fresh, independent invocation on every
//! call, forwarding that call's own argument. Calls never interfere with each
//! other - contrast with [`Debounced`](crate::Debounced), which collapses a
//! burst of calls into one trailing invocation.

use crate::defer::DEFER_DELAY;
use core::marker::PhantomData;
use core::time::Duration;
use delayed_core::{schedule, TimerHandle};
use delayed_runtime::timer::Timer;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
use delayed_runtime::DefaultTimer;

/// Reusable wrapper scheduling one independent delayed invocation per call.
///
/// Construct via [`DelayedExt::delayed`] or [`DelayedExt::deferred`]. The
/// wrapped callback's invocation context and fixed leading arguments are its
/// closure captures; the per-call argument `A` is forwarded by
/// [`Delayed::call`] (use a tuple for several values, `()` for none).
pub struct Delayed<TM, F, A> {
    timer: TM,
    duration: Duration,
    callback: F,
    _arg: PhantomData<fn(A)>,
}

impl<TM, F, A> Delayed<TM, F, A>
where
    TM: Timer,
    F: Fn(A) + Clone + Send + 'static,
    A: Send + 'static,
{
    /// Wrap `callback` so that each call schedules a firing after `duration`.
    pub fn new(timer: TM, duration: Duration, callback: F) -> Self {
        Self {
            timer,
            duration,
            callback,
            _arg: PhantomData,
        }
    }

    /// Schedule a fresh invocation of the callback with `arg` after the
    /// configured duration.
    ///
    /// Every call schedules independently; earlier pending invocations are
    /// left untouched. The returned [`TimerHandle`] cancels this call's
    /// invocation only.
    pub fn call(&self, arg: A) -> TimerHandle {
        let callback = self.callback.clone();
        schedule(self.timer.sleep_future(self.duration), move || {
            callback(arg)
        })
    }

    /// The delay applied to each call.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<TM, F, A> Clone for Delayed<TM, F, A>
where
    TM: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            timer: self.timer.clone(),
            duration: self.duration,
            callback: self.callback.clone(),
            _arg: PhantomData,
        }
    }
}

/// Extension trait turning a callback into a reusable delayed wrapper.
///
/// Implemented for every `Fn(A) + Clone + Send + 'static`.
pub trait DelayedExt<A>: Fn(A) + Clone + Send + Sized + 'static
where
    A: Send + 'static,
{
    /// Wrap this callback so each call schedules an independent invocation
    /// after `duration`.
    ///
    /// # Example
    ///
    /// ```
    /// use delayed::prelude::*;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main(flavor = "current_thread", start_paused = true)]
    /// # async fn main() {
    /// let log = |line: &'static str| println!("{line}");
    /// let wrapper = log.delayed(Duration::from_millis(100));
    ///
    /// // Two calls in quick succession produce two invocations, each
    /// // preserving its own argument.
    /// wrapper.call("first");
    /// wrapper.call("second");
    /// # tokio::time::sleep(Duration::from_millis(200)).await;
    /// # }
    /// ```
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn delayed(self, duration: Duration) -> Delayed<DefaultTimer, Self, A> {
        self.delayed_with_timer(DefaultTimer::default(), duration)
    }

    /// Same as [`delayed`](DelayedExt::delayed) with an explicit [`Timer`].
    fn delayed_with_timer<TM>(self, timer: TM, duration: Duration) -> Delayed<TM, Self, A>
    where
        TM: Timer,
    {
        Delayed::new(timer, duration, self)
    }

    /// Wrap this callback so each call schedules an independent invocation
    /// after [`DEFER_DELAY`].
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    fn deferred(self) -> Delayed<DefaultTimer, Self, A> {
        self.delayed(DEFER_DELAY)
    }

    /// Same as [`deferred`](DelayedExt::deferred) with an explicit [`Timer`].
    fn deferred_with_timer<TM>(self, timer: TM) -> Delayed<TM, Self, A>
    where
        TM: Timer,
    {
        self.delayed_with_timer(timer, DEFER_DELAY)
    }
}

impl<F, A> DelayedExt<A> for F
where
    F: Fn(A) + Clone + Send + 'static,
    A: Send + 'static,
{
}
