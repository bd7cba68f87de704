// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The single-shot scheduled-callback primitive.
//!
//! [`Fire`] races a sleep future against a [`TimerHandle`]'s cancellation
//! event. If the sleep completes while the handle is still uncancelled, the
//! thunk runs exactly once; otherwise the thunk is dropped without running.
//! [`schedule`] spawns a [`Fire`] on the configured runtime.

use crate::TimerHandle;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use event_listener::EventListener;
use pin_project::pin_project;

/// Future driving one scheduled firing.
///
/// Resolves when either the sleep completes (running the thunk) or the
/// handle is cancelled (discarding the thunk). The cancelled flag is
/// re-checked after the sleep resolves, so a cancellation observed before
/// the firing always wins.
#[pin_project]
pub struct Fire<S, F> {
    #[pin]
    sleep: S,
    handle: TimerHandle,
    listener: Option<EventListener>,
    thunk: Option<F>,
}

impl<S, F> Fire<S, F>
where
    S: Future<Output = ()>,
    F: FnOnce(),
{
    /// Wrap `sleep` and `thunk` into a firing governed by `handle`.
    pub fn new(sleep: S, handle: TimerHandle, thunk: F) -> Self {
        Self {
            sleep,
            handle,
            listener: None,
            thunk: Some(thunk),
        }
    }
}

impl<S, F> Future for Fire<S, F>
where
    S: Future<Output = ()>,
    F: FnOnce(),
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.project();

        // Fast path: cancelled before this poll
        if this.handle.is_cancelled() {
            return Poll::Ready(());
        }

        // Arm the cancellation listener on first poll
        if this.listener.is_none() {
            *this.listener = Some(this.handle.listen());

            // Check again after registering: cancel() may have slipped in
            // between the check above and listen()
            if this.handle.is_cancelled() {
                return Poll::Ready(());
            }
        }

        if let Poll::Ready(()) = Pin::new(this.listener.as_mut().unwrap()).poll(cx) {
            return Poll::Ready(());
        }

        match this.sleep.poll(cx) {
            Poll::Ready(()) => {
                // The cancelled flag is set synchronously by cancel(), so a
                // cancellation that completed before the timer expired is
                // always observed here
                if this.handle.is_cancelled() {
                    return Poll::Ready(());
                }
                if let Some(thunk) = this.thunk.take() {
                    thunk();
                }
                Poll::Ready(())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Schedule `thunk` to run when `sleep` completes, unless the returned
/// handle is cancelled first.
///
/// The thunk always runs on a spawned task, never synchronously within the
/// call that scheduled it.
///
/// # Example
///
/// ```
/// use delayed_core::schedule;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let handle = schedule(tokio::time::sleep(Duration::from_millis(50)), || {
///     println!("fired");
/// });
///
/// // Cancelling before the sleep completes suppresses the firing.
/// handle.cancel();
/// # }
/// ```
pub fn schedule<S, F>(sleep: S, thunk: F) -> TimerHandle
where
    S: Future<Output = ()> + Send + 'static,
    F: FnOnce() + Send + 'static,
{
    let handle = TimerHandle::new();
    let _fire = Fire::new(sleep, handle.clone(), thunk);

    crate::trace!("scheduled single-shot firing");

    #[cfg(feature = "runtime-tokio")]
    tokio::spawn(_fire);

    #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
    smol::spawn(_fire).detach();

    handle
}
