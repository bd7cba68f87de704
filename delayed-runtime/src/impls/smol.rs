// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Smol runtime implementation of the [`Timer`](crate::timer::Timer) trait,
//! built on the `async-io` timer.

#[cfg(feature = "runtime-smol")]
use crate::timer::Timer;

#[cfg(feature = "runtime-smol")]
use async_io::Timer as AsyncIoTimer;

#[cfg(feature = "runtime-smol")]
use core::future::Future;

#[cfg(feature = "runtime-smol")]
use core::pin::Pin;

#[cfg(feature = "runtime-smol")]
use core::task::{Context, Poll};

#[cfg(feature = "runtime-smol")]
use core::time::Duration;

#[cfg(feature = "runtime-smol")]
#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

/// Wrapper for the async-io timer discarding its `Instant` output
#[cfg(feature = "runtime-smol")]
pub struct SmolSleep {
    timer: AsyncIoTimer,
}

#[cfg(feature = "runtime-smol")]
impl SmolSleep {
    fn new(duration: Duration) -> Self {
        Self {
            timer: AsyncIoTimer::after(duration),
        }
    }
}

#[cfg(feature = "runtime-smol")]
impl Future for SmolSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

#[cfg(feature = "runtime-smol")]
impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep::new(duration)
    }
}
