// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::time::Duration;
use std::fmt::Debug;

pub trait Timer: Clone + Default + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send + 'static;

    /// Creates a future that sleeps for the specified duration.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;
}
