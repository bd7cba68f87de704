// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timing-control function wrappers built on a cancellable single-shot timer.
//!
//! # Overview
//!
//! - **[`delay`] / [`defer`]** - schedule one invocation after a duration
//!   (or after the near-zero [`DEFER_DELAY`])
//! - **[`DelayedExt`]** - `.delayed(duration)` / `.deferred()` reusable
//!   wrappers; each call schedules a fresh independent invocation
//! - **[`DebounceExt`]** - `.debounced(duration)` (aliased
//!   `.cumulative_delayed(duration)`); a burst of calls collapses into one
//!   trailing invocation carrying the last call's argument
//!
//! Every operation returns a [`TimerHandle`] that cancels the corresponding
//! firing. Callbacks always run on a spawned task, never synchronously within
//! the call that scheduled them.
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - tokio timers and spawning
//! - `runtime-smol` - smol spawning with `async-io` timers
//!
//! # Example
//!
//! ```
//! use delayed::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let save = |content: &'static str| println!("saving {content}");
//! let debounced = save.debounced(Duration::from_millis(100));
//!
//! // Rapid edits collapse into a single save of the last state.
//! debounced.call("a");
//! debounced.call("ab");
//! let handle = debounced.call("abc");
//!
//! // The handle cancels the next firing externally if needed.
//! assert!(!handle.is_cancelled());
//! # tokio::time::sleep(Duration::from_millis(200)).await;
//! # }
//! ```

mod debounce;
mod defer;
mod delay;
mod delayed;

pub mod prelude;

pub use debounce::{DebounceExt, Debounced};
pub use defer::{defer_with_timer, DEFER_DELAY};
pub use delay::delay_with_timer;
pub use delayed::{Delayed, DelayedExt};

pub use delayed_core::{schedule, TimerHandle};
pub use delayed_runtime::timer::Timer;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use defer::defer;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use delay::delay;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use delayed_runtime::DefaultTimer;

#[cfg(feature = "runtime-tokio")]
pub use delayed_runtime::TokioTimer;

#[cfg(feature = "runtime-smol")]
pub use delayed_runtime::SmolTimer;
