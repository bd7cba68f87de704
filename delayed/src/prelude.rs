// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! ```ignore
//! use delayed::prelude::*;
//!
//! let wrapper = callback.debounced(Duration::from_millis(100));
//! let handle = wrapper.call(arg);
//! ```

pub use crate::debounce::{DebounceExt, Debounced};
pub use crate::defer::DEFER_DELAY;
pub use crate::delayed::{Delayed, DelayedExt};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::defer::defer;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::delay::delay;

pub use delayed_core::TimerHandle;
