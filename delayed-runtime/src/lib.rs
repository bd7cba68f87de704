// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic timer abstraction.
//!
//! The [`timer::Timer`] trait decouples the `delayed` wrappers from any
//! specific async runtime. Implementations are selected via feature flags:
//!
//! - `runtime-tokio` (default) - [`TokioTimer`]
//! - `runtime-smol` - [`SmolTimer`]
//!
//! [`DefaultTimer`] aliases the implementation picked by the enabled
//! features.

pub mod impls;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;

#[cfg(feature = "runtime-smol")]
pub use impls::smol::SmolTimer;

#[cfg(feature = "runtime-tokio")]
pub type DefaultTimer = TokioTimer;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultTimer = SmolTimer;
