// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellable single-shot scheduling primitives.
//!
//! This crate provides the building blocks the `delayed` wrappers are made of:
//!
//! - **[`TimerHandle`]** - cloneable handle to one scheduled firing, with
//!   idempotent cancellation and an awaitable [`TimerHandle::cancelled`]
//!   future
//! - **[`Fire`]** - a future that races a sleep against cancellation and runs
//!   a thunk exactly once if the sleep wins
//! - **[`schedule`]** - spawns a [`Fire`] on the configured runtime and
//!   returns its [`TimerHandle`]
//!
//! # Runtime Support
//!
//! Select the spawning runtime via feature flags:
//! - `runtime-tokio` (default) - spawn on `tokio`
//! - `runtime-smol` - spawn on `smol`

mod fire;
mod logging;
mod timer_handle;

pub use fire::{schedule, Fire};
pub use timer_handle::TimerHandle;
