// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the `delayed` workspace.
//!
//! This crate is for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `CallRecorder<T>`
//!
//! Records every firing of a wrapped callback so tests can assert on the
//! number and arguments of invocations:
//!
//! ```rust
//! use delayed_test_utils::CallRecorder;
//!
//! let recorder = CallRecorder::new();
//! let callback = recorder.callback();
//!
//! callback("a");
//! callback("b");
//! assert_eq!(recorder.calls(), vec!["a", "b"]);
//! ```
//!
//! ## Paused-clock helpers
//!
//! Firings run on spawned tasks, so after `tokio::time::advance` a test must
//! yield before the thunk is observable. [`settle`] and [`advance_and_settle`]
//! handle that.

pub mod helpers;
pub mod recorder;

pub use helpers::{advance_and_settle, assert_no_calls, settle};
pub use recorder::CallRecorder;
