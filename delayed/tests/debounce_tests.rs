// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use delayed::prelude::*;
use delayed::TokioTimer;
use delayed_test_utils::{advance_and_settle, assert_no_calls, settle, CallRecorder};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_burst_collapses_to_last_argument() {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounced(Duration::from_millis(100));

    // Act: "a" at t=0, "b" at t=30, "c" at t=60
    debounced.call("a");
    advance_and_settle(Duration::from_millis(30)).await;
    debounced.call("b");
    advance_and_settle(Duration::from_millis(30)).await;
    debounced.call("c");

    // Assert: nothing by t=159, exactly one firing with "c" at t=160
    advance_and_settle(Duration::from_millis(99)).await;
    assert_no_calls(&recorder);

    advance_and_settle(Duration::from_millis(1)).await;
    assert_eq!(recorder.calls(), vec!["c"]);
}

#[tokio::test(start_paused = true)]
async fn test_single_call_fires_after_one_duration() {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounced(Duration::from_millis(50));

    // Act
    debounced.call("x");

    // Assert: nothing before t=50, one firing with "x" at t=50
    advance_and_settle(Duration::from_millis(49)).await;
    assert_no_calls(&recorder);

    advance_and_settle(Duration::from_millis(1)).await;
    assert_eq!(recorder.calls(), vec!["x"]);
}

#[tokio::test(start_paused = true)]
async fn test_call_never_fires_synchronously() {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounced(Duration::from_millis(10));

    // Act: yield without advancing the clock
    debounced.call("a");
    settle().await;

    // Assert
    assert_no_calls(&recorder);
}

#[tokio::test(start_paused = true)]
async fn test_call_after_quiet_period_starts_new_cycle() {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounced(Duration::from_millis(100));

    // Act & Assert: first cycle fires
    debounced.call("a");
    advance_and_settle(Duration::from_millis(100)).await;
    assert_eq!(recorder.calls(), vec!["a"]);

    // A later call triggers an independent new firing
    advance_and_settle(Duration::from_millis(500)).await;
    debounced.call("b");
    advance_and_settle(Duration::from_millis(100)).await;
    assert_eq!(recorder.calls(), vec!["a", "b"]);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_calls_fire_exactly_once() {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounced(Duration::from_millis(100));

    // Act: ten calls spaced well below the duration
    for i in 0..10 {
        debounced.call(i);
        advance_and_settle(Duration::from_millis(10)).await;
    }

    // Assert: one firing, carrying the last argument only
    advance_and_settle(Duration::from_millis(100)).await;
    assert_eq!(recorder.calls(), vec![9]);
}

#[tokio::test(start_paused = true)]
async fn test_cancelling_returned_handle_prevents_firing() {
    // Arrange
    let recorder = CallRecorder::<&str>::new();
    let debounced = recorder.callback().debounced(Duration::from_millis(100));

    // Act
    let handle = debounced.call("a");
    handle.cancel();

    // Assert: no firing, ever
    advance_and_settle(Duration::from_millis(1000)).await;
    assert_no_calls(&recorder);
    assert!(handle.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_method_clears_pending_firing() {
    // Arrange
    let recorder = CallRecorder::<&str>::new();
    let debounced = recorder.callback().debounced(Duration::from_millis(100));

    // Act
    debounced.call("a");
    debounced.cancel();

    // Assert: cancelled wrapper stays usable afterwards
    advance_and_settle(Duration::from_millis(1000)).await;
    assert_no_calls(&recorder);

    debounced.call("b");
    advance_and_settle(Duration::from_millis(100)).await;
    assert_eq!(recorder.calls(), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn test_instances_debounce_independently() {
    // Arrange
    let first_recorder = CallRecorder::new();
    let second_recorder = CallRecorder::new();
    let first = first_recorder
        .callback()
        .debounced(Duration::from_millis(100));
    let second = second_recorder
        .callback()
        .debounced(Duration::from_millis(100));

    // Act: interleaved calls must not cancel across instances
    first.call("a");
    advance_and_settle(Duration::from_millis(50)).await;
    second.call("b");

    // Assert
    advance_and_settle(Duration::from_millis(50)).await;
    assert_eq!(first_recorder.calls(), vec!["a"]);
    assert_no_calls(&second_recorder);

    advance_and_settle(Duration::from_millis(50)).await;
    assert_eq!(second_recorder.calls(), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn test_clones_share_the_pending_slot() {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = recorder.callback().debounced(Duration::from_millis(100));
    let clone = debounced.clone();

    // Act: a call through the clone supersedes the original's pending firing
    debounced.call("a");
    advance_and_settle(Duration::from_millis(50)).await;
    clone.call("b");

    // Assert
    advance_and_settle(Duration::from_millis(100)).await;
    assert_eq!(recorder.calls(), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn test_cumulative_delayed_alias_debounces() {
    // Arrange
    let recorder = CallRecorder::new();
    let wrapper = recorder
        .callback()
        .cumulative_delayed(Duration::from_millis(100));

    // Act
    wrapper.call("a");
    wrapper.call("b");

    // Assert
    advance_and_settle(Duration::from_millis(100)).await;
    assert_eq!(recorder.calls(), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn test_debounced_with_explicit_timer() {
    // Arrange
    let recorder = CallRecorder::new();
    let debounced = recorder
        .callback()
        .debounced_with_timer(TokioTimer, Duration::from_millis(100));

    // Act
    debounced.call("a");
    debounced.call("b");

    // Assert
    advance_and_settle(Duration::from_millis(100)).await;
    assert_eq!(recorder.calls(), vec!["b"]);
}
