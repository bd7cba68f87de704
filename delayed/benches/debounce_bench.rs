// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use delayed::prelude::*;
use std::hint::black_box;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::advance;

pub fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce_overhead");
    let bursts = [1usize, 10, 100];

    for &burst in &bursts {
        group.throughput(Throughput::Elements(burst as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(burst),
            &burst,
            |bencher, &burst| {
                bencher.iter(|| {
                    // 1. Setup a lightweight, paused runtime
                    let rt = Builder::new_current_thread()
                        .enable_time()
                        .start_paused(true)
                        .build()
                        .unwrap();

                    rt.block_on(async {
                        // 2. Wrap a trivial callback
                        let debounced =
                            (|value: usize| {
                                black_box(value);
                            })
                            .debounced(Duration::from_millis(100));

                        // 3. Issue the burst; every call but the last is superseded
                        for i in 0..burst {
                            debounced.call(i);
                        }

                        // 4. Advance time instantly (0 wall-clock time, pure CPU cost)
                        advance(Duration::from_millis(100)).await;
                        tokio::task::yield_now().await;
                    });
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_debounce);
criterion_main!(benches);
