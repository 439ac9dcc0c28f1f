// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use fingertip_gesture::synth::TouchSynth;
use fingertip_gesture::{GestureRecognizer, TouchEvent};
use fingertip_swipe::{SwipeConfig, SwipeRecognizer};
use fingertip_zoom::{PinchZoom, ZoomConfig};
use kurbo::Size;

/// One finger dragging right in `moves` steps, 8ms apart.
fn pan_script(moves: usize) -> Vec<TouchEvent> {
    let mut touch = TouchSynth::new();
    let mut script = Vec::with_capacity(moves + 2);
    script.push(touch.down(1, 10.0, 100.0, 0));
    let mut t = 0;
    for i in 1..=moves {
        t += 8;
        script.push(touch.move_to(1, 10.0 + i as f64 * 3.0, 100.0, t));
    }
    script.push(touch.up(1, t + 8));
    script
}

/// Two fingers spreading apart in `moves` steps, 8ms apart.
fn pinch_script(moves: usize) -> Vec<TouchEvent> {
    let mut touch = TouchSynth::new();
    let mut script = Vec::with_capacity(moves + 4);
    script.push(touch.down(1, 150.0, 200.0, 0));
    script.push(touch.down(2, 250.0, 200.0, 4));
    let mut t = 4;
    for i in 1..=moves {
        t += 8;
        let spread = 50.0 + i as f64 * 2.0;
        let fingers = [(1, 200.0 - spread, 200.0), (2, 200.0 + spread, 200.0)];
        script.push(touch.move_many(&fingers, t));
    }
    script.push(touch.up(1, t + 8));
    script.push(touch.up(2, t + 16));
    script
}

fn bench_recognizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognizer/handle");

    for moves in [16usize, 128, 1_024] {
        group.throughput(Throughput::Elements(moves as u64));

        let pan = pan_script(moves);
        group.bench_with_input(BenchmarkId::new("pan", moves), &pan, |b, script| {
            b.iter_batched(
                GestureRecognizer::default,
                |mut rec| {
                    for event in script {
                        black_box(rec.handle(event));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        let pinch = pinch_script(moves);
        group.bench_with_input(BenchmarkId::new("pinch", moves), &pinch, |b, script| {
            b.iter_batched(
                GestureRecognizer::default,
                |mut rec| {
                    for event in script {
                        black_box(rec.handle(event));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_specializations(c: &mut Criterion) {
    let mut group = c.benchmark_group("specializations");
    let moves = 256usize;
    group.throughput(Throughput::Elements(moves as u64));

    // Classify once; these measure only the specialization on top.
    let mut rec = GestureRecognizer::default();
    let pans: Vec<_> = pan_script(moves)
        .iter()
        .flat_map(|e| rec.handle(e).into_iter().map(move |g| (g, e.timestamp)))
        .collect();
    let mut rec = GestureRecognizer::default();
    let pinches: Vec<_> = pinch_script(moves)
        .iter()
        .flat_map(|e| rec.handle(e).into_iter().map(move |g| (g, e.timestamp)))
        .collect();

    group.bench_function("swipe", |b| {
        b.iter_batched(
            || SwipeRecognizer::new(SwipeConfig::default()).unwrap(),
            |mut swipe| {
                for (gesture, t) in &pans {
                    black_box(swipe.handle(gesture, *t));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pinch_zoom", |b| {
        b.iter_batched(
            || {
                let mut zoom = PinchZoom::new(ZoomConfig::default()).unwrap();
                zoom.set_container_size(Size::new(400.0, 400.0));
                zoom
            },
            |mut zoom| {
                for (gesture, t) in &pinches {
                    black_box(zoom.handle(gesture, *t));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_recognizer, bench_specializations);
criterion_main!(benches);
